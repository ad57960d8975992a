pub mod check_in_runner;
pub mod handlers;
pub mod login;

#[cfg(test)]
pub(crate) mod test_support;

pub use check_in_runner::CheckInRunner;
pub use handlers::{handler_for, ArknightsHandler, EndfieldHandler};
pub use login::LoginService;
