mod credential;
mod token;

pub use credential::{Credential, GrantCode};
pub use token::LoginToken;
