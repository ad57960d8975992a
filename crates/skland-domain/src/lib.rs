// Domain layer - Pure check-in logic
// No dependencies on infrastructure or presentation layers

pub mod account;
pub mod check_in;
pub mod game;
pub mod notification;
pub mod report;
pub mod shared;

// Re-exports for convenience
pub use shared::{DomainError, ErrorCode, ErrorSeverity};
