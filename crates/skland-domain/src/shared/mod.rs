/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Configuration (1xxx)
    MissingTokens = 1001,

    // Authentication (2xxx)
    AuthFailed = 2001,

    // Roles (3xxx)
    RoleFetchFailed = 3001,

    // Data (4xxx)
    DeserializationError = 4001,

    // Infrastructure (5xxx)
    NetworkError = 5001,
    NotificationError = 5002,

    // Validation (6xxx)
    InvalidInput = 6001,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::MissingTokens => ErrorSeverity::Critical,

            ErrorCode::AuthFailed
            | ErrorCode::DeserializationError
            | ErrorCode::NotificationError => ErrorSeverity::Error,

            ErrorCode::RoleFetchFailed | ErrorCode::NetworkError => ErrorSeverity::Warning,

            ErrorCode::InvalidInput => ErrorSeverity::Info,
        }
    }

    /// Check if error is recoverable on a later run
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorCode::NetworkError | ErrorCode::RoleFetchFailed)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Role error: {0}")]
    Role(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Config(_) => ErrorCode::MissingTokens,
            DomainError::Auth(_) => ErrorCode::AuthFailed,
            DomainError::Role(_) => ErrorCode::RoleFetchFailed,
            DomainError::Network(_) => ErrorCode::NetworkError,
            DomainError::Deserialization(_) => ErrorCode::DeserializationError,
            DomainError::Notification(_) => ErrorCode::NotificationError,
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
        }
    }

    /// Get the bare error message, without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            DomainError::Config(msg)
            | DomainError::Auth(msg)
            | DomainError::Role(msg)
            | DomainError::Network(msg)
            | DomainError::Deserialization(msg)
            | DomainError::Notification(msg)
            | DomainError::InvalidInput(msg) => msg,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}
