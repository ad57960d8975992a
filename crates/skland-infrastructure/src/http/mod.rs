pub mod client;
pub mod signing;

pub use client::{HttpClient, RetryConfig};
pub use signing::{SignHeader, Signature, Signer};
