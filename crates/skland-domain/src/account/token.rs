use serde::Deserialize;
use std::fmt;

/// Long-lived login token supplied by the user, one per account.
///
/// The user may paste either the bare token or the whole JSON document
/// returned by the web login page, e.g. `{"code":0,"data":{"content":"..."}}`.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginToken(String);

#[derive(Deserialize)]
struct Envelope {
    data: EnvelopeData,
}

#[derive(Deserialize)]
struct EnvelopeData {
    content: String,
}

impl LoginToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value to submit to the grant endpoint.
    ///
    /// Attempts a structured parse of the JSON envelope and returns the
    /// nested `data.content`; on any failure falls back to the raw value.
    pub fn unwrap_envelope(&self) -> String {
        match serde_json::from_str::<Envelope>(&self.0) {
            Ok(envelope) => {
                log::debug!("Login token is a JSON envelope, using data.content");
                envelope.data.content
            }
            Err(_) => self.0.clone(),
        }
    }
}

// Tokens are secrets; never print them in full
impl fmt::Debug for LoginToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(4).collect();
        write!(f, "LoginToken({}***)", prefix)
    }
}

impl From<&str> for LoginToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LoginToken {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
