use std::fmt;

/// Short-lived code returned by the identity provider, consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantCode(String);

impl GrantCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Session credential for one account for one run.
///
/// `cred` travels in the `cred` header of every signed request and
/// `sign_token` keys the request signature.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    cred: String,
    sign_token: String,
}

impl Credential {
    pub fn new(cred: impl Into<String>, sign_token: impl Into<String>) -> Self {
        Self {
            cred: cred.into(),
            sign_token: sign_token.into(),
        }
    }

    pub fn cred(&self) -> &str {
        &self.cred
    }

    pub fn sign_token(&self) -> &str {
        &self.sign_token
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("cred", &"***")
            .field("sign_token", &"***")
            .finish()
    }
}
