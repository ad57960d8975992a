//! Skland request signature.
//!
//! `sign = md5_hex(hmac_sha256_hex(sign_token, path + payload + timestamp + header_json))`
//! where `header_json` is the compact JSON of [`SignHeader`] in its declared
//! key order and `payload` is the raw query (GET) or the exact JSON body (POST).

use anyhow::{Context, Result};
use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Seconds subtracted from the local clock before signing
pub const TIMESTAMP_SKEW_SECS: i64 = 2;

/// Header fields folded into the signature; field order is part of the format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignHeader {
    pub platform: String,
    pub timestamp: String,
    #[serde(rename = "dId")]
    pub d_id: String,
    #[serde(rename = "vName")]
    pub v_name: String,
}

impl SignHeader {
    pub fn at(timestamp: i64) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub sign: String,
    pub header: SignHeader,
}

impl Signature {
    /// Signed headers plus the `cred` header for one request
    pub fn to_headers(&self, cred: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let pairs: [(&'static str, &str); 6] = [
            ("sign", self.sign.as_str()),
            ("platform", self.header.platform.as_str()),
            ("timestamp", self.header.timestamp.as_str()),
            ("did", self.header.d_id.as_str()),
            ("vname", self.header.v_name.as_str()),
            ("cred", cred),
        ];
        for (name, value) in pairs {
            headers.insert(
                HeaderName::from_static(name),
                HeaderValue::from_str(value)
                    .with_context(|| format!("Invalid value for header {}", name))?,
            );
        }
        Ok(headers)
    }
}

/// Signs requests with the secret bound to one credential
pub struct Signer<'a> {
    sign_token: &'a str,
}

impl<'a> Signer<'a> {
    pub fn new(sign_token: &'a str) -> Self {
        Self { sign_token }
    }

    /// Sign with an explicit timestamp
    pub fn sign(&self, path: &str, payload: &str, timestamp: i64) -> Result<Signature> {
        let header = SignHeader::at(timestamp);
        let header_json =
            serde_json::to_string(&header).context("Failed to serialize sign header")?;
        let input = format!("{}{}{}{}", path, payload, header.timestamp, header_json);

        let mut mac = HmacSha256::new_from_slice(self.sign_token.as_bytes())
            .context("Invalid sign token")?;
        mac.update(input.as_bytes());
        let hmac_hex = hex::encode(mac.finalize().into_bytes());

        let mut hasher = Md5::new();
        hasher.update(hmac_hex.as_bytes());
        let sign = format!("{:x}", hasher.finalize());

        Ok(Signature { sign, header })
    }

    /// Sign with the current time minus [`TIMESTAMP_SKEW_SECS`]
    pub fn sign_now(&self, path: &str, payload: &str) -> Result<Signature> {
        self.sign(path, payload, chrono::Utc::now().timestamp() - TIMESTAMP_SKEW_SECS)
    }
}
