use anyhow::{Context, Result};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::RequestBuilder;

use skland_domain::account::Credential;
use skland_domain::check_in::{AttendanceRequest, AttendanceResponse};
use skland_domain::game::Game;
use skland_domain::DomainError;

use super::types::{api_url, path_and_query};
use super::{network_error, RetryOn};
use crate::http::signing::Signer;

impl super::HttpClient {
    /// POST the attendance request for one role.
    ///
    /// The body is serialized once; the same bytes are signed and sent.
    pub async fn send_attendance(
        &self,
        credential: &Credential,
        game: Game,
        request: &AttendanceRequest,
    ) -> Result<AttendanceResponse, DomainError> {
        let url = api_url(game.checkin_path());
        let body = serde_json::to_string(request)
            .map_err(|e| DomainError::InvalidInput(format!("attendance body: {}", e)))?;

        log::debug!("Sending {} attendance: {}", game, body);

        self.send_json("attendance", RetryOn::ConnectOnly, || {
            self.signed_post(&url, &body, credential)
        })
        .await
        .map_err(network_error)
    }

    /// Signed JSON POST of `body` to `url`
    fn signed_post(
        &self,
        url: &str,
        body: &str,
        credential: &Credential,
    ) -> Result<RequestBuilder> {
        let (path, _) = path_and_query(url)?;
        let mut headers = Signer::new(credential.sign_token())
            .sign_now(&path, body)?
            .to_headers(credential.cred())
            .context("Failed to build signed headers")?;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(self.client.post(url).headers(headers).body(body.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::HttpClient;
    use super::*;
    use crate::config::TimeoutConfig;
    use skland_domain::check_in::ArknightsAttendance;

    #[test]
    fn test_signed_post_sends_the_signed_bytes() {
        let client = HttpClient::new(&TimeoutConfig::default()).unwrap();
        let credential = Credential::new("cred-1", "secret-token");
        let body = serde_json::to_string(&AttendanceRequest::Arknights(ArknightsAttendance {
            uid: Some("123".to_string()),
            game_id: Some("1".to_string()),
        }))
        .unwrap();

        let request = client
            .signed_post(&api_url(Game::Arknights.checkin_path()), &body, &credential)
            .unwrap()
            .build()
            .unwrap();

        let sent = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(sent, br#"{"uid":"123","gameId":"1"}"#);

        let headers = request.headers();
        let timestamp: i64 = headers["timestamp"].to_str().unwrap().parse().unwrap();
        let expected = Signer::new("secret-token")
            .sign("/api/v1/game/attendance", std::str::from_utf8(sent).unwrap(), timestamp)
            .unwrap();

        assert_eq!(headers["sign"], expected.sign.as_str());
        assert_eq!(headers["cred"], "cred-1");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(request.url().path(), "/api/v1/game/attendance");
    }
}
