use async_trait::async_trait;
use std::sync::Arc;

use skland_domain::account::Credential;
use skland_domain::check_in::{
    arknights_reward_text, parse_checkin_response, ArknightsAttendance, AttendanceRequest,
    CheckinHandler, CheckinVerdict, SklandApi,
};
use skland_domain::game::{Game, Role};
use skland_domain::report::build_line;
use skland_domain::DomainError;

pub struct ArknightsHandler {
    api: Arc<dyn SklandApi>,
}

impl ArknightsHandler {
    pub fn new(api: Arc<dyn SklandApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CheckinHandler for ArknightsHandler {
    fn game(&self) -> Game {
        Game::Arknights
    }

    async fn handle(&self, credential: &Credential, role: &Role) -> Result<String, DomainError> {
        let Role::Arknights(binding) = role else {
            return Err(DomainError::InvalidInput(format!(
                "{} role passed to arknights handler",
                role.game()
            )));
        };

        let request = AttendanceRequest::Arknights(ArknightsAttendance {
            uid: binding.uid.clone(),
            game_id: binding.channel_master_id.clone(),
        });
        let resp = self
            .api
            .attendance(credential, Game::Arknights, &request)
            .await?;

        let result = match parse_checkin_response(&resp) {
            CheckinVerdict::Ok => arknights_reward_text(resp.data.as_ref()),
            CheckinVerdict::Failed(message) => message,
        };

        Ok(build_line(
            Game::Arknights.name(),
            role.display_name(),
            role.channel(),
            &result,
        ))
    }
}
