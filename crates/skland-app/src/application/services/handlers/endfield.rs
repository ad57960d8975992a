use async_trait::async_trait;
use std::sync::Arc;

use skland_domain::account::Credential;
use skland_domain::check_in::{
    endfield_reward_text, parse_checkin_response, AttendanceRequest, CheckinHandler,
    CheckinVerdict, EndfieldAttendance, SklandApi, ENDFIELD_GAME_ID, MISSING_ROLE_PARAMS,
};
use skland_domain::game::{Game, Role};
use skland_domain::report::build_line;
use skland_domain::DomainError;

pub struct EndfieldHandler {
    api: Arc<dyn SklandApi>,
}

impl EndfieldHandler {
    pub fn new(api: Arc<dyn SklandApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CheckinHandler for EndfieldHandler {
    fn game(&self) -> Game {
        Game::Endfield
    }

    async fn handle(&self, credential: &Credential, role: &Role) -> Result<String, DomainError> {
        let Role::Endfield(binding) = role else {
            return Err(DomainError::InvalidInput(format!(
                "{} role passed to endfield handler",
                role.game()
            )));
        };
        let line = |result: &str| {
            build_line(
                Game::Endfield.name(),
                role.display_name(),
                role.channel(),
                result,
            )
        };

        // Attendance is keyed by the in-game role, not the Skland uid
        let Some((role_id, server_id)) = binding.attendance_target() else {
            return Ok(line(MISSING_ROLE_PARAMS));
        };

        let request = AttendanceRequest::Endfield(EndfieldAttendance {
            uid: binding.uid.clone(),
            game_id: ENDFIELD_GAME_ID,
            role_id: role_id.to_string(),
            server_id: server_id.to_string(),
        });
        let resp = self
            .api
            .attendance(credential, Game::Endfield, &request)
            .await?;

        let result = match parse_checkin_response(&resp) {
            CheckinVerdict::Ok => endfield_reward_text(resp.data.as_ref()),
            CheckinVerdict::Failed(message) => message,
        };

        Ok(line(&result))
    }
}
