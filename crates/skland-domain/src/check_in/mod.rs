mod api;
mod handler;
mod response;
mod rewards;


pub use api::{
    ArknightsAttendance, AttendanceRequest, EndfieldAttendance, SklandApi, ENDFIELD_GAME_ID,
};
pub use handler::CheckinHandler;
pub use response::{
    parse_checkin_response, AttendanceResponse, CheckinVerdict, ALREADY_CHECKED_IN,
    MISSING_ROLE_PARAMS, UNKNOWN_ERROR,
};
pub use rewards::{
    arknights_reward_text, endfield_reward_text, NO_REWARD_INFO, UNRECOGNIZED_REWARDS,
};
