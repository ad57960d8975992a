mod role;


pub use role::{
    resolve_roles, ArknightsRole, BindingGroup, EndfieldDefaultRole, EndfieldRole, Role,
    UNKNOWN_CHANNEL, UNKNOWN_ROLE,
};

use std::fmt;

/// Games supported by the Skland attendance API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    Arknights,
    Endfield,
}

impl Game {
    /// Every supported game, in the order a run visits them
    pub const ALL: [Game; 2] = [Game::Arknights, Game::Endfield];

    /// Display name used in report lines
    pub fn name(&self) -> &'static str {
        match self {
            Game::Arknights => "明日方舟",
            Game::Endfield => "明日方舟：终末地",
        }
    }

    /// `appCode` of the binding group holding this game's roles
    pub fn app_code(&self) -> &'static str {
        match self {
            Game::Arknights => "arknights",
            Game::Endfield => "endfield",
        }
    }

    /// Path of the attendance endpoint, relative to the Skland API host
    pub fn checkin_path(&self) -> &'static str {
        match self {
            Game::Arknights => "/api/v1/game/attendance",
            Game::Endfield => "/api/v1/game/endfield/attendance",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.app_code())
    }
}
