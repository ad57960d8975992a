mod arknights;
mod endfield;

pub use arknights::ArknightsHandler;
pub use endfield::EndfieldHandler;

use std::sync::Arc;

use skland_domain::check_in::{CheckinHandler, SklandApi};
use skland_domain::game::Game;

/// Check-in strategy for `game`
pub fn handler_for(game: Game, api: Arc<dyn SklandApi>) -> Box<dyn CheckinHandler> {
    match game {
        Game::Arknights => Box::new(ArknightsHandler::new(api)),
        Game::Endfield => Box::new(EndfieldHandler::new(api)),
    }
}
