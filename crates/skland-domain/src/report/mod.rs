mod display;
mod run_report;

pub use display::{build_line, display_width, pad_to_width, GAME_COLUMN_WIDTH, ROLE_COLUMN_WIDTH};
pub use run_report::RunReport;
