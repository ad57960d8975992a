//! Fixed-width report lines.
//!
//! Chinese text renders double-width in terminals, so column padding counts
//! CJK ideographs and CJK punctuation as two cells.

pub const GAME_COLUMN_WIDTH: usize = 18;
pub const ROLE_COLUMN_WIDTH: usize = 32;

fn char_width(c: char) -> usize {
    match c {
        '\u{4e00}'..='\u{9fff}' | '\u{3000}'..='\u{303f}' => 2,
        _ => 1,
    }
}

/// Display width of `s` in terminal cells
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Right-pad `s` with spaces up to `target_width` cells; never truncates
pub fn pad_to_width(s: &str, target_width: usize) -> String {
    let padding = target_width.saturating_sub(display_width(s));
    let mut padded = String::with_capacity(s.len() + padding);
    padded.push_str(s);
    padded.extend(std::iter::repeat(' ').take(padding));
    padded
}

/// `[game]`, `role（channel）` and the result, tab separated
pub fn build_line(game_name: &str, role_name: &str, channel: &str, result: &str) -> String {
    let game = pad_to_width(&format!("[{}]", game_name), GAME_COLUMN_WIDTH);
    let role_info = pad_to_width(&format!("{}（{}）", role_name, channel), ROLE_COLUMN_WIDTH);
    format!("{}\t{}\t结果：{}", game, role_info, result)
}
