//! Line-oriented parser for `config.txt`.
//!
//! The file has no keys: the first six meaningful lines are, in order,
//! start minutes, start seconds, limit minutes, limit seconds, the
//! zero-crossing sound path and the limit sound path. A meaningful line is
//! what remains after cutting at the first `#` and trimming, if non-empty.

use std::path::PathBuf;

use tracing::debug;

use crate::types::TimerConfig;

/// Comment marker; everything from it to end-of-line is ignored.
const COMMENT_MARKER: char = '#';

/// Returns an iterator over the meaningful lines of `text`.
pub fn meaningful_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| strip_comment(line).trim())
        .filter(|line| !line.is_empty())
}

fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Parses a base-10 integer field, falling back to 0.
fn parse_number(field: &str, value: Option<&str>) -> u32 {
    let Some(value) = value else {
        return 0;
    };
    match value.parse::<u32>() {
        Ok(n) => n,
        Err(e) => {
            debug!("Config field {} is not a number ({:?}: {}), using 0", field, value, e);
            0
        }
    }
}

fn parse_path(value: Option<&str>) -> Option<PathBuf> {
    value.map(PathBuf::from)
}

/// Parses the contents of a config file.
///
/// Never fails: missing or malformed fields take 0 (numbers) or no path.
pub fn parse_config(text: &str) -> TimerConfig {
    let mut lines = meaningful_lines(text);

    let start_min = parse_number("start minutes", lines.next());
    let start_sec = parse_number("start seconds", lines.next());
    let limit_min = parse_number("limit minutes", lines.next());
    let limit_sec = parse_number("limit seconds", lines.next());
    let sound_zero_path = parse_path(lines.next());
    let sound_limit_path = parse_path(lines.next());

    TimerConfig {
        sound_zero_path,
        sound_limit_path,
        ..TimerConfig::from_parts(start_min, start_sec, limit_min, limit_sec)
    }
}
