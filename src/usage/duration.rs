//! Usage duration strings
//!
//! Device usage providers report durations like `"6h 45m"`. Strings that cannot
//! be read count as zero minutes rather than failing.

use tracing::debug;

/// Parse a `"{h}h {m}m"`, `"{h}h"` or `"{m}m"` duration into minutes.
///
/// Minutes may also be written with a `min` suffix. Unparseable input yields 0.
pub fn parse_duration_minutes(text: &str) -> u32 {
    let mut total: u32 = 0;
    let mut parsed_any = false;

    for token in text.split_whitespace() {
        let (number, unit_minutes) = if let Some(hours) = token.strip_suffix('h') {
            (hours, 60)
        } else if let Some(minutes) = token
            .strip_suffix("min")
            .or_else(|| token.strip_suffix('m'))
        {
            (minutes, 1)
        } else {
            debug!(input = text, token, "unrecognized duration token");
            return 0;
        };

        match number.parse::<u32>() {
            Ok(n) => {
                total = total.saturating_add(n.saturating_mul(unit_minutes));
                parsed_any = true;
            }
            Err(_) => {
                debug!(input = text, token, "non-numeric duration token");
                return 0;
            }
        }
    }

    if !parsed_any {
        debug!(input = text, "empty duration treated as zero");
    }
    total
}

/// Format minutes as `"{h}h {m}m"`
pub fn format_duration(minutes: i64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}
