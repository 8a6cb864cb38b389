//! Scoring module - flat rate per cleared row
//!
//! There is no multi-line bonus: four rows cleared at once score the same as
//! four single clears.

use crate::types::LINE_CLEAR_SCORE;

/// Points for clearing `lines` rows in one freeze
///
/// # Examples
///
/// ```
/// use blockfall_core::line_clear_score;
///
/// assert_eq!(line_clear_score(0), 0);
/// assert_eq!(line_clear_score(1), 100);
/// assert_eq!(line_clear_score(4), 400);
/// ```
pub fn line_clear_score(lines: u32) -> u32 {
    lines.saturating_mul(LINE_CLEAR_SCORE)
}
