//! Scoring module - fixed line-clear lookup
//!
//! Score is awarded once per lock, from the number of rows that lock cleared.
//! There is no level multiplier, combo or drop bonus.

use crate::types::LINE_SCORES;

/// Score for clearing `lines` rows in a single lock.
/// Anything outside 1-4 scores 0.
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_scores() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 10);
        assert_eq!(line_clear_score(2), 30);
        assert_eq!(line_clear_score(3), 60);
        assert_eq!(line_clear_score(4), 100);
    }

    #[test]
    fn test_out_of_table_scores_nothing() {
        assert_eq!(line_clear_score(5), 0);
        assert_eq!(line_clear_score(20), 0);
    }
}
