//! Scoring module - row-clear points
//!
//! A landing that clears `k` rows scores `10 + 20 + ... + 10k`: the rows are
//! cleared one pass at a time and pass `n` is worth `n * ROW_CLEAR_POINTS`.

use crate::types::ROW_CLEAR_POINTS;

/// Points for the `pass`-th row cleared by one landing (1-based).
pub fn row_clear_points(pass: u32) -> u32 {
    ROW_CLEAR_POINTS.saturating_mul(pass)
}

/// Total points for a landing that clears `rows` rows.
pub fn landing_points(rows: u32) -> u32 {
    (1..=rows).map(row_clear_points).fold(0, u32::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_points_grow_linearly() {
        assert_eq!(row_clear_points(1), 10);
        assert_eq!(row_clear_points(2), 20);
        assert_eq!(row_clear_points(4), 40);
    }

    #[test]
    fn landing_points_are_triangular() {
        assert_eq!(landing_points(0), 0);
        assert_eq!(landing_points(1), 10);
        assert_eq!(landing_points(2), 30);
        assert_eq!(landing_points(3), 60);
        assert_eq!(landing_points(4), 100);
    }
}
