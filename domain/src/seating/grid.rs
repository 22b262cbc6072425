//! Grid layout engine
//!
//! Turns a seat count into a near-square grid shape and decides which
//! flattened seat index carries the majority marker.
//!
//! Shapes come from a divisor scan: every `i` in `1..=floor(√total)` that
//! divides `total` yields the pair `(i, total / i)`, and the pair found at
//! the largest `i` is the shape. Since the scan ascends toward `√total`,
//! that pair is also the most square one; [`GridShape::most_square`] keeps
//! an independent search around so the equivalence stays checked.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Rows × columns for a chamber's seat grid (Value Object)
///
/// `rows <= cols` for every non-empty shape. A chamber without seats gets
/// [`GridShape::EMPTY`], which still satisfies `rows * cols == total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: u32,
    pub cols: u32,
}

impl GridShape {
    /// Sentinel shape for a chamber with no seats ("render nothing")
    pub const EMPTY: GridShape = GridShape { rows: 0, cols: 0 };

    /// Compute the grid shape for `total` seats.
    ///
    /// Picks the last divisor pair found while scanning `i` upward from 1.
    /// Primes end up as a single row; zero yields [`GridShape::EMPTY`].
    pub fn for_total(total: u32) -> Self {
        match divisor_pairs(total).last() {
            Some(&(rows, cols)) => Self { rows, cols },
            None => Self::EMPTY,
        }
    }

    /// Boundary variant of [`GridShape::for_total`] for unvalidated numbers.
    pub fn try_for_total(total: i64) -> Result<Self, DomainError> {
        if total < 0 {
            return Err(DomainError::InvalidInput(format!(
                "seat total must be non-negative, got {total}"
            )));
        }
        let total = u32::try_from(total).map_err(|_| {
            DomainError::InvalidInput(format!("seat total {total} exceeds {}", u32::MAX))
        })?;
        Ok(Self::for_total(total))
    }

    /// The divisor pair minimising `cols - rows`, searched over every pair.
    pub fn most_square(total: u32) -> Self {
        divisor_pairs(total)
            .into_iter()
            .min_by_key(|&(rows, cols)| cols - rows)
            .map(|(rows, cols)| Self { rows, cols })
            .unwrap_or(Self::EMPTY)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Number of cells in the grid
    pub fn capacity(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.cols)
    }

    /// Cell of the `flat_index`-th seat, filling column by column.
    ///
    /// Returns `(row, col)`, or `None` for an empty shape or an index past
    /// the last cell.
    pub fn position_of(&self, flat_index: u32) -> Option<(u32, u32)> {
        if self.is_empty() || u64::from(flat_index) >= self.capacity() {
            return None;
        }
        Some((flat_index % self.rows, flat_index / self.rows))
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// All divisor pairs `(i, total / i)` with `i <= √total`, ascending in `i`.
pub fn divisor_pairs(total: u32) -> Vec<(u32, u32)> {
    let mut pairs = Vec::new();
    let mut i: u32 = 1;
    while u64::from(i) * u64::from(i) <= u64::from(total) {
        if total % i == 0 {
            pairs.push((i, total / i));
        }
        i += 1;
    }
    pairs
}

/// Flattened index of the seat that carries the majority marker
pub fn majority_threshold(total: u32) -> u32 {
    total / 2
}

/// Whether the seat at `flat_index` is the majority seat
pub fn is_majority_index(flat_index: u32, threshold: u32) -> bool {
    flat_index == threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_of_one() {
        assert_eq!(GridShape::for_total(1), GridShape { rows: 1, cols: 1 });
    }

    #[test]
    fn test_shape_of_twelve() {
        assert_eq!(divisor_pairs(12), vec![(1, 12), (2, 6), (3, 4)]);
        assert_eq!(GridShape::for_total(12), GridShape { rows: 3, cols: 4 });
    }

    #[test]
    fn test_shape_of_prime() {
        assert_eq!(divisor_pairs(13), vec![(1, 13)]);
        assert_eq!(GridShape::for_total(13), GridShape { rows: 1, cols: 13 });
    }

    #[test]
    fn test_shape_of_perfect_square() {
        assert_eq!(GridShape::for_total(100), GridShape { rows: 10, cols: 10 });
    }

    #[test]
    fn test_shape_of_house() {
        // 435 = 3 * 5 * 29
        assert_eq!(GridShape::for_total(435), GridShape { rows: 15, cols: 29 });
    }

    #[test]
    fn test_shape_of_zero_is_empty() {
        assert!(divisor_pairs(0).is_empty());
        let shape = GridShape::for_total(0);
        assert_eq!(shape, GridShape::EMPTY);
        assert!(shape.is_empty());
        assert_eq!(shape.capacity(), 0);
    }

    #[test]
    fn test_product_equals_total() {
        for total in 1..=10_000 {
            let shape = GridShape::for_total(total);
            assert_eq!(shape.capacity(), u64::from(total), "total {total}");
        }
    }

    #[test]
    fn test_rows_never_exceed_cols() {
        for total in 1..=10_000 {
            let shape = GridShape::for_total(total);
            assert!(shape.rows <= shape.cols, "total {total} gave {shape}");
        }
    }

    #[test]
    fn test_last_found_is_most_square() {
        for total in 0..=10_000 {
            assert_eq!(
                GridShape::for_total(total),
                GridShape::most_square(total),
                "total {total}"
            );
        }
    }

    #[test]
    fn test_large_total_does_not_overflow() {
        let shape = GridShape::for_total(u32::MAX);
        assert_eq!(shape.capacity(), u64::from(u32::MAX));
    }

    #[test]
    fn test_try_for_total_rejects_negative() {
        assert!(matches!(
            GridShape::try_for_total(-1),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            GridShape::try_for_total(i64::from(u32::MAX) + 1),
            Err(DomainError::InvalidInput(_))
        ));
        assert_eq!(GridShape::try_for_total(0), Ok(GridShape::EMPTY));
        assert_eq!(
            GridShape::try_for_total(12),
            Ok(GridShape { rows: 3, cols: 4 })
        );
    }

    #[test]
    fn test_position_fills_columns_first() {
        let shape = GridShape::for_total(12);
        assert_eq!(shape.position_of(0), Some((0, 0)));
        assert_eq!(shape.position_of(2), Some((2, 0)));
        assert_eq!(shape.position_of(3), Some((0, 1)));
        assert_eq!(shape.position_of(11), Some((2, 3)));
        assert_eq!(shape.position_of(12), None);
        assert_eq!(GridShape::EMPTY.position_of(0), None);
    }

    #[test]
    fn test_majority_threshold() {
        assert_eq!(majority_threshold(0), 0);
        assert_eq!(majority_threshold(5), 2);
        assert_eq!(majority_threshold(100), 50);
        assert_eq!(majority_threshold(435), 217);
    }

    #[test]
    fn test_is_majority_index_is_equality() {
        for k in 0..50 {
            for t in 0..50 {
                assert_eq!(is_majority_index(k, t), k == t);
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(GridShape::for_total(12).to_string(), "3x4");
    }
}
