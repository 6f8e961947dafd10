//! Collision policy for simultaneous buy/sell timestamps.
//!
//! A buy that carries exactly the same timestamp as some sell is shifted
//! forward by [`COLLISION_EPSILON`] before fitting. Sells are never touched
//! and the inputs are never mutated; the adjusted buys come back as a new
//! array.
//!
//! The shift can push a buy past the buy that follows it (for example buys
//! `[2.0, 2.00005]` against a sell at `2.0`). That case is not repaired:
//! [`shift_collisions`] reports it as [`HawkesError::DedupOrderViolation`].
use crate::hawkes::errors::{HawkesError, HawkesResult};
use ndarray::{Array1, ArrayView1};

/// Forward shift applied to a buy that collides with a sell.
pub const COLLISION_EPSILON: f64 = 1e-4;

/// Shift every buy that exactly equals some sell by [`COLLISION_EPSILON`].
///
/// Matching is exact `f64` equality against any element of `sells`, so the
/// cost is O(n_buys · n_sells); the intensity-ratio windows are small.
///
/// Errors
/// ------
/// - `HawkesError::DedupOrderViolation` when a shifted buy ends up strictly
///   after the next buy although the unshifted pair was ordered.
///   Pairs that were already out of order are left for event validation.
pub fn shift_collisions(
    buys: ArrayView1<f64>, sells: ArrayView1<f64>,
) -> HawkesResult<Array1<f64>> {
    let shifted: Array1<f64> = buys
        .iter()
        .map(|&b| if sells.iter().any(|&s| s == b) { b + COLLISION_EPSILON } else { b })
        .collect();

    for index in 1..shifted.len() {
        let was_ordered = buys[index - 1] <= buys[index];
        if was_ordered && shifted[index - 1] > shifted[index] {
            let err = HawkesError::DedupOrderViolation {
                index: index - 1,
                shifted: shifted[index - 1],
                next: shifted[index],
            };
            #[cfg(feature = "obs_slog")]
            eprintln!("warning: {err}");
            return Err(err);
        }
    }

    Ok(shifted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Exact-match shifting of colliding buys and passthrough otherwise.
    // - Sells and inputs are left untouched.
    // - Detection of order violations introduced by the shift.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Only buys that equal a sell are shifted, by exactly the collision
    // epsilon.
    //
    // Given
    // -----
    // - Buys `[1, 2]`, sells `[2, 3]`.
    //
    // Expect
    // ------
    // - Adjusted buys `[1, 2.0001]`; the inputs are unchanged.
    fn shifts_only_colliding_buys() {
        let buys = array![1.0, 2.0];
        let sells = array![2.0, 3.0];

        let adjusted = shift_collisions(buys.view(), sells.view()).unwrap();

        assert_eq!(adjusted[0], 1.0);
        assert_relative_eq!(adjusted[1], 2.0001, epsilon = 1e-12);
        assert_eq!(buys, array![1.0, 2.0]);
        assert_eq!(sells, array![2.0, 3.0]);
    }

    #[test]
    // Purpose
    // -------
    // Without collisions the buys pass through bit-for-bit.
    //
    // Given
    // -----
    // - Buys `[1, 2, 3]`, sells `[1.5, 2.5]`.
    //
    // Expect
    // ------
    // - Output equals input.
    fn passes_through_without_collisions() {
        let buys = array![1.0, 2.0, 3.0];

        let adjusted = shift_collisions(buys.view(), array![1.5, 2.5].view()).unwrap();

        assert_eq!(adjusted, buys);
    }

    #[test]
    // Purpose
    // -------
    // Matching is exact equality, not a tolerance, and applies against any
    // sell regardless of position.
    //
    // Given
    // -----
    // - Buy `1.0` against sell `1.0 + 1e-12`, buy `5.0` against a sell late
    //   in the array, and tied buys `[5.0, 5.0]`.
    //
    // Expect
    // ------
    // - Near-miss untouched; both tied buys shifted identically.
    fn matching_is_exact_and_global() {
        let buys = array![1.0, 5.0, 5.0];
        let sells = array![1.0 + 1e-12, 2.0, 5.0];

        let adjusted = shift_collisions(buys.view(), sells.view()).unwrap();

        assert_eq!(adjusted[0], 1.0);
        assert_eq!(adjusted[1], 5.0 + COLLISION_EPSILON);
        assert_eq!(adjusted[2], adjusted[1]);
    }

    #[test]
    // Purpose
    // -------
    // A shift that overtakes the next buy is reported rather than re-sorted.
    //
    // Given
    // -----
    // - Buys `[2.0, 2.00005]`, sell `[2.0]`.
    //
    // Expect
    // ------
    // - `DedupOrderViolation { index: 0, .. }`.
    fn reports_order_violation() {
        let err = shift_collisions(array![2.0, 2.00005].view(), array![2.0].view()).unwrap_err();

        match err {
            HawkesError::DedupOrderViolation { index, shifted, next } => {
                assert_eq!(index, 0);
                assert!(shifted > next);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
