//! Coordinate-capture collaborators.
//!
//! A capture source resolves two user positions into native map space.
//! The search core never invokes capture itself; it only accepts the
//! already-resolved coordinates, so UI concerns stay outside the search.

use crate::geometry::{UserPoint, Viewport};

/// A source of two captured user positions.
pub trait PointCapture {
    /// Blocks until both positions are resolved, already mapped to native
    /// space through the coordinate mapper.
    ///
    /// Lifecycle rule: an implementation backed by a one-shot display
    /// context cannot be relaunched within the process. Such a source must
    /// return the sentinel pair `(None, None)` when re-invoked rather than
    /// attempt a second launch.
    fn capture_two_points(&mut self, viewport: Viewport) -> (UserPoint, UserPoint);
}

/// Capture source that yields a preset pair exactly once.
///
/// The first call returns the configured points; later calls return the
/// sentinel pair, matching the one-shot lifecycle rule. Doubles as the
/// test stand-in for an interactive source.
#[derive(Debug)]
pub struct FixedCapture {
    points: Option<(UserPoint, UserPoint)>,
}

impl FixedCapture {
    pub fn new(a: UserPoint, b: UserPoint) -> Self {
        Self {
            points: Some((a, b)),
        }
    }
}

impl PointCapture for FixedCapture {
    fn capture_two_points(&mut self, _viewport: Viewport) -> (UserPoint, UserPoint) {
        match self.points.take() {
            Some(pair) => pair,
            None => {
                tracing::warn!("capture source exhausted; returning sentinel pair");
                (None, None)
            }
        }
    }
}
