//! Nearest-canteen search.

use smol_str::SmolStr;

use crate::dataset::DatasetIndex;
use crate::error::{MakanError, Result};
use crate::geometry::{self, UserPoint};

/// One ranked hit from the nearest-canteen search.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyCanteen {
    pub name: SmolStr,
    /// Euclidean distance from the query midpoint, untruncated; callers
    /// round or format for display.
    pub distance: f64,
}

/// Ranks canteens by distance to the midpoint of two user positions,
/// returning the `k` closest.
///
/// Both positions must be captured: a sentinel on either side fails with
/// [`MakanError::IncompleteInput`] before any arithmetic happens.
/// Non-positive `k` is corrected to 1 with an advisory warning, not an
/// error, and `k` beyond the canteen count simply returns every canteen.
///
/// Equal distances keep the index enumeration order (case-insensitive
/// canteen name order fixed at build time): the ranking sorts on
/// (distance, enumeration position), so results are reproducible for a
/// given dataset.
pub fn nearest_canteens(
    index: &DatasetIndex,
    a: UserPoint,
    b: UserPoint,
    k: i64,
) -> Result<Vec<NearbyCanteen>> {
    let (Some(a), Some(b)) = (a, b) else {
        return Err(MakanError::IncompleteInput);
    };

    let k = if k < 1 {
        tracing::warn!(k, "non-positive k corrected to 1");
        1
    } else {
        k as usize
    };

    let mid = geometry::midpoint(geometry::to_point(a), geometry::to_point(b));

    let mut ranked: Vec<(usize, NearbyCanteen)> = index
        .locations()
        .iter()
        .enumerate()
        .map(|(pos, (name, &loc))| {
            let hit = NearbyCanteen {
                name: name.clone(),
                distance: geometry::distance(mid, geometry::to_point(loc)),
            };
            (pos, hit)
        })
        .collect();

    // Tie-break by enumeration position for determinism.
    ranked.sort_by(|(pa, ha), (pb, hb)| ha.distance.total_cmp(&hb.distance).then(pa.cmp(pb)));
    ranked.truncate(k);

    Ok(ranked.into_iter().map(|(_, hit)| hit).collect())
}
