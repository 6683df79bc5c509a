//! The immutable dataset index.
//!
//! [`DatasetIndex`] owns the canteen-to-stalls and canteen-to-location
//! mappings. It is built once from raw rows and read-only afterwards; every
//! consumer receives it by reference rather than through module state.

use std::path::Path;

use indexmap::IndexMap;
use itertools::Itertools;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::dataset::{RawRow, Stall, loader};
use crate::error::{MakanError, Result};
use crate::geometry::MapPoint;

/// Canteen dataset lookups.
///
/// Canteens enumerate in case-insensitive name order, as do the stalls
/// within each canteen. That order is fixed at build time and doubles as
/// the tie order of the nearest search, so it is part of the contract.
#[derive(Debug, Clone)]
pub struct DatasetIndex {
    stalls: IndexMap<SmolStr, Vec<Stall>>,
    locations: IndexMap<SmolStr, MapPoint>,
}

impl DatasetIndex {
    /// Builds the index from raw dataset rows.
    ///
    /// Duplicate stall names collapse to the first-encountered row; a
    /// canteen's coordinate comes from its first row. A malformed location
    /// string fails the whole build with [`MakanError::DataFormat`] naming
    /// the canteen, since coordinates are load-bearing for the search.
    pub fn build(rows: &[RawRow]) -> Result<Self> {
        // First-encountered row per canteen supplies the coordinate; the
        // stable sort then fixes enumeration order without disturbing
        // first-wins resolution.
        let mut locations: IndexMap<SmolStr, MapPoint> = IndexMap::new();
        for row in rows {
            if !locations.contains_key(row.canteen.as_str()) {
                let point = parse_location(&row.canteen, &row.location)?;
                locations.insert(SmolStr::new(&row.canteen), point);
            }
        }
        locations.sort_by(|a, _, b, _| a.to_lowercase().cmp(&b.to_lowercase()));

        // Seeding from the location keys keeps both maps on the same
        // enumeration order and guarantees the stall keys stay a subset of
        // the location keys.
        let mut stalls: IndexMap<SmolStr, Vec<Stall>> = locations
            .keys()
            .map(|name| (name.clone(), Vec::new()))
            .collect();

        let mut seen = FxHashSet::default();
        let sorted_rows = rows
            .iter()
            .filter(|row| seen.insert(row.stall.as_str()))
            .sorted_by_key(|row| row.stall.to_lowercase());

        debug_assert!(rows.iter().all(|r| locations.contains_key(r.canteen.as_str())));
        for row in sorted_rows {
            stalls[row.canteen.as_str()].push(Stall {
                name: SmolStr::new(&row.stall),
                keywords: row.keywords.clone(),
                price: row.price,
            });
        }

        tracing::debug!(
            canteens = locations.len(),
            stalls = stalls.values().map(Vec::len).sum::<usize>(),
            "dataset index built"
        );
        Ok(Self { stalls, locations })
    }

    /// Loads and indexes the dataset file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::build(&loader::load_rows(path)?)
    }

    /// Mapping from canteen name to its stalls, in enumeration order.
    pub fn stalls_by_canteen(&self) -> &IndexMap<SmolStr, Vec<Stall>> {
        &self.stalls
    }

    /// Mapping from canteen name to its native-space coordinate, in
    /// enumeration order.
    pub fn locations(&self) -> &IndexMap<SmolStr, MapPoint> {
        &self.locations
    }

    /// Looks up one canteen's coordinate.
    ///
    /// Absence is surfaced as [`MakanError::UnknownCanteen`]; there is no
    /// default coordinate.
    pub fn location_by_canteen(&self, name: &str) -> Result<MapPoint> {
        self.locations
            .get(name)
            .copied()
            .ok_or_else(|| MakanError::UnknownCanteen(name.to_string()))
    }

    /// Canteen → stall → keyword text view, in enumeration order.
    pub fn keywords_by_canteen(&self) -> IndexMap<SmolStr, IndexMap<SmolStr, String>> {
        self.stalls
            .iter()
            .map(|(canteen, stalls)| {
                let by_stall = stalls
                    .iter()
                    .map(|s| (s.name.clone(), s.keywords.clone()))
                    .collect();
                (canteen.clone(), by_stall)
            })
            .collect()
    }

    /// Canteen → stall → recorded price view, in enumeration order.
    pub fn prices_by_canteen(&self) -> IndexMap<SmolStr, IndexMap<SmolStr, Option<f64>>> {
        self.stalls
            .iter()
            .map(|(canteen, stalls)| {
                let by_stall = stalls.iter().map(|s| (s.name.clone(), s.price)).collect();
                (canteen.clone(), by_stall)
            })
            .collect()
    }

    pub fn canteen_count(&self) -> usize {
        self.locations.len()
    }

    pub fn stall_count(&self) -> usize {
        self.stalls.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Parses an `"x,y"` location string into a native-space point.
fn parse_location(canteen: &str, raw: &str) -> Result<MapPoint> {
    let malformed = |detail: String| MakanError::DataFormat {
        canteen: canteen.to_string(),
        detail,
    };

    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| malformed(format!("expected \"x,y\", got {raw:?}")))?;
    let x = x
        .trim()
        .parse()
        .map_err(|_| malformed(format!("non-integer x in {raw:?}")))?;
    let y = y
        .trim()
        .parse()
        .map_err(|_| malformed(format!("non-integer y in {raw:?}")))?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location_accepts_padded_integers() {
        assert_eq!(parse_location("Hive", " 12 , 34 ").unwrap(), (12, 34));
    }

    #[test]
    fn test_parse_location_names_canteen_on_error() {
        let err = parse_location("Hive", "12;34").unwrap_err();
        match err {
            MakanError::DataFormat { canteen, .. } => assert_eq!(canteen, "Hive"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_location_rejects_fractional_components() {
        assert!(parse_location("Hive", "12.5,34").is_err());
        assert!(parse_location("Hive", "12,").is_err());
    }
}
