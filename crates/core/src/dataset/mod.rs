//! Canteen dataset loading and indexing.
//!
//! - `loader` - CSV reading into raw rows
//! - `index` - the immutable [`DatasetIndex`] built from those rows

mod index;
mod loader;

pub use index::DatasetIndex;
pub use loader::{load_rows, read_rows};

use serde::Deserialize;
use smol_str::SmolStr;

/// One record of the tabular dataset.
///
/// Matches the `Canteen, Stall, Keywords, Price, Location` header row;
/// `Location` is an `"x,y"` string in native map coordinates.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawRow {
    pub canteen: String,
    pub stall: String,
    pub keywords: String,
    pub price: Option<f64>,
    pub location: String,
}

/// A named vendor within a canteen.
#[derive(Debug, Clone, PartialEq)]
pub struct Stall {
    pub name: SmolStr,
    /// Free-text keyword description, matched by substring containment.
    pub keywords: String,
    /// Typical price, or `None` when the dataset records none. A missing
    /// price never satisfies a finite price ceiling.
    pub price: Option<f64>,
}
