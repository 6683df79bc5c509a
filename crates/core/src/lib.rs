//! makan - campus canteen dataset indexing and nearest-canteen search.
//!
//! Loads a tabular dataset of canteens and stalls (name, keywords, price,
//! location) into an immutable [`DatasetIndex`] and answers three kinds of
//! query: keyword search, price-bounded keyword search, and
//! nearest-canteen search around the midpoint of two user positions
//! captured in viewport pixels and mapped into the dataset's native
//! coordinate space.

pub mod capture;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod search;

pub use capture::{FixedCapture, PointCapture};
pub use dataset::{DatasetIndex, RawRow, Stall, load_rows, read_rows};
pub use error::{MakanError, Result};
pub use geometry::{
    MapExtent, MapPoint, Point, UserPoint, Viewport, distance, midpoint, pixel_to_map, to_point,
};
pub use search::{
    KeywordHits, NearbyCanteen, PriceHits, filter_by_keyword, filter_by_price, nearest_canteens,
    parse_max_price,
};
