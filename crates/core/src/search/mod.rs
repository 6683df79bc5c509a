//! Search operations over the dataset index.
//!
//! - `nearest` - rank canteens by distance to two users' midpoint
//! - `filter` - keyword and price-bounded stall filtering

mod filter;
mod nearest;

pub use filter::{KeywordHits, PriceHits, filter_by_keyword, filter_by_price, parse_max_price};
pub use nearest::{NearbyCanteen, nearest_canteens};
