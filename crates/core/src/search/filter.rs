//! Keyword and price filtering over the dataset index.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::dataset::DatasetIndex;
use crate::error::{MakanError, Result};

/// Keyword search hits: canteen → stall → stored keyword text.
pub type KeywordHits = IndexMap<SmolStr, IndexMap<SmolStr, String>>;

/// Price search hits: canteen → stall → (keyword text, price).
pub type PriceHits = IndexMap<SmolStr, IndexMap<SmolStr, (String, f64)>>;

/// Returns stalls whose keyword text contains any of the search terms,
/// grouped by canteen in index enumeration order.
///
/// Matching is case-insensitive substring containment of the whole term;
/// no tokenization. An empty term list matches nothing. The index is not
/// modified; hits are a derived view.
pub fn filter_by_keyword(index: &DatasetIndex, terms: &[&str]) -> KeywordHits {
    let needles = lowercase_terms(terms);
    let mut hits = KeywordHits::new();
    if needles.is_empty() {
        return hits;
    }

    for (canteen, stalls) in index.stalls_by_canteen() {
        for stall in stalls {
            if matches_any(&stall.keywords, &needles) {
                hits.entry(canteen.clone())
                    .or_default()
                    .insert(stall.name.clone(), stall.keywords.clone());
            }
        }
    }
    hits
}

/// Returns keyword matches whose recorded price is at most `max_price`.
///
/// Stalls without a recorded price never match a finite ceiling. The
/// ceiling itself should come from [`parse_max_price`] when sourced from
/// user input.
pub fn filter_by_price(index: &DatasetIndex, terms: &[&str], max_price: f64) -> PriceHits {
    let needles = lowercase_terms(terms);
    let mut hits = PriceHits::new();
    if needles.is_empty() {
        return hits;
    }

    for (canteen, stalls) in index.stalls_by_canteen() {
        for stall in stalls {
            let Some(price) = stall.price else {
                continue;
            };
            if price <= max_price && matches_any(&stall.keywords, &needles) {
                hits.entry(canteen.clone())
                    .or_default()
                    .insert(stall.name.clone(), (stall.keywords.clone(), price));
            }
        }
    }
    hits
}

/// Parses a price ceiling from user input.
///
/// Rejects non-numeric, non-finite, and negative values with
/// [`MakanError::InvalidPrice`]; the caller reports the error and treats
/// that one operation as having no results.
pub fn parse_max_price(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let price: f64 = trimmed
        .parse()
        .map_err(|_| MakanError::InvalidPrice(trimmed.to_string()))?;
    if !price.is_finite() || price < 0.0 {
        return Err(MakanError::InvalidPrice(trimmed.to_string()));
    }
    Ok(price)
}

fn lowercase_terms(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_lowercase()).collect()
}

fn matches_any(keywords: &str, needles: &[String]) -> bool {
    let haystack = keywords.to_lowercase();
    needles.iter().any(|needle| haystack.contains(needle.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_max_price_accepts_padded_decimal() {
        assert_eq!(parse_max_price(" 5.50 ").unwrap(), 5.50);
        assert_eq!(parse_max_price("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_max_price_rejects_bad_input() {
        assert!(parse_max_price("five").is_err());
        assert!(parse_max_price("-1").is_err());
        assert!(parse_max_price("inf").is_err());
        assert!(parse_max_price("").is_err());
    }

    #[test]
    fn test_matches_any_is_substring_containment() {
        let needles = vec!["chicken".to_string()];
        assert!(matches_any("Chicken Rice, Roasted Delights", &needles));
        assert!(!matches_any("Sushi, Ramen", &needles));
        // Substring, not word match.
        assert!(matches_any("Spicy chickenwings", &needles));
    }
}
