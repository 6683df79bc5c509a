//! Tests for keyword and price filtering.

use makan_core::{DatasetIndex, filter_by_keyword, filter_by_price, read_rows};

const CAMPUS: &str = "\
Canteen,Stall,Keywords,Price,Location
North Spine,Chicken Rice,\"Chicken Rice, Roasted Delights\",3.50,\"100,100\"
North Spine,Japanese,\"Sushi, Ramen\",5.50,\"100,100\"
South Spine,Western,\"Pasta, Chicken Chop\",5.00,\"200,200\"
Hive,Drinks,\"Kopi, Teh\",,\"150,500\"
";

fn campus_index() -> DatasetIndex {
    DatasetIndex::build(&read_rows(CAMPUS.as_bytes()).unwrap()).unwrap()
}

// === Keyword search ===

#[test]
fn test_keyword_match_is_case_insensitive() {
    let index = campus_index();
    for term in ["chicken", "CHICKEN", "ChIcKeN"] {
        let hits = filter_by_keyword(&index, &[term]);
        assert_eq!(hits.len(), 2, "term {term}");
        assert!(hits["North Spine"].contains_key("Chicken Rice"));
        assert!(hits["South Spine"].contains_key("Western"));
    }
}

#[test]
fn test_keyword_match_carries_stored_text() {
    let index = campus_index();
    let hits = filter_by_keyword(&index, &["sushi"]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits["North Spine"].len(), 1);
    assert_eq!(hits["North Spine"]["Japanese"], "Sushi, Ramen");
}

#[test]
fn test_terms_combine_as_any_match() {
    let index = campus_index();
    let hits = filter_by_keyword(&index, &["laksa", "kopi"]);
    assert_eq!(hits.len(), 1);
    assert!(hits["Hive"].contains_key("Drinks"));
}

#[test]
fn test_empty_term_list_matches_nothing() {
    let index = campus_index();
    assert!(filter_by_keyword(&index, &[]).is_empty());
}

#[test]
fn test_empty_string_term_matches_everything() {
    // "" is contained in every keyword text, so it selects every stall.
    let index = campus_index();
    let hits = filter_by_keyword(&index, &[""]);
    assert_eq!(hits.len(), 3);
    assert_eq!(hits.values().map(|stalls| stalls.len()).sum::<usize>(), 4);
}

#[test]
fn test_hits_keep_enumeration_order() {
    let index = campus_index();
    let hits = filter_by_keyword(&index, &["chicken"]);
    let canteens: Vec<_> = hits.keys().map(|c| c.as_str()).collect();
    assert_eq!(canteens, ["North Spine", "South Spine"]);
}

// === Price search ===

#[test]
fn test_price_ceiling_is_inclusive() {
    let index = campus_index();
    let hits = filter_by_price(&index, &["chicken"], 5.00);
    // Western sits exactly on the ceiling and stays in.
    let (keywords, price) = &hits["South Spine"]["Western"];
    assert_eq!(keywords, "Pasta, Chicken Chop");
    assert_eq!(*price, 5.00);
    assert!(hits["North Spine"].contains_key("Chicken Rice"));
}

#[test]
fn test_price_above_ceiling_is_excluded() {
    let index = campus_index();
    assert!(filter_by_price(&index, &["sushi"], 5.00).is_empty());
    assert!(!filter_by_price(&index, &["sushi"], 5.50).is_empty());
}

#[test]
fn test_missing_price_never_matches() {
    let index = campus_index();
    // Drinks matches "kopi" but records no price at all.
    assert!(filter_by_price(&index, &["kopi"], 100.0).is_empty());
}

#[test]
fn test_price_search_still_requires_a_keyword_match() {
    let index = campus_index();
    assert!(filter_by_price(&index, &["laksa"], 10.0).is_empty());
    assert!(filter_by_price(&index, &[], 10.0).is_empty());
}
