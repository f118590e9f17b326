// tests/search_tests.rs
mod common;
use common::*;

use marketvoice::search::{normalize_keywords, rank, score};
use marketvoice::{MarketError, Marketplace, MemoryStore, SEARCH_RESULT_LIMIT};
use std::sync::Arc;

fn marketplace_with(products: Vec<marketvoice::Product>) -> Marketplace {
  let store = MemoryStore::new();
  for p in products {
    store.insert_product(p);
  }
  Marketplace::new(Arc::new(store.clone()), Arc::new(store))
}

fn terms(raw: &[&str]) -> Vec<String> {
  normalize_keywords(raw).unwrap()
}

#[test]
fn test_empty_and_blank_keyword_lists_are_invalid() {
  let empty: [&str; 0] = [];
  assert!(matches!(normalize_keywords(&empty), Err(MarketError::InvalidInput(_))));
  assert!(matches!(normalize_keywords(&["  ", ""]), Err(MarketError::InvalidInput(_))));
  assert!(matches!(normalize_keywords(&["\t\n"]), Err(MarketError::InvalidInput(_))));
}

#[test]
fn test_score_is_sum_of_field_weights_per_term() {
  let p = with_meeting_point(
    with_description(product("Apple Pie", "item", 8), "Homemade apple pie"),
    "Apple Street corner",
  );
  // "apple": name 10 + description 5 + meeting point 5
  assert_eq!(score(&p, &terms(&["apple"])), 20);
  // "item": unit only
  assert_eq!(score(&p, &terms(&["item"])), 2);
  // Terms add up, unmatched terms add nothing
  assert_eq!(score(&p, &terms(&["apple", "item", "banana"])), 22);
}

#[test]
fn test_egg_example_returns_only_eggs() {
  let results = rank(&terms(&["egg"]), eggs_and_milk());
  assert_eq!(names(&results), vec!["Fresh Eggs"]);
}

#[test]
fn test_milk_gallon_example_returns_only_milk() {
  let catalog = eggs_and_milk();
  let t = terms(&["milk", "gallon"]);
  // name 10 + description ("Organic whole milk") 5 + unit 2
  assert_eq!(score(&catalog[1], &t), 17);
  assert_eq!(score(&catalog[0], &t), 0);
  assert_eq!(names(&rank(&t, catalog)), vec!["Milk"]);
}

#[test]
fn test_substring_matching_is_loose() {
  let catalog = vec![product("Veggies", "bag", 3), product("Eggs", "dozen", 2), product("Bread", "loaf", 4)];
  let results = rank(&terms(&["EGG"]), catalog);
  assert_eq!(names(&results), vec!["Veggies", "Eggs"]);
}

#[test]
fn test_higher_scores_rank_first() {
  let catalog = vec![
    product("Tomato sauce", "jar", 4),
    with_description(product("Tomatoes", "kg", 3), "Ripe tomatoes"),
    with_description(product("Pasta", "box", 2), "Goes well with tomato"),
  ];
  let results = rank(&terms(&["tomato"]), catalog);
  assert_eq!(names(&results), vec!["Tomatoes", "Tomato sauce", "Pasta"]);
}

#[test]
fn test_ties_truncate_to_limit_in_candidate_order() {
  let catalog: Vec<_> = (0..7).map(|i| product(&format!("Thing {}", i), "item", 1)).collect();
  let results = rank(&terms(&["item"]), catalog);
  assert_eq!(results.len(), SEARCH_RESULT_LIMIT);
  assert_eq!(names(&results), vec!["Thing 0", "Thing 1", "Thing 2", "Thing 3", "Thing 4"]);
}

#[test]
fn test_result_never_exceeds_matching_count() {
  let catalog = vec![product("Eggs", "dozen", 2), product("Milk", "gallon", 5), product("Jam", "jar", 4)];
  let results = rank(&terms(&["jam"]), catalog);
  assert_eq!(results.len(), 1);
  assert!(rank(&terms(&["caviar"]), eggs_and_milk()).is_empty());
}

#[test]
fn test_results_are_unmodified_products_without_score() {
  let catalog = eggs_and_milk();
  let expected = catalog[0].clone();
  let results = rank(&terms(&["eggs"]), catalog);
  assert_eq!(results, vec![expected]);

  let json = serde_json::to_value(&results[0]).unwrap();
  let obj = json.as_object().unwrap();
  assert!(!obj.contains_key("score"));
  let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
  keys.sort_unstable();
  assert_eq!(
    keys,
    vec!["created_at", "description", "id", "meeting_point", "name", "price", "quantity_unit", "seller_id"]
  );
}

#[tokio::test]
async fn test_search_is_idempotent_over_unchanged_catalog() {
  setup_tracing();
  let catalog: Vec<_> = (0..12)
    .map(|i| with_description(product(&format!("Box {}", i), if i % 2 == 0 { "item" } else { "bag" }, 1), "a box"))
    .collect();
  let market = marketplace_with(catalog);
  let first = market.search(&["box", "item"]).await.unwrap();
  let second = market.search(&["box", "item"]).await.unwrap();
  assert_eq!(first, second);
  assert_eq!(first.len(), SEARCH_RESULT_LIMIT);
  // Even-indexed boxes score 17 (name, description, unit "item"); odd ones 15
  assert_eq!(names(&first), vec!["Box 0", "Box 2", "Box 4", "Box 6", "Box 8"]);
}

#[tokio::test]
async fn test_search_rejects_blank_keywords_before_touching_store() {
  setup_tracing();
  let store = Arc::new(FailingStore::default());
  let market = Marketplace::new(store.clone(), Arc::new(MemoryStore::new()));
  let err = market.search(&["   "]).await.unwrap_err();
  assert!(matches!(err, MarketError::InvalidInput(_)));
  assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn test_search_store_failure_is_dependency_failure_without_retry() {
  setup_tracing();
  let store = Arc::new(FailingStore::default());
  let market = Marketplace::new(store.clone(), Arc::new(MemoryStore::new()));
  match market.search(&["eggs"]).await {
    Err(MarketError::DependencyFailure { operation, details }) => {
      assert_eq!(operation, "search products");
      assert!(details.contains("connection refused"), "details: {}", details);
    }
    other => panic!("Expected DependencyFailure, got {:?}", other),
  }
  assert_eq!(store.call_count(), 1);
}
