// core/src/search.rs

//! Keyword search over the full product catalog.
//!
//! Every product is scored by case-insensitive substring containment of each
//! keyword in four fields:
//!
//! | field           | weight |
//! |-----------------|--------|
//! | `name`          | 10     |
//! | `description`   | 5      |
//! | `meeting_point` | 5      |
//! | `quantity_unit` | 2      |
//!
//! Contributions add up across keywords and fields. Products scoring zero are
//! dropped, the rest are ordered by descending score and the top
//! [`SEARCH_RESULT_LIMIT`] are returned. Equal scores keep the order of the
//! candidate set. Containment is intentionally loose: `"egg"` matches both
//! `"eggs"` and `"veggies"`.
//!
//! The score never leaves this module; callers only ever see [`Product`]s.

use tracing::debug;

use crate::error::{MarketError, MarketResult};
use crate::product::Product;

pub const SEARCH_RESULT_LIMIT: usize = 5;

pub const NAME_WEIGHT: u32 = 10;
pub const DESCRIPTION_WEIGHT: u32 = 5;
pub const MEETING_POINT_WEIGHT: u32 = 5;
pub const QUANTITY_UNIT_WEIGHT: u32 = 2;

/// Trims and lower-cases keywords, dropping the ones left empty.
///
/// Fails when the list is empty or nothing survives normalization.
pub fn normalize_keywords<S: AsRef<str>>(keywords: &[S]) -> MarketResult<Vec<String>> {
  if keywords.is_empty() {
    return Err(MarketError::InvalidInput(
      "Keywords array is required and must not be empty".to_string(),
    ));
  }
  let terms: Vec<String> = keywords
    .iter()
    .map(|k| k.as_ref().trim().to_lowercase())
    .filter(|k| !k.is_empty())
    .collect();
  if terms.is_empty() {
    return Err(MarketError::InvalidInput(
      "At least one non-empty keyword is required".to_string(),
    ));
  }
  Ok(terms)
}

/// Lower-cased copies of the searchable fields of one product.
struct Haystack {
  name: String,
  description: Option<String>,
  meeting_point: Option<String>,
  quantity_unit: String,
}

impl Haystack {
  fn of(product: &Product) -> Self {
    Self {
      name: product.name.to_lowercase(),
      description: product.description.as_deref().map(str::to_lowercase),
      meeting_point: product.meeting_point.as_deref().map(str::to_lowercase),
      quantity_unit: product.quantity_unit.to_lowercase(),
    }
  }

  fn score_term(&self, term: &str) -> u32 {
    let hit = |field: Option<&str>, weight: u32| match field {
      Some(f) if f.contains(term) => weight,
      _ => 0,
    };
    hit(Some(self.name.as_str()), NAME_WEIGHT)
      + hit(self.description.as_deref(), DESCRIPTION_WEIGHT)
      + hit(self.meeting_point.as_deref(), MEETING_POINT_WEIGHT)
      + hit(Some(self.quantity_unit.as_str()), QUANTITY_UNIT_WEIGHT)
  }
}

/// Relevance of `product` for already-normalized `terms`.
pub fn score(product: &Product, terms: &[String]) -> u32 {
  let haystack = Haystack::of(product);
  terms.iter().map(|t| haystack.score_term(t)).sum()
}

/// Scores, filters, orders and truncates `candidates` for `terms`.
///
/// `terms` must come from [`normalize_keywords`].
pub fn rank(terms: &[String], candidates: Vec<Product>) -> Vec<Product> {
  let mut scored: Vec<(u32, Product)> = candidates
    .into_iter()
    .filter_map(|p| {
      let s = score(&p, terms);
      (s > 0).then_some((s, p))
    })
    .collect();

  // Stable: ties keep candidate order.
  scored.sort_by(|a, b| b.0.cmp(&a.0));
  scored.truncate(SEARCH_RESULT_LIMIT);

  debug!(matched = scored.len(), top_score = scored.first().map(|s| s.0), "ranked candidates");
  scored.into_iter().map(|(_, p)| p).collect()
}
