// core/src/marketplace.rs

//! Marketplace operations, each run on behalf of an explicit [`Principal`].

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::error::{MarketError, MarketResult};
use crate::principal::Principal;
use crate::product::{NewProduct, Product};
use crate::profile::{sanitize_phone_number, Profile};
use crate::search;
use crate::store::{ProductStore, ProfileStore};

#[derive(Clone)]
pub struct Marketplace {
  products: Arc<dyn ProductStore>,
  profiles: Arc<dyn ProfileStore>,
}

impl Marketplace {
  pub fn new(products: Arc<dyn ProductStore>, profiles: Arc<dyn ProfileStore>) -> Self {
    Self { products, profiles }
  }

  /// Top matches for `keywords` across the whole catalog.
  ///
  /// Reads one snapshot of the catalog; a failed read is reported as
  /// `DependencyFailure` and never retried.
  #[instrument(name = "marketplace::search", skip(self, keywords), fields(keyword_count = keywords.len()), err(Display))]
  pub async fn search<S: AsRef<str>>(&self, keywords: &[S]) -> MarketResult<Vec<Product>> {
    let terms = search::normalize_keywords(keywords)?;
    debug!(?terms, "normalized search terms");

    let candidates = self
      .products
      .fetch_all_products()
      .await
      .map_err(|e| MarketError::dependency("search products", e))?;
    let candidate_count = candidates.len();

    let results = search::rank(&terms, candidates);
    info!(candidate_count, result_count = results.len(), "search complete");
    Ok(results)
  }

  #[instrument(
    name = "marketplace::create_product",
    skip(self, principal, product),
    fields(principal = principal.kind(), name = product.name()),
    err(Display)
  )]
  pub async fn create_product(
    &self,
    principal: &Principal,
    on_behalf_of: Option<Uuid>,
    product: NewProduct,
  ) -> MarketResult<Product> {
    let seller_id = principal.subject(on_behalf_of)?;
    let created = self
      .products
      .create_product(product, seller_id)
      .await
      .map_err(|e| MarketError::dependency("create product", e))?;
    info!(product_id = %created.id, %seller_id, "product listed");
    Ok(created)
  }

  #[instrument(name = "marketplace::delete_product", skip(self, principal), fields(principal = principal.kind()), err(Display))]
  pub async fn delete_product(&self, principal: &Principal, product_id: Uuid) -> MarketResult<Product> {
    let owner = principal.require_user()?;
    let deleted = self
      .products
      .delete_product(product_id, owner.id)
      .await
      .map_err(|e| MarketError::dependency("delete product", e))?;
    match deleted {
      Some(product) => {
        info!(owner_id = %owner.id, "product deleted");
        Ok(product)
      }
      None => {
        warn!(owner_id = %owner.id, "delete refused: not found or not owned");
        Err(MarketError::NotFoundOrForbidden(
          "Product not found or you do not have permission to delete it".to_string(),
        ))
      }
    }
  }

  #[instrument(name = "marketplace::list_products_by_owner", skip(self, principal), err(Display))]
  pub async fn list_products_by_owner(&self, principal: &Principal) -> MarketResult<Vec<Product>> {
    let owner = principal.require_user()?;
    self
      .products
      .list_products_by_owner(owner.id)
      .await
      .map_err(|e| MarketError::dependency("fetch products", e))
  }

  #[instrument(name = "marketplace::profile", skip(self, principal), err(Display))]
  pub async fn profile(&self, principal: &Principal) -> MarketResult<Profile> {
    let user = principal.require_user()?;
    self
      .profiles
      .fetch_profile(user.id)
      .await
      .map_err(|e| MarketError::dependency("fetch profile", e))?
      .ok_or_else(|| MarketError::NotFoundOrForbidden("Profile not found".to_string()))
  }

  #[instrument(
    name = "marketplace::update_phone_number",
    skip(self, principal, phone_number),
    fields(principal = principal.kind()),
    err(Display)
  )]
  pub async fn update_phone_number(
    &self,
    principal: &Principal,
    on_behalf_of: Option<Uuid>,
    phone_number: Option<&str>,
  ) -> MarketResult<Profile> {
    let subject = principal.subject(on_behalf_of)?;
    let phone_number = sanitize_phone_number(phone_number)?;
    self
      .profiles
      .update_phone_number(subject, phone_number)
      .await
      .map_err(|e| MarketError::dependency("update profile", e))?
      .ok_or_else(|| MarketError::NotFoundOrForbidden("Profile not found".to_string()))
  }
}
