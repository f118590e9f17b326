// src/lib.rs

//! marketvoice: the domain core of a voice-driven marketplace.
//!
//! Users list products (often by talking to a voice agent), search the
//! catalog by keyword and manage their own listings and profile. This crate
//! holds everything that does not depend on HTTP or a particular database:
//!  - The [`Product`] and [`Profile`] records and validated [`NewProduct`] input.
//!  - The acting [`Principal`] every operation runs under.
//!  - The [`ProductStore`] / [`ProfileStore`] collaborator contracts and an
//!    in-memory [`MemoryStore`].
//!  - Weighted substring search and ranking ([`search`]).
//!  - The [`Marketplace`] service tying them together.

pub mod error;
pub mod marketplace;
pub mod principal;
pub mod product;
pub mod profile;
pub mod search;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::error::{MarketError, MarketResult};
pub use crate::marketplace::Marketplace;
pub use crate::principal::{Principal, UserIdentity};
pub use crate::product::{NewProduct, Product, DEFAULT_QUANTITY_UNIT};
pub use crate::profile::Profile;
pub use crate::search::SEARCH_RESULT_LIMIT;
pub use crate::store::{MemoryStore, ProductStore, ProfileStore};
