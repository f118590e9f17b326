// server/src/models/mod.rs

//! Database row shapes. Each converts into the matching `marketvoice` type.

pub mod product;
pub mod profile;

pub use product::ProductRow;
pub use profile::ProfileRow;
