// server/src/web/handlers/mod.rs

// Declare handler modules
pub mod product_handlers;
pub mod profile_handlers;
pub mod voice_handlers;
