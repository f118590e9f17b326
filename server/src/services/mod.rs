// server/src/services/mod.rs

//! Collaborators the HTTP layer talks to: the database, the identity
//! provider and the voice provider.

pub mod identity;
pub mod pg_store;
pub mod voice;
pub mod voice_agent;
