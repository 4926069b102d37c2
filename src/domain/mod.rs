//! Domain modules organized as vertical slices.
//!
//! - `asset` — Raw serde structs matching read API responses, plus query types
//! - `edition`, `mint`, `metadata` — Views derived from an asset, each with a
//!   `convert.rs` holding its `TryFrom<&Asset>` conversion

pub mod asset;
pub mod edition;
pub mod metadata;
pub mod mint;
