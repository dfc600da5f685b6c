//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `export` - Trigger filtering, record model and payload construction

pub mod export;
pub mod foundation;
