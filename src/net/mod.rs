//! Network layer: wire types and REST helpers for the codegen endpoints.

pub mod api;
pub mod types;
