//! Routed pages.

pub mod codegen;
pub mod columns;
