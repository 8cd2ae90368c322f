//! Reusable view components shared across pages.

pub mod column_type_fields;
pub mod table_picker;
