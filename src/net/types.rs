//! Wire types shared between the API helpers and the pages.
//!
//! The generation wire contract is asymmetric: the request is JSON, the
//! response is a bare text path to the produced artifact.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Which artifact a generation request produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerateKind {
    /// Full goat source tree, zipped server-side.
    Goat,
    /// A single DDL script.
    Ddl,
}

impl GenerateKind {
    /// Endpoint path, relative to the current project page.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Goat => "./codegen/goat",
            Self::Ddl => "./codegen/ddl",
        }
    }
}

/// JSON body for both generation endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CodegenRequest {
    /// Target RDBMS; passed through without client-side validation.
    pub dbtype: String,
    /// Checked table ids in render order.
    pub tableids: Vec<String>,
}

/// One table row from the inventory endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TableItem {
    pub table_id: String,
    pub table_name: String,
}

/// `(value, label)` pairs for the database type selector.
pub fn db_type_options() -> [(&'static str, &'static str); 2] {
    [("sqlite3", "SQLite3"), ("postgresql", "PostgreSQL")]
}
