//! Column editor form state and the data-type field-constraint rules.
//!
//! DESIGN
//! ======
//! The precision/scale inputs are driven entirely by the column's
//! data-type classification code. The policy transition is total (an
//! unrecognized code falls through to the fully-disabled default) and
//! idempotent, and runs once at initial load plus on every change of the
//! classification selector.

#[cfg(test)]
#[path = "column_form_test.rs"]
mod column_form_test;

/// Data-type classification codes, mirroring the server's catalog.
pub const DATA_TYPE_CLS_SERIAL: &str = "01";
pub const DATA_TYPE_CLS_TEXT: &str = "10";
pub const DATA_TYPE_CLS_VARCHAR: &str = "11";
pub const DATA_TYPE_CLS_CHAR: &str = "12";
pub const DATA_TYPE_CLS_INTEGER: &str = "20";
pub const DATA_TYPE_CLS_NUMERIC: &str = "30";
pub const DATA_TYPE_CLS_TIMESTAMP: &str = "40";
pub const DATA_TYPE_CLS_DATE: &str = "41";
pub const DATA_TYPE_CLS_BLOB: &str = "50";

/// `(code, label)` pairs for the classification selector, in catalog order.
pub fn data_type_options() -> [(&'static str, &'static str); 9] {
    [
        (DATA_TYPE_CLS_SERIAL, "serial"),
        (DATA_TYPE_CLS_TEXT, "text"),
        (DATA_TYPE_CLS_VARCHAR, "varchar"),
        (DATA_TYPE_CLS_CHAR, "char"),
        (DATA_TYPE_CLS_INTEGER, "integer"),
        (DATA_TYPE_CLS_NUMERIC, "numeric"),
        (DATA_TYPE_CLS_TIMESTAMP, "timestamp"),
        (DATA_TYPE_CLS_DATE, "date"),
        (DATA_TYPE_CLS_BLOB, "blob"),
    ]
}

/// Enablement of the (precision, scale) input pair for one classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldPolicy {
    pub precision_enabled: bool,
    pub scale_enabled: bool,
}

/// Map a classification code to its field policy.
///
/// varchar/char take a length (precision only), numeric takes both, and
/// every other code — including unrecognized ones — takes neither.
pub fn field_policy(code: &str) -> FieldPolicy {
    match code {
        DATA_TYPE_CLS_VARCHAR | DATA_TYPE_CLS_CHAR => FieldPolicy {
            precision_enabled: true,
            scale_enabled: false,
        },
        DATA_TYPE_CLS_NUMERIC => FieldPolicy {
            precision_enabled: true,
            scale_enabled: true,
        },
        _ => FieldPolicy {
            precision_enabled: false,
            scale_enabled: false,
        },
    }
}

/// Draft state for the column editor form.
///
/// Field set mirrors the server's column form; only the classification and
/// the numeric pair carry behavior here, the rest are plain drafts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnFormState {
    pub column_name: String,
    pub column_name_logical: String,
    pub data_type_cls: String,
    pub precision: i64,
    pub scale: i64,
    pub precision_enabled: bool,
    pub scale_enabled: bool,
    pub primary_key: bool,
    pub not_null: bool,
    pub unique: bool,
    pub default_value: String,
    pub remark: String,
}

impl Default for ColumnFormState {
    fn default() -> Self {
        let mut state = Self {
            column_name: String::new(),
            column_name_logical: String::new(),
            data_type_cls: DATA_TYPE_CLS_SERIAL.to_owned(),
            precision: 0,
            scale: 0,
            precision_enabled: false,
            scale_enabled: false,
            primary_key: false,
            not_null: false,
            unique: false,
            default_value: String::new(),
            remark: String::new(),
        };
        state.apply_data_type_cls(DATA_TYPE_CLS_SERIAL);
        state
    }
}

impl ColumnFormState {
    /// Switch the classification and apply its field policy.
    ///
    /// Disabled fields are forced to 0; enabled fields keep their value.
    pub fn apply_data_type_cls(&mut self, code: &str) {
        let policy = field_policy(code);
        self.data_type_cls = code.to_owned();
        self.precision_enabled = policy.precision_enabled;
        self.scale_enabled = policy.scale_enabled;
        if !policy.precision_enabled {
            self.precision = 0;
        }
        if !policy.scale_enabled {
            self.scale = 0;
        }
    }
}
