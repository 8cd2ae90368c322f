use super::*;

// =============================================================
// field_policy
// =============================================================

#[test]
fn varchar_and_char_enable_precision_only() {
    for code in [DATA_TYPE_CLS_VARCHAR, DATA_TYPE_CLS_CHAR] {
        let policy = field_policy(code);
        assert!(policy.precision_enabled, "code {code}");
        assert!(!policy.scale_enabled, "code {code}");
    }
}

#[test]
fn numeric_enables_both_fields() {
    let policy = field_policy(DATA_TYPE_CLS_NUMERIC);
    assert!(policy.precision_enabled);
    assert!(policy.scale_enabled);
}

#[test]
fn other_catalog_codes_disable_both_fields() {
    for code in [
        DATA_TYPE_CLS_SERIAL,
        DATA_TYPE_CLS_TEXT,
        DATA_TYPE_CLS_INTEGER,
        DATA_TYPE_CLS_TIMESTAMP,
        DATA_TYPE_CLS_DATE,
        DATA_TYPE_CLS_BLOB,
    ] {
        let policy = field_policy(code);
        assert!(!policy.precision_enabled, "code {code}");
        assert!(!policy.scale_enabled, "code {code}");
    }
}

#[test]
fn unrecognized_code_falls_through_to_disabled() {
    let policy = field_policy("99");
    assert!(!policy.precision_enabled);
    assert!(!policy.scale_enabled);
}

// =============================================================
// apply_data_type_cls
// =============================================================

#[test]
fn varchar_preserves_precision_and_zeroes_scale() {
    let mut state = ColumnFormState {
        precision: 50,
        scale: 2,
        ..ColumnFormState::default()
    };
    state.apply_data_type_cls(DATA_TYPE_CLS_VARCHAR);
    assert_eq!(state.data_type_cls, "11");
    assert!(state.precision_enabled);
    assert_eq!(state.precision, 50);
    assert!(!state.scale_enabled);
    assert_eq!(state.scale, 0);
}

#[test]
fn numeric_preserves_both_values() {
    let mut state = ColumnFormState {
        precision: 10,
        scale: 2,
        ..ColumnFormState::default()
    };
    state.apply_data_type_cls(DATA_TYPE_CLS_NUMERIC);
    assert!(state.precision_enabled);
    assert!(state.scale_enabled);
    assert_eq!(state.precision, 10);
    assert_eq!(state.scale, 2);
}

#[test]
fn unrecognized_code_zeroes_both_values() {
    let mut state = ColumnFormState {
        precision: 10,
        scale: 2,
        ..ColumnFormState::default()
    };
    state.apply_data_type_cls("99");
    assert!(!state.precision_enabled);
    assert!(!state.scale_enabled);
    assert_eq!(state.precision, 0);
    assert_eq!(state.scale, 0);
}

#[test]
fn applying_the_same_code_twice_is_idempotent() {
    let mut once = ColumnFormState {
        precision: 18,
        scale: 4,
        ..ColumnFormState::default()
    };
    once.apply_data_type_cls(DATA_TYPE_CLS_NUMERIC);
    let mut twice = once.clone();
    twice.apply_data_type_cls(DATA_TYPE_CLS_NUMERIC);
    assert_eq!(once, twice);
}

#[test]
fn default_state_starts_fully_disabled() {
    let state = ColumnFormState::default();
    assert_eq!(state.data_type_cls, DATA_TYPE_CLS_SERIAL);
    assert!(!state.precision_enabled);
    assert!(!state.scale_enabled);
    assert_eq!(state.precision, 0);
    assert_eq!(state.scale, 0);
}
