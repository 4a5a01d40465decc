use domain::{FieldScalar, FieldValue};

#[test]
fn equality_compares_field_id_only() {
    let a = FieldValue::new("temp", FieldScalar::I64(20), None);
    let b = FieldValue::new("temp", FieldScalar::I64(99), Some(12_345));
    assert_eq!(a, b);
}

#[test]
fn different_field_ids_are_not_equal() {
    let a = FieldValue::new("temp", FieldScalar::I64(20), None);
    let b = FieldValue::new("humidity", FieldScalar::I64(20), None);
    assert_ne!(a, b);
}

#[test]
fn equality_ignores_scalar_kind() {
    let a = FieldValue::new("temp", FieldScalar::String("20".to_string()), None);
    let b = FieldValue::new("temp", FieldScalar::Bool(false), Some(1));
    assert_eq!(a, b);
}

#[test]
fn constructor_accepts_any_contents() {
    let value = FieldValue::new("", FieldScalar::F64(f64::NAN), Some(-1));
    assert_eq!(value.field_id, "");
    assert_eq!(value.timestamp, Some(-1));
}

#[test]
fn scalar_display_renders_bare_value() {
    assert_eq!(FieldScalar::I64(42).to_string(), "42");
    assert_eq!(FieldScalar::F64(2.5).to_string(), "2.5");
    assert_eq!(FieldScalar::Bool(true).to_string(), "true");
    assert_eq!(FieldScalar::String("on".to_string()).to_string(), "on");
}

#[test]
fn scalar_kind_names_variant() {
    assert_eq!(FieldScalar::from(1_i64).kind(), "integer");
    assert_eq!(FieldScalar::from(1.0_f64).kind(), "float");
    assert_eq!(FieldScalar::from(false).kind(), "boolean");
    assert_eq!(FieldScalar::from("x").kind(), "string");
}
