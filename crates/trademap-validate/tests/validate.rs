use chrono::NaiveDate;
use trademap_model::{DataType, FieldDefinition, Record, SystemModel, Value};
use trademap_validate::{
    Issue, Severity, ValidationError, ValidationMode, ValidationOptions, validate,
};

fn trade_model() -> SystemModel {
    SystemModel::new(
        "trade-v1",
        "Trade",
        "1.0",
        vec![
            FieldDefinition::new("tradeId", DataType::String).required(),
            FieldDefinition::new("tradeDate", DataType::Date).required(),
            FieldDefinition::new("notional", DataType::Decimal),
            FieldDefinition::new("quantity", DataType::Integer),
            FieldDefinition::new("side", DataType::Enum).with_allowed_values(["B", "S"]),
            FieldDefinition::new("cleared", DataType::Boolean),
        ],
    )
    .expect("valid model")
}

fn valid_record() -> Record {
    [
        ("tradeId", Value::from("TR-1")),
        ("tradeDate", Value::from("2024-12-25")),
        ("notional", Value::Decimal(1_000_000.46)),
        ("quantity", Value::from("10")),
        ("side", Value::from("B")),
        ("cleared", Value::from("whatever")),
    ]
    .into_iter()
    .collect()
}

#[test]
fn valid_record_has_no_issues() {
    let report = validate(&valid_record(), &trade_model(), &ValidationOptions::default())
        .expect("validates");
    assert!(report.is_clean());
    assert_eq!(report.model_id, "trade-v1");
}

#[test]
fn missing_required_field_fails_with_first_in_schema_order() {
    let mut record = valid_record();
    record.remove("tradeId");
    record.remove("tradeDate");
    let err = validate(&record, &trade_model(), &ValidationOptions::default()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::RequiredFieldMissing {
            model_id: "trade-v1".to_string(),
            field: "tradeId".to_string(),
        }
    );
    assert!(err.to_string().contains("tradeId"));
}

#[test]
fn null_required_field_is_reported_not_fatal() {
    let mut record = valid_record();
    record.insert("tradeId", Value::Null);
    let report = validate(&record, &trade_model(), &ValidationOptions::default())
        .expect("null is soft");
    assert_eq!(
        report.issues,
        vec![Issue::RequiredFieldNull {
            field: "tradeId".to_string()
        }]
    );
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.issues[0].severity(), Severity::Error);
}

#[test]
fn type_mismatch_is_a_warning_in_lenient_mode() {
    let mut record = valid_record();
    record.insert("notional", "N/A");
    record.insert("tradeId", 42_i64);
    let report = validate(&record, &trade_model(), &ValidationOptions::default())
        .expect("lenient");
    assert_eq!(report.warning_count(), 2);
    let fields: Vec<&str> = report.issues.iter().map(Issue::field).collect();
    assert_eq!(fields, vec!["tradeId", "notional"]);
}

#[test]
fn strict_mode_fails_on_first_type_mismatch() {
    let mut record = valid_record();
    record.insert("notional", Value::Boolean(true));
    record.insert("quantity", "ten");
    let err = validate(&record, &trade_model(), &ValidationOptions::strict()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::TypeMismatch {
            model_id: "trade-v1".to_string(),
            field: "notional".to_string(),
            expected: DataType::Decimal,
            found: "boolean".to_string(),
        }
    );
    assert_eq!(ValidationOptions::strict().mode, ValidationMode::Strict);
}

#[test]
fn dates_accept_text_and_datetime() {
    let mut record = valid_record();
    let date = NaiveDate::from_ymd_opt(2024, 12, 25).expect("valid date");
    record.insert("tradeDate", date);
    assert!(
        validate(&record, &trade_model(), &ValidationOptions::strict())
            .expect("validates")
            .is_clean()
    );
    record.insert("tradeDate", 20241225_i64);
    let report = validate(&record, &trade_model(), &ValidationOptions::default())
        .expect("lenient");
    assert_eq!(report.issues_for("tradeDate").count(), 1);
}

#[test]
fn enum_membership_is_optional() {
    let mut record = valid_record();
    record.insert("side", "HOLD");
    let report = validate(&record, &trade_model(), &ValidationOptions::default())
        .expect("soft");
    assert!(matches!(
        &report.issues[..],
        [Issue::EnumValueNotAllowed { field, value, .. }] if field == "side" && value == "HOLD"
    ));

    let options = ValidationOptions::default().with_enum_membership(false);
    assert!(validate(&record, &trade_model(), &options).expect("soft").is_clean());
}

#[test]
fn blank_and_unknown_fields_are_ignored() {
    let mut record = valid_record();
    record.insert("notional", "  ");
    record.insert("quantity", Value::Null);
    record.insert("extra", Value::Boolean(false));
    assert!(
        validate(&record, &trade_model(), &ValidationOptions::strict())
            .expect("validates")
            .is_clean()
    );
}

#[test]
fn options_deserialize_with_defaults() {
    let options: ValidationOptions = serde_json::from_str(r#"{"mode": "strict"}"#).unwrap();
    assert!(options.is_strict());
    assert!(options.check_enum_membership);
}
