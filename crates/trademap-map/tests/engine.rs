use trademap_map::{execute, execute_with_report};
use trademap_model::{FieldMapping, MappingConfig, Record, TransformationRule, Value};

fn bank_record() -> Record {
    [
        ("TradeRef", Value::from("TR-001")),
        ("Side", Value::from("BUY")),
        ("TradeDate", Value::from("25/12/2024")),
        ("Notional", Value::from("1000000.456")),
        ("Internal", Value::from("ignored")),
    ]
    .into_iter()
    .collect()
}

fn bank_config() -> MappingConfig {
    MappingConfig::new(
        "bank-a-v1",
        "bank-a",
        "trade-v1",
        vec![
            FieldMapping::new("TradeRef", "tradeId"),
            FieldMapping::new("Side", "side")
                .with_transformation(TransformationRule::enum_map([("BUY", "B"), ("SELL", "S")])),
            FieldMapping::new("TradeDate", "tradeDate")
                .with_transformation(TransformationRule::format_date("DD/MM/YYYY", "YYYY-MM-DD")),
            FieldMapping::new("Notional", "notional")
                .with_transformation(TransformationRule::numeric_format(2)),
            FieldMapping::new("Counterparty", "counterparty"),
        ],
    )
}

#[test]
fn maps_bank_record_to_target_fields() {
    let out = execute(&bank_record(), &bank_config());

    assert_eq!(out.get("tradeId"), Some(&Value::from("TR-001")));
    assert_eq!(out.get("side"), Some(&Value::from("B")));
    assert_eq!(out.get("tradeDate"), Some(&Value::from("2024-12-25")));
    assert_eq!(out.get("notional"), Some(&Value::Decimal(1_000_000.46)));
    // Unmapped input fields and absent sources do not appear.
    assert!(!out.contains("Internal"));
    assert!(!out.contains("counterparty"));
    assert_eq!(out.len(), 4);
}

#[test]
fn absent_source_is_reported() {
    let report = execute_with_report(&bank_record(), &bank_config());
    assert_eq!(report.skipped_sources, vec!["Counterparty".to_string()]);
    assert!(report.overwritten_targets.is_empty());
}

#[test]
fn last_mapping_wins_for_duplicate_targets() {
    let record: Record = [("first", "1"), ("second", "2")].into_iter().collect();
    let config = MappingConfig::new(
        "dup",
        "bank",
        "model",
        vec![
            FieldMapping::new("first", "target"),
            FieldMapping::new("second", "target"),
        ],
    );
    let out = execute(&record, &config);
    assert_eq!(out.get("target"), Some(&Value::from("2")));
}

#[test]
fn empty_config_yields_empty_record() {
    let config = MappingConfig::new("empty", "bank", "model", Vec::new());
    assert!(execute(&bank_record(), &config).is_empty());
}
