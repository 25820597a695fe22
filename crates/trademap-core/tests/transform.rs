use proptest::prelude::*;
use trademap_core::{
    InMemoryCatalog, ModelCatalog, TransformError, TransformOptions, Transformer, transform,
    transform_batch,
};
use trademap_model::{
    DataType, FieldDefinition, FieldMapping, MappingConfig, ModelError, Record, SystemModel,
    TransformationRule, Value,
};
use trademap_validate::Issue;

fn trade_model() -> SystemModel {
    SystemModel::new(
        "trade-v1",
        "Trade",
        "1.0",
        vec![
            FieldDefinition::new("tradeId", DataType::String).required(),
            FieldDefinition::new("tradeDate", DataType::Date).required(),
            FieldDefinition::new("side", DataType::Enum).with_allowed_values(["B", "S"]),
            FieldDefinition::new("notional", DataType::Decimal),
        ],
    )
    .expect("valid model")
}

fn bank_config() -> MappingConfig {
    MappingConfig::new(
        "bank-a-v1",
        "bank-a",
        "trade-v1",
        vec![
            FieldMapping::new("TradeRef", "tradeId"),
            FieldMapping::new("TradeDate", "tradeDate")
                .with_transformation(TransformationRule::format_date("DD/MM/YYYY", "YYYY-MM-DD")),
            FieldMapping::new("Side", "side")
                .with_transformation(TransformationRule::enum_map([("BUY", "B"), ("SELL", "S")])),
            FieldMapping::new("Amount", "notional")
                .with_transformation(TransformationRule::numeric_format(2)),
        ],
    )
}

fn bank_record() -> Record {
    [
        ("TradeRef", "TR-001"),
        ("TradeDate", "25/12/2024"),
        ("Side", "HOLD"),
    ]
    .into_iter()
    .collect()
}

fn catalog() -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new();
    catalog.register_model(trade_model()).expect("model");
    catalog.register_config(bank_config()).expect("config");
    catalog
}

#[test]
fn transform_maps_and_reports_soft_findings() {
    let outcome = transform(
        &bank_record(),
        &bank_config(),
        &trade_model(),
        &TransformOptions::default(),
    )
    .expect("transform");

    insta::assert_json_snapshot!(outcome, @r#"
    {
      "record": {
        "side": "HOLD",
        "tradeDate": "2024-12-25",
        "tradeId": "TR-001"
      },
      "warnings": [
        {
          "kind": "enum_value_not_allowed",
          "field": "side",
          "value": "HOLD",
          "allowed": [
            "B",
            "S"
          ]
        }
      ],
      "skipped_sources": [
        "Amount"
      ]
    }
    "#);
}

#[test]
fn missing_trade_id_fails() {
    let mut record = bank_record();
    record.remove("TradeRef");
    let err = transform(
        &record,
        &bank_config(),
        &trade_model(),
        &TransformOptions::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        TransformError::RequiredFieldMissing {
            model_id: "trade-v1".to_string(),
            field: "tradeId".to_string(),
        }
    );
}

#[test]
fn strict_mode_rejects_type_mismatch() {
    let mut record = bank_record();
    record.insert("Amount", Value::Boolean(true));
    let outcome = transform(
        &record,
        &bank_config(),
        &trade_model(),
        &TransformOptions::default(),
    )
    .expect("lenient");
    assert!(
        outcome
            .warnings
            .iter()
            .any(|issue| matches!(issue, Issue::TypeMismatch { field, .. } if field == "notional"))
    );

    let err = transform(
        &record,
        &bank_config(),
        &trade_model(),
        &TransformOptions::strict(),
    )
    .unwrap_err();
    assert!(matches!(err, TransformError::TypeMismatch { field, .. } if field == "notional"));
}

#[test]
fn batch_returns_one_result_per_record() {
    let mut broken = bank_record();
    broken.remove("TradeDate");
    let records = [bank_record(), broken];
    let results = transform_batch(
        &records,
        &bank_config(),
        &trade_model(),
        &TransformOptions::default(),
    );
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(
        &results[1],
        Err(TransformError::RequiredFieldMissing { field, .. }) if field == "tradeDate"
    ));
}

#[test]
fn transform_by_id_resolves_through_catalog() {
    let transformer = Transformer::new(catalog());
    let outcome = transformer
        .transform_by_id(&bank_record(), "bank-a-v1")
        .expect("transform");
    assert_eq!(outcome.record.get("tradeId"), Some(&Value::from("TR-001")));

    let err = transformer
        .transform_by_id(&bank_record(), "bank-z")
        .unwrap_err();
    assert_eq!(
        err,
        TransformError::UnknownMappingConfig {
            config_id: "bank-z".to_string()
        }
    );
}

#[test]
fn removed_model_leaves_dangling_reference() {
    let mut transformer = Transformer::new(catalog());
    transformer.catalog_mut().remove_model("trade-v1");
    assert!(transformer.catalog().mapping_config("bank-a-v1").is_some());

    let err = transformer
        .transform_by_id(&bank_record(), "bank-a-v1")
        .unwrap_err();
    assert_eq!(
        err,
        TransformError::UnknownReference {
            config_id: "bank-a-v1".to_string(),
            system_model_id: "trade-v1".to_string(),
        }
    );
}

#[test]
fn config_registration_checks_targets_and_reference() {
    let mut catalog = InMemoryCatalog::new();
    let err = catalog.register_config(bank_config()).unwrap_err();
    assert!(matches!(err, TransformError::UnknownReference { .. }));

    catalog.register_model(trade_model()).expect("model");
    let bad = MappingConfig::new(
        "bank-b",
        "bank-b",
        "trade-v1",
        vec![FieldMapping::new("Ref", "tradeReference")],
    );
    assert_eq!(
        catalog.register_config(bad).unwrap_err(),
        TransformError::InvalidModel(ModelError::UnknownTargetField {
            model_id: "trade-v1".to_string(),
            field: "tradeReference".to_string(),
        })
    );
    assert_eq!(catalog.config_ids().count(), 0);
}

#[test]
fn catalog_loads_json_documents() {
    let model: SystemModel = serde_json::from_str(
        r#"{"id": "trade-v1", "name": "Trade", "version": "1.0", "fields": [
            {"name": "tradeId", "data_type": "string", "required": true},
            {"name": "notional", "data_type": "decimal"}
        ]}"#,
    )
    .expect("model json");
    let config: MappingConfig = serde_json::from_str(
        r#"{"id": "bank-a-v1", "name": "Bank A", "bank_id": "bank-a",
            "system_model_id": "trade-v1", "mappings": [
            {"source_field": "Ref", "target_field": "tradeId",
             "transformation": {"type": "case", "params": {"caseType": "upper"}}},
            {"source_field": "Amount", "target_field": "notional",
             "transformation": {"type": "numeric_format"}}
        ]}"#,
    )
    .expect("config json");
    let record: Record =
        serde_json::from_str(r#"{"Ref": "tr-9", "Amount": 100.256}"#).expect("record json");

    let mut catalog = InMemoryCatalog::new();
    catalog.register_model(model).expect("model");
    catalog.register_config(config).expect("config");
    let outcome = Transformer::new(catalog)
        .transform_by_id(&record, "bank-a-v1")
        .expect("transform");
    assert_eq!(outcome.record.get("tradeId"), Some(&Value::from("TR-9")));
    assert_eq!(outcome.record.get("notional"), Some(&Value::Decimal(100.26)));
    assert!(!outcome.has_warnings());

    let duplicated: SystemModel = serde_json::from_str(
        r#"{"id": "dup", "name": "Dup", "version": "1", "fields": [
            {"name": "a", "data_type": "string"}, {"name": "a", "data_type": "integer"}
        ]}"#,
    )
    .expect("loads unchecked");
    assert!(matches!(
        InMemoryCatalog::new().register_model(duplicated),
        Err(TransformError::InvalidModel(ModelError::DuplicateField { .. }))
    ));
}

proptest! {
    #[test]
    fn transform_is_idempotent(
        trade_ref in "[A-Z0-9-]{1,12}",
        side in "(BUY|SELL|HOLD|)",
        amount in ".{0,12}",
    ) {
        let record: Record = [
            ("TradeRef", trade_ref),
            ("TradeDate", "01/02/2024".to_string()),
            ("Side", side),
            ("Amount", amount),
        ]
        .into_iter()
        .collect();
        let (config, model) = (bank_config(), trade_model());
        let options = TransformOptions::default();
        let first = transform(&record, &config, &model, &options);
        let second = transform(&record, &config, &model, &options);
        prop_assert_eq!(format!("{first:?}"), format!("{second:?}"));
    }
}
