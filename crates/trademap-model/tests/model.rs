use proptest::prelude::*;
use serde_json::json;

use trademap_model::{
    DataType, FieldMapping, MappingConfig, ModelError, OperatorKind, SystemModel,
    TransformationRule,
};

fn trade_model_json() -> serde_json::Value {
    json!({
        "id": "trade-v1",
        "name": "Trade",
        "version": "1.0",
        "fields": [
            {"name": "tradeId", "data_type": "string", "required": true},
            {"name": "side", "data_type": "enum", "constraints": {"values": ["B", "S"]}},
            {"name": "notional", "data_type": "decimal"}
        ]
    })
}

#[test]
fn system_model_loads_from_json() {
    let model: SystemModel = serde_json::from_value(trade_model_json()).expect("model");
    model.check().expect("unique fields");
    assert_eq!(model.required_fields().count(), 1);
    assert_eq!(
        model.field("side").and_then(|field| field.allowed_values()),
        Some(vec!["B".to_string(), "S".to_string()])
    );
    assert_eq!(model.field("notional").map(|field| field.data_type), Some(DataType::Decimal));
}

#[test]
fn unknown_data_type_does_not_load() {
    let mut json = trade_model_json();
    json["fields"][2]["data_type"] = json!("money");
    assert!(serde_json::from_value::<SystemModel>(json).is_err());
}

#[test]
fn duplicate_field_is_rejected_by_check() {
    let mut json = trade_model_json();
    json["fields"][2]["name"] = json!("side");
    let model: SystemModel = serde_json::from_value(json).expect("loads");
    assert_eq!(
        model.check(),
        Err(ModelError::DuplicateField {
            model_id: "trade-v1".to_string(),
            field: "side".to_string(),
        })
    );
}

#[test]
fn config_targets_are_checked_against_model() {
    let model: SystemModel = serde_json::from_value(trade_model_json()).expect("model");
    let config = MappingConfig::new(
        "bank-a",
        "bank-a",
        "trade-v1",
        vec![
            FieldMapping::new("Ref", "tradeId"),
            FieldMapping::new("Dir", "direction"),
        ],
    );
    assert_eq!(
        config.check_targets(&model),
        Err(ModelError::UnknownTargetField {
            model_id: "trade-v1".to_string(),
            field: "direction".to_string(),
        })
    );

    let other = MappingConfig::new("bank-b", "bank-b", "trade-v2", Vec::new());
    assert!(matches!(
        other.check_targets(&model),
        Err(ModelError::ModelMismatch { .. })
    ));
}

proptest! {
    #[test]
    fn any_rule_json_loads_and_keeps_its_tag(
        type_name in "[a-z_]{1,16}",
        count in any::<i64>(),
    ) {
        let json = json!({"type": type_name, "params": {"count": count}});
        let rule: TransformationRule = serde_json::from_value(json).expect("always loads");
        prop_assert_eq!(rule.type_name(), type_name.as_str());
        prop_assert_eq!(rule.kind().is_some(), type_name.parse::<OperatorKind>().is_ok());
    }
}
