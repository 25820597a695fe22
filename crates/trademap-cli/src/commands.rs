use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use tracing::{debug, info, info_span, warn};

use trademap_core::{InMemoryCatalog, TransformOptions, Transformer};
use trademap_ingest::{read_records, sample_fields};
use trademap_model::{FieldDefinition, MappingConfig, SystemModel};
use trademap_validate::ValidationOptions;

use crate::cli::{CheckArgs, SampleArgs, TransformArgs};
use crate::logging::redact_record;
use crate::types::{MappingRow, RecordResult, TransformRun};

fn load_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {what}: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {what}: {}", path.display()))
}

fn load_model(path: &Path) -> Result<SystemModel> {
    let model: SystemModel = load_json(path, "system model")?;
    model
        .check()
        .with_context(|| format!("invalid system model: {}", path.display()))?;
    Ok(model)
}

fn load_config(path: &Path) -> Result<MappingConfig> {
    load_json(path, "mapping config")
}

pub fn transform_options(args: &TransformArgs) -> TransformOptions {
    let validation = if args.strict {
        ValidationOptions::strict()
    } else {
        ValidationOptions::default()
    };
    TransformOptions::new().with_validation(validation.with_enum_membership(!args.no_enum_check))
}

pub fn run_transform(args: &TransformArgs) -> Result<TransformRun> {
    let model = load_model(&args.model)?;
    let config = load_config(&args.config)?;
    let (config_id, model_id) = (config.id.clone(), model.id.clone());
    let span = info_span!("run", config = %config_id, model = %model_id);
    let _guard = span.enter();

    let mut catalog = InMemoryCatalog::new();
    catalog.register_model(model)?;
    catalog
        .register_config(config)
        .with_context(|| format!("mapping config {}", args.config.display()))?;
    let transformer = Transformer::new(catalog).with_options(transform_options(args));

    let inputs = read_records(&args.input)
        .with_context(|| format!("read input: {}", args.input.display()))?;
    info!(records = inputs.len(), input = %args.input.display(), "input loaded");

    let records: Vec<RecordResult> = inputs
        .iter()
        .enumerate()
        .map(|(index, record)| {
            debug!(index, record = %redact_record(record), "transforming record");
            let result = transformer.transform_by_id(record, &config_id);
            if let Err(error) = &result {
                warn!(index, %error, "record failed");
            }
            RecordResult { index, result }
        })
        .collect();

    let run = TransformRun {
        config_id,
        model_id,
        input: args.input.clone(),
        output: args.output.clone(),
        records,
    };
    info!(
        succeeded = run.succeeded(),
        failed = run.failed(),
        warnings = run.warning_count(),
        "transform finished"
    );

    if let Some(path) = &args.output {
        let text = serde_json::to_string_pretty(&run.to_json())?;
        fs::write(path, text).with_context(|| format!("write output: {}", path.display()))?;
    }
    Ok(run)
}

pub fn run_sample(args: &SampleArgs) -> Result<Vec<FieldDefinition>> {
    let fields = sample_fields(&args.file)
        .with_context(|| format!("read sample: {}", args.file.display()))?;
    if fields.is_empty() {
        bail!("sample {} has no named columns", args.file.display());
    }
    info!(fields = fields.len(), "sample header read");
    Ok(fields)
}

/// Validate the config against the model and list its mappings.
pub fn run_check(args: &CheckArgs) -> Result<Vec<MappingRow>> {
    let model = load_model(&args.model)?;
    let config = load_config(&args.config)?;
    config
        .check_targets(&model)
        .with_context(|| format!("mapping config {}", args.config.display()))?;

    let mut rows = Vec::with_capacity(config.mappings.len());
    for mapping in &config.mappings {
        let operator = match &mapping.transformation {
            None => "-".to_string(),
            Some(rule) if rule.is_inert() => {
                warn!(
                    target_field = %mapping.target_field,
                    operator = rule.type_name(),
                    "transformation will pass values through unchanged"
                );
                format!("{} (inert)", rule.type_name())
            }
            Some(rule) => rule
                .kind()
                .map_or_else(|| rule.type_name().to_string(), |kind| kind.display_name().to_string()),
        };
        let field = model.field(&mapping.target_field);
        rows.push(MappingRow {
            source: mapping.source_field.clone(),
            target: mapping.target_field.clone(),
            operator,
            target_type: field.map_or_else(String::new, |field| field.data_type.to_string()),
            required: field.is_some_and(|field| field.required),
        });
    }

    let mapped: Vec<&str> = config.target_fields().collect();
    for field in model.required_fields() {
        if !mapped.contains(&field.name.as_str()) {
            warn!(field = %field.name, "required field has no mapping");
        }
    }
    Ok(rows)
}
