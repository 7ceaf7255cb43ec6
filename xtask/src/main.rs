//! Developer tasks (schema generation, conformance, explain coverage).
//!
//! Kept out of the end-user CLI.

use anyhow::{Context, bail};
use queryguard_app::{CONFIG_SOURCE_DEFAULTS, ValidateInput, run_validate};
use queryguard_settings::Overrides;
use queryguard_test_util::normalize_nondeterministic;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Project root (parent of the xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(PathBuf::from)
        .unwrap_or(manifest_dir)
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(queryguard_types::GuardReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(queryguard_settings::QueryguardConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "queryguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "queryguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn compile(schema: &schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(schema).context("Failed to convert schema")?;
    jsonschema::validator_for(&value).map_err(|e| anyhow::anyhow!("Failed to compile schema: {e}"))
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that `schemas/` matches what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {name}");
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {name}");
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn sorted_files(dir: &Path, ext: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_some_and(|e| e == ext) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

/// Validate the query corpus and config fixtures against the generated schemas.
///
/// 1. Every `tests/fixtures/queries/*.sql` report validates against the report schema
/// 2. Reports with a golden file in `tests/fixtures/golden/` match it after normalization
/// 3. Every `tests/fixtures/config/*.toml` that parses validates against the config schema
fn conform() -> anyhow::Result<()> {
    let report_schema = compile(&generate_report_schema())?;
    let config_schema = compile(&generate_config_schema())?;
    let golden_dir = fixtures_dir().join("golden");
    let mut errors = Vec::new();

    let queries = sorted_files(&fixtures_dir().join("queries"), "sql")?;
    for path in &queries {
        let name = file_name(path);
        let text =
            fs::read_to_string(path).with_context(|| format!("Failed to read {name}"))?;
        let output = run_validate(ValidateInput {
            config_text: "",
            config_source: CONFIG_SOURCE_DEFAULTS,
            overrides: Overrides::default(),
            query_text: &text,
            target_id: 1,
            audit: false,
        })?;
        let value = serde_json::to_value(&output.report).context("Failed to convert report")?;

        for err in report_schema.iter_errors(&value) {
            errors.push(format!("{name}: schema validation: {err}"));
        }

        let golden_path = golden_dir.join(format!("{}.report.json", name.trim_end_matches(".sql")));
        if golden_path.exists() {
            let golden: serde_json::Value = serde_json::from_str(&fs::read_to_string(&golden_path)?)
                .with_context(|| format!("Failed to parse {}", golden_path.display()))?;
            if normalize_nondeterministic(value) != golden {
                errors.push(format!("{name}: report differs from golden file"));
            } else {
                println!("  ✓ {name} matches golden report");
            }
        } else {
            println!("  ✓ {name} validates");
        }
    }

    let configs = sorted_files(&fixtures_dir().join("config"), "toml")?;
    for path in &configs {
        let name = file_name(path);
        let text = fs::read_to_string(path)?;
        let cfg = queryguard_settings::parse_config_toml(&text)
            .with_context(|| format!("Failed to parse {name}"))?;
        let value = serde_json::to_value(&cfg)?;
        for err in config_schema.iter_errors(&value) {
            errors.push(format!("{name}: config schema validation: {err}"));
        }
        println!("  ✓ {name} matches the config schema");
    }

    if queries.is_empty() {
        bail!("No query fixtures found");
    }
    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {err}");
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!(
        "\n✓ {} query fixtures and {} config fixtures pass conformance checks",
        queries.len(),
        configs.len()
    );
    Ok(())
}

/// Every check id and reason code has a complete explanation.
fn explain_coverage() -> anyhow::Result<()> {
    use queryguard_types::explain::{all_check_ids, all_codes, lookup_explanation};

    let mut errors = Vec::new();
    for (kind, identifiers) in [("Check ID", all_check_ids()), ("Code", all_codes())] {
        for id in identifiers {
            match lookup_explanation(id) {
                Some(exp) => {
                    for (field, text) in [
                        ("title", exp.title),
                        ("description", exp.description),
                        ("remediation", exp.remediation),
                    ] {
                        if text.is_empty() {
                            errors.push(format!("{kind} '{id}' has empty {field}"));
                        }
                    }
                }
                None => errors.push(format!("{kind} '{id}' has no explanation")),
            }
        }
    }

    if !errors.is_empty() {
        for error in &errors {
            eprintln!("  - {error}");
        }
        bail!("Explain coverage validation failed with {} errors", errors.len());
    }

    println!("✓ {} check IDs have explanations", all_check_ids().len());
    println!("✓ {} codes have explanations", all_codes().len());
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate fixture reports and configs against the schemas");
    eprintln!("  explain-coverage  Validate all check IDs and codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
