//! End-to-end tests for the full generate/export pipeline.

use chrono::NaiveDateTime;
use martgen::{run_generate, GenerateRequest, GeneratedFiles, OutputFormat};
use martgen_generator::TableGenerator;
use std::collections::HashSet;
use std::path::Path;
use tempfile::TempDir;

fn request(domain: &str, dir: &Path, format: OutputFormat) -> GenerateRequest {
    GenerateRequest {
        domain: domain.to_string(),
        dim_rows: 5,
        fact_rows: 50,
        output_dir: dir.to_path_buf(),
        format,
        seed: Some(7),
    }
}

fn read_csv(path: &Path) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader
        .headers()
        .unwrap()
        .iter()
        .map(|h| h.to_string())
        .collect();
    let records = reader.records().map(|r| r.unwrap()).collect();
    (headers, records)
}

#[test]
fn test_every_domain_generates_and_references_dimension_keys() {
    for name in martgen_domains::supported() {
        let schema = martgen_domains::resolve(name).unwrap();
        let mut generator = TableGenerator::new(42);

        let dimension = generator.generate_dimension(&schema.dimension, 8).unwrap();
        assert_eq!(dimension.len(), 8, "{name} dimension count");

        let keys: HashSet<String> = dimension
            .rows
            .iter()
            .map(|r| r.get(&schema.dimension.key_column).unwrap().to_csv_field())
            .collect();
        assert_eq!(keys.len(), 8, "{name} duplicate keys");
        for key in &keys {
            // CPF shape: XXX.XXX.XXX-XX
            assert_eq!(key.len(), 14, "{name} malformed key {key}");
        }

        let facts = generator.generate_facts(&schema.facts, &dimension, 40).unwrap();
        assert_eq!(facts.len(), 40, "{name} fact count");

        let fk = schema.facts.foreign_key_column().unwrap();
        for row in &facts.rows {
            for column in &facts.columns {
                assert!(row.get(column).is_some(), "{name} missing column {column}");
            }
            let key = row.get(fk).unwrap().to_csv_field();
            assert!(keys.contains(&key), "{name} dangling foreign key {key}");
        }
    }
}

#[test]
fn test_banking_due_dates_use_permitted_offsets() {
    let schema = martgen_domains::resolve("banking").unwrap();
    let mut generator = TableGenerator::new(7);

    let dimension = generator.generate_dimension(&schema.dimension, 5).unwrap();
    let facts = generator.generate_facts(&schema.facts, &dimension, 50).unwrap();

    let cpfs: HashSet<String> = dimension
        .rows
        .iter()
        .map(|r| r.get("CPF").unwrap().to_csv_field())
        .collect();
    assert_eq!(cpfs.len(), 5);

    for row in &facts.rows {
        assert!(cpfs.contains(&row.get("CPF").unwrap().to_csv_field()));

        let transacted = row.get("Data_Transacao").unwrap().as_datetime().unwrap();
        let due = row.get("Data_Vencimento").unwrap().as_datetime().unwrap();
        assert!(due > transacted, "due date not after transaction date");
        let offset = (due - transacted).num_days();
        assert!([10, 15, 30].contains(&offset), "unexpected offset {offset}");

        let interest = row.get("Valor_Juros").unwrap().as_f64().unwrap();
        assert!(interest >= 0.0);
    }
}

#[test]
fn test_unknown_domain_lists_all_supported() {
    let dir = TempDir::new().unwrap();
    let err = run_generate(&request("astrology", dir.path(), OutputFormat::Csv)).unwrap_err();
    let message = format!("{err:#}");
    for name in martgen_domains::supported() {
        assert!(message.contains(name), "missing {name} in: {message}");
    }
}

#[test]
fn test_csv_files_round_trip() {
    let dir = TempDir::new().unwrap();
    let files = run_generate(&request("banking", dir.path(), OutputFormat::Csv)).unwrap();

    assert!(files.dimension.ends_with("banking_dimension.csv"));
    assert!(files.facts.ends_with("banking_facts.csv"));

    let schema = martgen_domains::resolve("banking").unwrap();

    let (headers, records) = read_csv(&files.dimension);
    assert_eq!(headers, schema.dimension.column_names());
    assert_eq!(records.len(), 5);

    let (headers, records) = read_csv(&files.facts);
    assert_eq!(headers, schema.facts.column_names());
    assert_eq!(records.len(), 50);

    // Due dates survive serialization: re-check the offset property from disk
    let due_idx = headers.iter().position(|h| h == "Data_Vencimento").unwrap();
    let transacted_idx = headers.iter().position(|h| h == "Data_Transacao").unwrap();
    for record in &records {
        let due =
            NaiveDateTime::parse_from_str(&record[due_idx], "%Y-%m-%d %H:%M:%S").unwrap();
        let transacted =
            NaiveDateTime::parse_from_str(&record[transacted_idx], "%Y-%m-%d %H:%M:%S").unwrap();
        let offset = (due - transacted).num_days();
        assert!([10, 15, 30].contains(&offset));
    }
}

#[test]
fn test_case_insensitive_domain_and_overwrite() {
    let dir = TempDir::new().unwrap();
    let first = run_generate(&request("Banking", dir.path(), OutputFormat::Csv)).unwrap();
    let GeneratedFiles { dimension, facts } =
        run_generate(&request("BANKING", dir.path(), OutputFormat::Csv)).unwrap();

    // Same lowercase file names regardless of input casing, overwritten in place
    assert_eq!(first.dimension, dimension);
    assert_eq!(first.facts, facts);
    let (_, records) = read_csv(&facts);
    assert_eq!(records.len(), 50);
}

#[test]
fn test_seeded_runs_are_identical() {
    let dir1 = TempDir::new().unwrap();
    let dir2 = TempDir::new().unwrap();

    let files1 = run_generate(&request("ecommerce", dir1.path(), OutputFormat::Csv)).unwrap();
    let files2 = run_generate(&request("ecommerce", dir2.path(), OutputFormat::Csv)).unwrap();

    assert_eq!(
        std::fs::read_to_string(&files1.dimension).unwrap(),
        std::fs::read_to_string(&files2.dimension).unwrap()
    );
    assert_eq!(
        std::fs::read_to_string(&files1.facts).unwrap(),
        std::fs::read_to_string(&files2.facts).unwrap()
    );
}

#[test]
fn test_jsonl_format_one_object_per_row() {
    let dir = TempDir::new().unwrap();
    let files = run_generate(&request("callcenter", dir.path(), OutputFormat::Jsonl)).unwrap();

    assert!(files.facts.ends_with("callcenter_facts.jsonl"));
    let content = std::fs::read_to_string(&files.facts).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 50);
    for line in lines {
        let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(parsed.get("CPF_Atendente").is_some());
    }
}

#[test]
fn test_output_directory_is_created() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("out").join("demo");
    let files = run_generate(&request("education", &nested, OutputFormat::Csv)).unwrap();
    assert!(files.dimension.exists());
    assert!(files.facts.exists());
}

#[test]
fn test_zero_fact_rows_writes_header_only() {
    let dir = TempDir::new().unwrap();
    let mut req = request("marketing", dir.path(), OutputFormat::Csv);
    req.fact_rows = 0;

    let files = run_generate(&req).unwrap();
    let (headers, records) = read_csv(&files.facts);
    assert!(records.is_empty());
    assert_eq!(
        headers,
        martgen_domains::resolve("marketing").unwrap().facts.column_names()
    );
}
