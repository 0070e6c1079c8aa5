use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use serde_json::Value;
use tracing::{info, info_span};

use pcv_cli::pipeline::{Conversion, ConvertError, ConvertRequest, convert};
use pcv_ingest::FileUpload;
use pcv_model::vocab::{CLINICAL_SIGNIFICANCE_TERMS, CONDITION_DATABASES, LEGACY_CITATION_SOURCES};
use pcv_submit::{ApiKey, ClinVarClient, Endpoint, SubmissionResponse};
use pcv_validate::{SchemaKind, Validation, validate, validate_str};

use crate::cli::{ConvertArgs, RemoteArgs, ValidateArgs};
use crate::summary::{apply_table_style, print_conversion_summary, print_errors};

/// Outcome of a command that can reject its input without failing.
pub enum Outcome {
    Accepted,
    Rejected,
}

fn read_document(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read submission {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse submission {}", path.display()))
}

fn write_document(conversion: &Conversion, output: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(&conversion.json).context("serialize submission")?;
    match output {
        Some(path) => {
            fs::write(path, format!("{text}\n"))
                .with_context(|| format!("write submission {}", path.display()))?;
            info!(path = %path.display(), "wrote submission");
            print_conversion_summary(conversion);
            eprintln!("Submission: {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

pub fn run_convert(args: &ConvertArgs) -> Result<Outcome> {
    let uploads: Vec<FileUpload> = args.files.iter().map(FileUpload::new).collect();
    let request = ConvertRequest {
        delimiter: args.delimiter.into(),
        schema: args.schema.schema.into(),
        options: (&args.submission).into(),
    };

    match convert(uploads, &request) {
        Ok(conversion) => {
            write_document(&conversion, args.output.as_deref())?;
            Ok(Outcome::Accepted)
        }
        Err(error) => {
            eprintln!("error: {error}");
            if let ConvertError::Validation { errors } = &error {
                print_errors(errors);
            }
            Ok(Outcome::Rejected)
        }
    }
}

fn report_validation(kind: SchemaKind, validation: &Validation) -> Outcome {
    if validation.is_valid() {
        eprintln!("Submission is valid against the {kind} schema");
        Outcome::Accepted
    } else {
        eprintln!(
            "Submission has {} error(s) against the {kind} schema",
            validation.errors.len()
        );
        print_errors(&validation.errors);
        Outcome::Rejected
    }
}

pub fn run_validate(args: &ValidateArgs) -> Result<Outcome> {
    let kind: SchemaKind = args.schema.schema.into();
    let text = fs::read_to_string(&args.document)
        .with_context(|| format!("read submission {}", args.document.display()))?;
    let validation = validate_str(kind, &text)
        .with_context(|| format!("validate submission {}", args.document.display()))?;
    Ok(report_validation(kind, &validation))
}

fn print_response(endpoint: Endpoint, response: &SubmissionResponse) -> Result<()> {
    eprintln!("ClinVar {endpoint}: HTTP {}", response.status);
    if let Some(body) = &response.body {
        println!(
            "{}",
            serde_json::to_string_pretty(body).context("format API response")?
        );
    }
    Ok(())
}

/// Sends a document to the API after checking it against the local schema.
pub fn run_remote(args: &RemoteArgs, endpoint: Endpoint) -> Result<Outcome> {
    let span = info_span!("remote", %endpoint);
    let _guard = span.enter();

    let api_key = ApiKey::parse(&args.api_key)?;
    let kind: SchemaKind = args.schema.schema.into();
    let document = read_document(&args.document)?;
    let validation = validate(kind, &document).context("validate submission")?;
    if !validation.is_valid() {
        return Ok(report_validation(kind, &validation));
    }

    let client = ClinVarClient::new(api_key).context("create API client")?;
    let response = client
        .send(endpoint, &document)
        .with_context(|| format!("ClinVar {endpoint} request"))?;
    print_response(endpoint, &response)?;
    Ok(Outcome::Accepted)
}

pub fn run_terms() {
    let mut significance = Table::new();
    significance.set_header(vec!["Clinical significance"]);
    apply_table_style(&mut significance);
    for term in CLINICAL_SIGNIFICANCE_TERMS {
        significance.add_row(vec![Cell::new(term)]);
    }
    println!("{significance}");

    let mut databases = Table::new();
    databases.set_header(vec!["Condition ID type", "Submitted as"]);
    apply_table_style(&mut databases);
    for (file_name, api_name) in CONDITION_DATABASES {
        databases.add_row(vec![Cell::new(file_name), Cell::new(api_name)]);
    }
    println!("{databases}");

    let mut citations = Table::new();
    citations.set_header(vec!["Legacy citation prefix", "Submitted as"]);
    apply_table_style(&mut citations);
    for (prefix, db) in LEGACY_CITATION_SOURCES {
        citations.add_row(vec![Cell::new(prefix), Cell::new(db)]);
    }
    println!("{citations}");
}
