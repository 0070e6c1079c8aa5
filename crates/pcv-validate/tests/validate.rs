//! Integration tests for submission schema validation.

use std::path::Path;

use pcv_map::{Diagnostics, SubmissionOptions, assemble};
use pcv_model::{Record, Table};
use pcv_validate::{SchemaKind, validate, validate_str};
use serde_json::{Value, json};

fn fixture(name: &str) -> Value {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name);
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_germline_fixture_is_valid() {
    let document = fixture("germline_submission.json");
    let result = validate(SchemaKind::Germline, &document).unwrap().into_parts();
    assert_eq!(result, (true, vec![]));
}

#[test]
fn test_somatic_fixture_is_valid() {
    let document = fixture("somatic_submission.json");
    let result = validate(SchemaKind::Somatic, &document).unwrap().into_parts();
    assert_eq!(result, (true, vec![]));
}

#[test]
fn test_somatic_terms_fail_germline_schema() {
    let document = fixture("somatic_submission.json");
    let validation = validate(SchemaKind::Germline, &document).unwrap();
    assert_eq!(validation.errors.len(), 2);
    assert!(
        validation
            .errors
            .iter()
            .any(|error| error.contains("/observedIn/0/alleleOrigin"))
    );
}

#[test]
fn test_all_errors_are_collected_and_sorted() {
    let mut document = fixture("germline_submission.json");
    document["clinvarSubmission"][1]["observedIn"][0]["alleleOrigin"] = Value::Null;
    document["clinvarSubmission"][0]["clinicalSignificance"]["clinicalSignificanceDescription"] =
        Value::Null;
    document["clinvarSubmissionReleaseStatus"] = json!("private");

    let (valid, errors) = validate(SchemaKind::Germline, &document)
        .unwrap()
        .into_parts();
    assert!(!valid);
    assert!(errors.len() >= 3, "{errors:?}");
    let mut sorted = errors.clone();
    sorted.sort();
    assert_eq!(errors, sorted);
    assert!(errors.iter().any(|e| e.starts_with("/clinvarSubmission/0/clinicalSignificance")));
    assert!(errors.iter().any(|e| e.starts_with("/clinvarSubmission/1/observedIn/0/alleleOrigin")));
    assert!(errors.iter().any(|e| e.starts_with("/clinvarSubmissionReleaseStatus")));
}

#[test]
fn test_variant_needs_exactly_one_representation() {
    let mut document = fixture("germline_submission.json");
    let variant = &mut document["clinvarSubmission"][0]["variantSet"]["variant"][0];
    variant["chromosomeCoordinates"] = json!({"chromosome": "2", "start": 31334000});
    assert!(!validate(SchemaKind::Germline, &document).unwrap().is_valid());

    let variant = &mut document["clinvarSubmission"][0]["variantSet"]["variant"][0];
    let fields = variant.as_object_mut().unwrap();
    fields.remove("chromosomeCoordinates");
    fields.remove("hgvs");
    assert!(!validate(SchemaKind::Germline, &document).unwrap().is_valid());
}

#[test]
fn test_assembled_document_is_valid() {
    let variants: Table = vec![
        Record::from_pairs([
            ("##Local ID", "var-001"),
            ("Linking ID", "link-001"),
            ("Gene symbol", "XDH"),
            ("Reference sequence", "NM_000379.4"),
            ("HGVS", "c.2751del"),
            ("Clinical significance", "LIKELY PATHOGENIC"),
            ("Condition ID type", "OMIM"),
            ("Condition ID value", "607633;607633"),
            ("Explanation for multiple conditions", "novel disease"),
            ("Assertion method citation", "PubMed:25741868"),
            ("Assertion method", "ACMG Guidelines, 2015"),
        ]),
        Record::from_pairs([
            ("##Local ID", "var-002"),
            ("Linking ID", "link-002"),
            ("Chromosome", "M"),
            ("Start", "3308"),
            ("Stop", "3308"),
            ("Reference allele", "T"),
            ("Alternate allele", "C"),
            ("Clinical significance", "Benign"),
        ]),
    ]
    .into_iter()
    .collect();
    let casedata: Table = vec![
        Record::from_pairs([
            ("Linking ID", "link-001"),
            ("Collection method", "clinical testing"),
            ("Allele origin", "germline"),
            ("Affected status", "yes"),
            ("Clinical features", "HP:0000093"),
        ]),
        Record::from_pairs([
            ("Linking ID", "link-001"),
            ("Collection method", "research"),
            ("Allele origin", "maternal"),
            ("Affected status", "no"),
        ]),
    ]
    .into_iter()
    .collect();
    let options = SubmissionOptions {
        submission_name: Some("round-trip".to_string()),
        release_status: Some("public".to_string()),
        assembly: Some("GRCh38".to_string()),
        ..SubmissionOptions::default()
    };

    let document = assemble(&variants, &casedata, &options, &mut Diagnostics::new())
        .unwrap()
        .to_json()
        .unwrap();
    let result = validate(SchemaKind::Germline, &document).unwrap().into_parts();
    assert_eq!(result, (true, vec![]));
}

#[test]
fn test_missing_case_data_fields_fail_validation() {
    let variants: Table = vec![Record::from_pairs([
        ("Linking ID", "link-001"),
        ("Reference sequence", "NM_000379.4"),
        ("HGVS", "c.2751del"),
        ("Clinical significance", "Pathogenic"),
    ])]
    .into_iter()
    .collect();
    let casedata: Table = vec![Record::from_pairs([("Linking ID", "link-001")])]
        .into_iter()
        .collect();

    let document = assemble(
        &variants,
        &casedata,
        &SubmissionOptions::default(),
        &mut Diagnostics::new(),
    )
    .unwrap()
    .to_json()
        .unwrap();
    let validation = validate(SchemaKind::Germline, &document).unwrap();
    assert!(validation.errors.len() >= 3, "{:?}", validation.errors);
    assert!(
        validation
            .errors
            .iter()
            .all(|e| e.starts_with("/clinvarSubmission/0/observedIn/0/"))
    );
}

#[test]
fn test_validate_str_parses_text() {
    let validation = validate_str(SchemaKind::Somatic, r#"{"clinvarSubmission": []}"#).unwrap();
    assert!(!validation.is_valid());
}
