//! Integration tests for submission assembly.

use pcv_map::{
    AssemblyError, Diagnostics, STRUCTURAL_VARIANT_FIELDS, SubmissionOptions, UnrepresentedRow,
    assemble, legacy_assertion_criteria, normalize_coordinates,
};
use pcv_model::{DocumentAssertionCriteria, Record, Table};
use serde_json::json;

fn hgvs_row(local_id: &str, linking_id: &str) -> Record {
    Record::from_pairs([
        ("##Local ID", local_id),
        ("Linking ID", linking_id),
        ("Reference sequence", "NM_000379.4"),
        ("HGVS", "c.2751del"),
        ("Clinical significance", "Pathogenic"),
        ("Assertion method citation", "PubMed:25741868"),
    ])
}

fn coordinate_row(local_id: &str, linking_id: &str) -> Record {
    Record::from_pairs([
        ("##Local ID", local_id),
        ("Linking ID", linking_id),
        ("Chromosome", "M"),
        ("Start", "3308"),
        ("Stop", "3308"),
        ("Reference allele", "T"),
        ("Alternate allele", "C"),
        ("Clinical significance", "Likely benign"),
    ])
}

fn case_row(linking_id: &str, individual: &str) -> Record {
    Record::from_pairs([
        ("Linking ID", linking_id),
        ("Individual ID", individual),
        ("Collection method", "clinical testing"),
        ("Allele origin", "germline"),
        ("Affected status", "yes"),
    ])
}

fn tables() -> (Table, Table) {
    let variants = vec![hgvs_row("v1", "link-1"), coordinate_row("v2", "link-2")]
        .into_iter()
        .collect();
    let casedata = vec![
        case_row("link-1", "ind-1"),
        case_row("link-3", "ind-2"),
        case_row("link-1", "ind-3"),
    ]
    .into_iter()
    .collect();
    (variants, casedata)
}

#[test]
fn test_structural_variant_reads_every_range_field() {
    let record = Record::from_pairs([
        ("Chromosome", "1"),
        ("Breakpoint 1", "1000"),
        ("Breakpoint 2", "5000"),
        ("Outer start", "900"),
        ("Inner start", "1100"),
        ("Inner stop", "4900"),
        ("Outer stop", "5100"),
        ("Variant type", "Deletion"),
    ]);
    let mut diagnostics = Diagnostics::new();
    let coords = normalize_coordinates(1, &record, &mut diagnostics);

    let value = serde_json::to_value(&coords).unwrap();
    assert_eq!(
        value,
        json!({
            "chromosome": "1",
            "start": 1000,
            "stop": 5000,
            "outerStart": 900,
            "innerStart": 1100,
            "innerStop": 4900,
            "outerStop": 5100
        })
    );
    assert_eq!(
        value.as_object().unwrap().len(),
        STRUCTURAL_VARIANT_FIELDS.len()
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn test_bad_integer_is_skipped_with_diagnostic() {
    let record = Record::from_pairs([
        ("Chromosome", "X"),
        ("Start", "12,000"),
        ("Stop", "12001"),
    ]);
    let mut diagnostics = Diagnostics::new();
    let coords = normalize_coordinates(2, &record, &mut diagnostics);

    assert_eq!(coords.start, None);
    assert_eq!(coords.stop, Some(12001));
    assert_eq!(coords.chromosome.as_deref(), Some("X"));
    let entries: Vec<_> = diagnostics.for_column("Start").collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].row, 2);
    assert_eq!(entries[0].value, "12,000");
}

#[test]
fn test_small_variant_ignores_structural_columns() {
    let record = Record::from_pairs([
        ("Chromosome", "2"),
        ("Start", "10"),
        ("Outer start", "5"),
    ]);
    let mut diagnostics = Diagnostics::new();
    let coords = normalize_coordinates(1, &record, &mut diagnostics);
    assert_eq!(coords.start, Some(10));
    assert_eq!(coords.outer_start, None);
}

#[test]
fn test_assemble_joins_case_data() {
    let (variants, casedata) = tables();
    let mut diagnostics = Diagnostics::new();
    let document = assemble(
        &variants,
        &casedata,
        &SubmissionOptions::default(),
        &mut diagnostics,
    )
    .unwrap();
    let items = document.items();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].local_id.as_deref(), Some("v1"));
    assert_eq!(items[0].observed_in.len(), 2);
    assert!(items[1].observed_in.is_empty());
    assert_eq!(
        items[1].variant_set.variant[0]
            .chromosome_coordinates
            .as_ref()
            .and_then(|coords| coords.chromosome.as_deref()),
        Some("MT")
    );
    assert_eq!(document.submission_name, None);
    assert_eq!(document.assertion_criteria, None);
    assert!(items[0].assertion_criteria.is_some());
    assert!(diagnostics.is_empty());
}

#[test]
fn test_request_overrides() {
    let (variants, casedata) = tables();
    let options = SubmissionOptions {
        submission_name: Some("batch-7".to_string()),
        release_status: Some("hold until published".to_string()),
        assertion_db: Some("PubMed".to_string()),
        assertion_id: Some("25741868".to_string()),
        assembly: Some("GRCh38".to_string()),
    };
    let document = assemble(&variants, &casedata, &options, &mut Diagnostics::new()).unwrap();
    let value = document.to_json().unwrap();

    assert_eq!(value["submissionName"], "batch-7");
    assert_eq!(value["clinvarSubmissionReleaseStatus"], "hold until published");
    assert_eq!(
        value["assertionCriteria"],
        json!({"db": "PubMed", "id": "25741868"})
    );
    for item in value["clinvarSubmission"].as_array().unwrap() {
        assert!(item.get("assertionCriteria").is_none());
    }

    let first = &value["clinvarSubmission"][0]["variantSet"]["variant"][0];
    assert!(first.get("chromosomeCoordinates").is_none());
    let second = &value["clinvarSubmission"][1]["variantSet"]["variant"][0];
    assert_eq!(second["chromosomeCoordinates"]["assembly"], "GRCh38");
}

#[test]
fn test_partial_assertion_override_is_ignored() {
    let (variants, casedata) = tables();
    let options = SubmissionOptions {
        assertion_db: Some("PubMed".to_string()),
        ..SubmissionOptions::default()
    };
    let document = assemble(&variants, &casedata, &options, &mut Diagnostics::new()).unwrap();
    assert_eq!(document.assertion_criteria, None);
    assert!(document.items()[0].assertion_criteria.is_some());
}

#[test]
fn test_legacy_citation_is_promoted() {
    let mut first = hgvs_row("v1", "link-1");
    first.insert("Assertion method citation", "PMID:25741868");
    let variants: Table = vec![first, coordinate_row("v2", "link-2")]
        .into_iter()
        .collect();

    assert_eq!(
        legacy_assertion_criteria(&variants),
        Some(DocumentAssertionCriteria {
            db: "PubMed".to_string(),
            id: "25741868".to_string(),
        })
    );

    let document = assemble(
        &variants,
        &Table::default(),
        &SubmissionOptions::default(),
        &mut Diagnostics::new(),
    )
    .unwrap();
    assert_eq!(
        document.assertion_criteria.as_ref().map(|c| c.db.as_str()),
        Some("PubMed")
    );
    assert!(document.items().iter().all(|item| item.assertion_criteria.is_none()));
}

#[test]
fn test_current_citation_is_not_legacy() {
    let (variants, _) = tables();
    assert_eq!(legacy_assertion_criteria(&variants), None);
    assert_eq!(legacy_assertion_criteria(&Table::default()), None);
}

#[test]
fn test_rows_without_representation_are_rejected() {
    let variants: Table = vec![
        hgvs_row("v1", "link-1"),
        Record::from_pairs([("##Local ID", "v2"), ("HGVS", "c.1A>G")]),
        Record::from_pairs([("Clinical significance", "Benign")]),
    ]
    .into_iter()
    .collect();

    let err = assemble(
        &variants,
        &Table::default(),
        &SubmissionOptions::default(),
        &mut Diagnostics::new(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        AssemblyError::MissingVariantRepresentation {
            rows: vec![
                UnrepresentedRow {
                    row: 2,
                    local_id: Some("v2".to_string()),
                },
                UnrepresentedRow {
                    row: 3,
                    local_id: None,
                },
            ],
        }
    );
}

#[test]
fn test_assembly_not_added_to_hgvs_items() {
    let variants: Table = vec![hgvs_row("v1", "link-1")].into_iter().collect();
    let options = SubmissionOptions {
        assembly: Some("GRCh37".to_string()),
        ..SubmissionOptions::default()
    };
    let document =
        assemble(&variants, &Table::default(), &options, &mut Diagnostics::new()).unwrap();
    assert_eq!(document.items()[0].variant_set.variant[0].chromosome_coordinates, None);
}

#[test]
fn test_skipped_fields_go_to_the_callers_sink() {
    let mut bad_stop = coordinate_row("v2", "link-2");
    bad_stop.insert("Stop", "3308.5");
    let variants: Table = vec![hgvs_row("v1", "link-1"), bad_stop]
        .into_iter()
        .collect();

    let mut diagnostics = Diagnostics::new();
    diagnostics.record(9, "Start", "x", "recorded earlier");
    let document = assemble(
        &variants,
        &Table::default(),
        &SubmissionOptions::default(),
        &mut diagnostics,
    )
    .unwrap();

    assert_eq!(document.items().len(), 2);
    assert_eq!(diagnostics.len(), 2);
    let skipped: Vec<_> = diagnostics.for_column("Stop").collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].row, 2);
    assert_eq!(skipped[0].value, "3308.5");
}
