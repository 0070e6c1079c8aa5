//! Builds one submission item from a Variant row and its CaseData rows.
//!
//! Each section of the item has its own builder. A builder only contributes
//! its key when the row supplies the data for it.

use pcv_model::vocab::{canonical_significance, condition_database};
use pcv_model::{
    AssertionCriteria, CaseDataColumn, ClinicalSignificance, Column, Condition, ConditionSet,
    Gene, ItemCitation, Observation, RECORD_STATUS_NOVEL, Record, SubmissionItem, Variant,
    VariantColumn, VariantSet,
};
use tracing::trace;

use crate::assemble::CaseDataIndex;
use crate::coords::normalize_coordinates;
use crate::diagnostics::Diagnostics;

/// Per-item switches decided at document level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemOptions {
    /// Emit `assertionCriteria` on the item. Off when the document carries
    /// batch-level criteria.
    pub assertion_criteria: bool,
}

impl Default for ItemOptions {
    fn default() -> Self {
        Self {
            assertion_criteria: true,
        }
    }
}

/// Splits a `;`-separated cell, dropping blank entries.
fn split_list(value: &str) -> Vec<&str> {
    value
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

/// Classification with the term in the vocabulary's canonical casing.
///
/// Unknown terms pass through unchanged; the schema reports them.
pub fn clinical_significance(record: &Record) -> ClinicalSignificance {
    let description = record
        .get(VariantColumn::ClinicalSignificance)
        .map(|term| canonical_significance(term).unwrap_or(term).to_string());
    ClinicalSignificance {
        clinical_significance_description: description,
        comment: owned(record.get(VariantColumn::ClinicalSignificanceComment)),
        date_last_evaluated: owned(record.get(VariantColumn::DateLastEvaluated)),
        mode_of_inheritance: owned(record.get(VariantColumn::ModeOfInheritance)),
    }
}

/// Conditions from the parallel `Condition ID type` / `Condition ID value`
/// lists.
///
/// A single type applies to every value. Pairs whose database is not in the
/// lookup table are dropped with a diagnostic.
pub fn condition_set(
    row: usize,
    record: &Record,
    diagnostics: &mut Diagnostics,
) -> Option<ConditionSet> {
    let types = split_list(record.get(VariantColumn::ConditionIdType)?);
    let values = split_list(record.get(VariantColumn::ConditionIdValue)?);
    if types.is_empty() || values.is_empty() {
        return None;
    }

    if types.len() > 1 && types.len() != values.len() {
        diagnostics.record(
            row,
            VariantColumn::ConditionIdType.name(),
            types.join(";"),
            format!(
                "{} condition types for {} condition values; unpaired entries ignored",
                types.len(),
                values.len()
            ),
        );
    }

    let mut conditions = Vec::with_capacity(values.len());
    for (index, id) in values.iter().enumerate() {
        let db_name = if types.len() == 1 {
            types[0]
        } else {
            match types.get(index) {
                Some(name) => *name,
                None => break,
            }
        };
        let Some(db) = condition_database(db_name) else {
            diagnostics.record(
                row,
                VariantColumn::ConditionIdType.name(),
                db_name,
                "unrecognized condition database; condition skipped",
            );
            continue;
        };
        conditions.push(Condition {
            db: db.to_string(),
            id: (*id).to_string(),
        });
    }

    if conditions.is_empty() {
        return None;
    }
    Some(ConditionSet {
        condition: conditions,
        multiple_condition_explanation: record
            .get(VariantColumn::MultipleConditionExplanation)
            .map(capitalize),
    })
}

/// Citation (`db:id`, split on the first colon) and free-text method.
pub fn assertion_criteria(record: &Record) -> Option<AssertionCriteria> {
    let citation = record
        .get(VariantColumn::AssertionMethodCitation)
        .and_then(|citation| citation.split_once(':'))
        .map(|(db, id)| (db.trim(), id.trim()))
        .filter(|(db, id)| !db.is_empty() && !id.is_empty())
        .map(|(db, id)| ItemCitation {
            db: db.to_string(),
            id: id.to_string(),
        });
    let criteria = AssertionCriteria {
        citation,
        method: owned(record.get(VariantColumn::AssertionMethod)),
    };
    (!criteria.is_empty()).then_some(criteria)
}

fn observation(record: &Record) -> Observation {
    let clinical_features = record
        .get(CaseDataColumn::ClinicalFeatures)
        .map(split_list)
        .filter(|features| !features.is_empty())
        .map(|features| features.into_iter().map(str::to_string).collect());
    Observation {
        affected_status: owned(record.get(CaseDataColumn::AffectedStatus)),
        allele_origin: owned(record.get(CaseDataColumn::AlleleOrigin)),
        collection_method: owned(record.get(CaseDataColumn::CollectionMethod)),
        clinical_features,
    }
}

/// One observation per CaseData row sharing the linking key, in file order.
pub fn observed_in(linking_key: Option<&str>, casedata: &CaseDataIndex<'_>) -> Vec<Observation> {
    linking_key
        .map(|key| {
            casedata
                .matching(key)
                .iter()
                .copied()
                .map(observation)
                .collect()
        })
        .unwrap_or_default()
}

/// The item's single variant: HGVS when both reference sequence and HGVS
/// are present, chromosome coordinates otherwise.
pub fn variant_set(row: usize, record: &Record, diagnostics: &mut Diagnostics) -> VariantSet {
    let gene = record
        .get(VariantColumn::GeneSymbol)
        .map(split_list)
        .filter(|symbols| !symbols.is_empty())
        .map(|symbols| {
            symbols
                .into_iter()
                .map(|symbol| Gene {
                    symbol: symbol.to_string(),
                })
                .collect()
        });

    let mut variant = Variant {
        gene,
        ..Variant::default()
    };

    match (
        record.get(VariantColumn::ReferenceSequence),
        record.get(VariantColumn::Hgvs),
    ) {
        (Some(reference), Some(change)) => {
            variant.hgvs = Some(format!("{reference}:{change}"));
        }
        _ => {
            variant.chromosome_coordinates = Some(normalize_coordinates(row, record, diagnostics));
        }
    }

    variant.copy_number = owned(record.get(VariantColumn::CopyNumber));
    if let Some(raw) = record.get(VariantColumn::ReferenceCopyNumber) {
        match raw.parse::<i64>() {
            Ok(copies) => variant.reference_copy_number = Some(copies),
            Err(_) => diagnostics.record(
                row,
                VariantColumn::ReferenceCopyNumber.name(),
                raw,
                "skipping referenceCopyNumber: not a whole number",
            ),
        }
    }
    variant.variant_type = owned(record.get(VariantColumn::VariantType));

    VariantSet {
        variant: vec![variant],
    }
}

/// Builds the submission item for Variant row `row` (1-based).
pub fn build_item(
    row: usize,
    record: &Record,
    casedata: &CaseDataIndex<'_>,
    options: ItemOptions,
    diagnostics: &mut Diagnostics,
) -> SubmissionItem {
    let local_key = owned(record.get(VariantColumn::LinkingId));
    let observed_in = observed_in(local_key.as_deref(), casedata);
    trace!(row, observations = observed_in.len(), "building item");

    SubmissionItem {
        assertion_criteria: if options.assertion_criteria {
            assertion_criteria(record)
        } else {
            None
        },
        clinical_significance: clinical_significance(record),
        condition_set: condition_set(row, record, diagnostics),
        local_id: owned(record.get(VariantColumn::LocalId)),
        local_key,
        observed_in,
        record_status: RECORD_STATUS_NOVEL.to_string(),
        variant_set: variant_set(row, record, diagnostics),
    }
}
