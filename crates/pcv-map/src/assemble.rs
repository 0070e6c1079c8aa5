//! Joins the Variant and CaseData tables into one submission document.

use std::collections::HashMap;

use pcv_model::vocab::legacy_citation_source;
use pcv_model::{
    CaseDataColumn, DocumentAssertionCriteria, Record, SubmissionDocument, Table, Variant,
    VariantColumn,
};
use tracing::{debug, info, info_span};

use crate::diagnostics::Diagnostics;
use crate::error::{AssemblyError, Result, UnrepresentedRow};
use crate::item::{ItemOptions, build_item};
use crate::options::SubmissionOptions;

/// CaseData rows grouped by linking key, built once per conversion.
#[derive(Debug, Default)]
pub struct CaseDataIndex<'a> {
    by_key: HashMap<&'a str, Vec<&'a Record>>,
}

impl<'a> CaseDataIndex<'a> {
    pub fn new(casedata: &'a Table) -> Self {
        let mut by_key: HashMap<&'a str, Vec<&'a Record>> = HashMap::new();
        for record in casedata {
            if let Some(key) = record.get(CaseDataColumn::LinkingId) {
                by_key.entry(key).or_default().push(record);
            }
        }
        Self { by_key }
    }

    /// Rows with this linking key, in table order.
    pub fn matching(&self, key: &str) -> &[&'a Record] {
        self.by_key
            .get(key.trim())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct linking keys.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

/// Batch criteria carried by the retired file dialect.
///
/// That dialect put a `PMID:…`, `DOI:…` or `pmc:…` citation on the first
/// Variant row and meant it for the whole batch.
pub fn legacy_assertion_criteria(variants: &Table) -> Option<DocumentAssertionCriteria> {
    let citation = variants
        .first()?
        .get(VariantColumn::AssertionMethodCitation)?;
    let (prefix, id) = citation.split_once(':')?;
    let db = legacy_citation_source(prefix.trim())?;
    let id = id.trim();
    if id.is_empty() {
        return None;
    }
    Some(DocumentAssertionCriteria {
        db: db.to_string(),
        id: id.to_string(),
    })
}

/// Builds the submission document for one request.
///
/// Request options are applied after every item is built, in order: name and
/// release status, then batch assertion criteria (which replace any item
/// criteria), then genome assembly on coordinate-based variants.
///
/// Skipped fields are recorded in `diagnostics`, which belongs to the request.
///
/// # Errors
///
/// Returns [`AssemblyError::MissingVariantRepresentation`] naming every
/// Variant row that has neither HGVS nor any chromosome coordinate.
pub fn assemble(
    variants: &Table,
    casedata: &Table,
    options: &SubmissionOptions,
    diagnostics: &mut Diagnostics,
) -> Result<SubmissionDocument> {
    let span = info_span!(
        "assemble",
        variants = variants.len(),
        casedata = casedata.len()
    );
    let _guard = span.enter();

    let index = CaseDataIndex::new(casedata);
    debug!(linking_keys = index.len(), "indexed case data");

    let legacy = legacy_assertion_criteria(variants);
    if let Some(criteria) = &legacy {
        debug!(db = %criteria.db, id = %criteria.id, "using batch assertion criteria from file");
    }
    let item_options = ItemOptions {
        assertion_criteria: legacy.is_none(),
    };

    let recorded_before = diagnostics.len();
    let mut items = Vec::with_capacity(variants.len());
    let mut unrepresented = Vec::new();
    for (offset, record) in variants.iter().enumerate() {
        let row = offset + 1;
        let item = build_item(row, record, &index, item_options, diagnostics);
        if !item.variant_set.variant.iter().all(Variant::has_representation) {
            unrepresented.push(UnrepresentedRow {
                row,
                local_id: item.local_id.clone(),
            });
        }
        items.push(item);
    }
    if !unrepresented.is_empty() {
        return Err(AssemblyError::MissingVariantRepresentation {
            rows: unrepresented,
        });
    }

    let mut document = SubmissionDocument {
        assertion_criteria: legacy,
        clinvar_submission: items,
        ..SubmissionDocument::default()
    };

    if let Some(name) = options.submission_name() {
        document.submission_name = Some(name.to_string());
    }
    if let Some(status) = options.release_status() {
        document.release_status = Some(status.to_string());
    }

    if let Some(criteria) = options.assertion_criteria() {
        for item in &mut document.clinvar_submission {
            item.assertion_criteria = None;
        }
        document.assertion_criteria = Some(criteria);
    }

    if let Some(assembly) = options.assembly() {
        let coordinates = document
            .clinvar_submission
            .iter_mut()
            .flat_map(|item| item.variant_set.variant.iter_mut())
            .filter_map(|variant| variant.chromosome_coordinates.as_mut());
        for coords in coordinates {
            coords.assembly = Some(assembly.to_string());
        }
    }

    info!(
        items = document.clinvar_submission.len(),
        skipped_fields = diagnostics.len() - recorded_before,
        "assembled submission"
    );
    Ok(document)
}
