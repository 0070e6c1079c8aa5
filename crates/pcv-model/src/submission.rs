//! The ClinVar API submission document.
//!
//! Field names follow the API's JSON schema. Optional fields are omitted when
//! absent; fields the schema requires are always written (as `null` when the
//! file did not supply them) so schema validation can report them.

use serde::{Deserialize, Serialize};

/// The only record status this tool submits.
pub const RECORD_STATUS_NOVEL: &str = "novel";

/// A complete submission: one item per variant plus batch-level settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_name: Option<String>,
    #[serde(
        default,
        rename = "clinvarSubmissionReleaseStatus",
        skip_serializing_if = "Option::is_none"
    )]
    pub release_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assertion_criteria: Option<DocumentAssertionCriteria>,
    #[serde(default)]
    pub clinvar_submission: Vec<SubmissionItem>,
}

impl SubmissionDocument {
    /// The document as a JSON value, ready for schema validation or upload.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    pub fn items(&self) -> &[SubmissionItem] {
        &self.clinvar_submission
    }
}

/// Batch-level assertion criteria citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAssertionCriteria {
    pub db: String,
    pub id: String,
}

/// One interpreted variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assertion_criteria: Option<AssertionCriteria>,
    pub clinical_significance: ClinicalSignificance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_set: Option<ConditionSet>,
    #[serde(default, rename = "localID", skip_serializing_if = "Option::is_none")]
    pub local_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_key: Option<String>,
    #[serde(default)]
    pub observed_in: Vec<Observation>,
    pub record_status: String,
    pub variant_set: VariantSet,
}

/// Item-level assertion criteria read from the Variant file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<ItemCitation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl AssertionCriteria {
    pub fn is_empty(&self) -> bool {
        self.citation.is_none() && self.method.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCitation {
    pub db: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalSignificance {
    pub clinical_significance_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_last_evaluated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_of_inheritance: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSet {
    pub condition: Vec<Condition>,
    #[serde(
        default,
        rename = "MultipleConditionExplanation",
        skip_serializing_if = "Option::is_none"
    )]
    pub multiple_condition_explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub db: String,
    pub id: String,
}

/// One individual (or group) in which the variant was observed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub affected_status: Option<String>,
    pub allele_origin: Option<String>,
    pub collection_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_features: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantSet {
    pub variant: Vec<Variant>,
}

/// A variant described either by HGVS or by chromosome coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene: Option<Vec<Gene>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hgvs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chromosome_coordinates: Option<CoordinateRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_copy_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_type: Option<String>,
}

impl Variant {
    /// True when the variant carries HGVS or at least one coordinate field.
    pub fn has_representation(&self) -> bool {
        self.hgvs.is_some()
            || self
                .chromosome_coordinates
                .as_ref()
                .is_some_and(|coords| !coords.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gene {
    pub symbol: String,
}

/// Chromosome coordinates of a small or structural variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chromosome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_allele: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_allele: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_start: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_start: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_stop: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_stop: Option<u64>,
}

impl CoordinateRecord {
    /// True when no field was read from the row. Assembly is ignored since it
    /// never comes from the row.
    pub fn is_empty(&self) -> bool {
        self.chromosome.is_none()
            && self.start.is_none()
            && self.stop.is_none()
            && self.reference_allele.is_none()
            && self.alternate_allele.is_none()
            && self.outer_start.is_none()
            && self.inner_start.is_none()
            && self.inner_stop.is_none()
            && self.outer_stop.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_fields_are_omitted() {
        let item = SubmissionItem {
            clinical_significance: ClinicalSignificance {
                clinical_significance_description: Some("Benign".to_string()),
                ..ClinicalSignificance::default()
            },
            local_id: Some("v1".to_string()),
            record_status: RECORD_STATUS_NOVEL.to_string(),
            variant_set: VariantSet {
                variant: vec![Variant {
                    hgvs: Some("NM_000379.4:c.2751del".to_string()),
                    ..Variant::default()
                }],
            },
            ..SubmissionItem::default()
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({
                "clinicalSignificance": {"clinicalSignificanceDescription": "Benign"},
                "localID": "v1",
                "observedIn": [],
                "recordStatus": "novel",
                "variantSet": {"variant": [{"hgvs": "NM_000379.4:c.2751del"}]}
            })
        );
    }

    #[test]
    fn required_observation_fields_serialize_as_null() {
        let value = serde_json::to_value(Observation::default()).unwrap();
        assert_eq!(
            value,
            json!({"affectedStatus": null, "alleleOrigin": null, "collectionMethod": null})
        );
    }

    #[test]
    fn document_uses_api_key_names() {
        let document = SubmissionDocument {
            submission_name: Some("batch".to_string()),
            release_status: Some("public".to_string()),
            assertion_criteria: Some(DocumentAssertionCriteria {
                db: "PubMed".to_string(),
                id: "25741868".to_string(),
            }),
            clinvar_submission: vec![],
        };
        let value = document.to_json().unwrap();
        assert_eq!(value["submissionName"], "batch");
        assert_eq!(value["clinvarSubmissionReleaseStatus"], "public");
        assert_eq!(value["assertionCriteria"]["db"], "PubMed");
        assert_eq!(value["clinvarSubmission"], json!([]));
    }

    #[test]
    fn empty_coordinates_have_no_representation() {
        let variant = Variant {
            chromosome_coordinates: Some(CoordinateRecord {
                assembly: Some("GRCh38".to_string()),
                ..CoordinateRecord::default()
            }),
            ..Variant::default()
        };
        assert!(!variant.has_representation());
    }
}
