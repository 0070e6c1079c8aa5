//! Column names of the Variant and CaseData files.
//!
//! The submission templates changed column names across revisions. Each
//! column lists its accepted headers with the current name first.

use std::fmt;

/// A named input column with one or more accepted header spellings.
pub trait Column: Copy {
    /// Accepted header names, current spelling first.
    fn aliases(self) -> &'static [&'static str];

    /// Current header name.
    fn name(self) -> &'static str {
        self.aliases()[0]
    }
}

/// Columns of the Variant file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantColumn {
    LocalId,
    LinkingId,
    GeneSymbol,
    ReferenceSequence,
    Hgvs,
    ClinicalSignificance,
    ClinicalSignificanceComment,
    DateLastEvaluated,
    ModeOfInheritance,
    ConditionIdType,
    ConditionIdValue,
    MultipleConditionExplanation,
    AssertionMethodCitation,
    AssertionMethod,
    VariantType,
    CopyNumber,
    ReferenceCopyNumber,
}

impl Column for VariantColumn {
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::LocalId => &["##Local ID", "#Local ID", "Local ID"],
            Self::LinkingId => &["Linking ID", "Linking id"],
            Self::GeneSymbol => &["Gene symbol"],
            Self::ReferenceSequence => &["Reference sequence"],
            Self::Hgvs => &["HGVS", "Nucleotide change"],
            Self::ClinicalSignificance => &["Clinical significance"],
            Self::ClinicalSignificanceComment => &["Comment on clinical significance"],
            Self::DateLastEvaluated => &["Date last evaluated"],
            Self::ModeOfInheritance => &["Mode of inheritance"],
            Self::ConditionIdType => &["Condition ID type"],
            Self::ConditionIdValue => &["Condition ID value"],
            Self::MultipleConditionExplanation => &["Explanation for multiple conditions"],
            Self::AssertionMethodCitation => &["Assertion method citation"],
            Self::AssertionMethod => &["Assertion method"],
            Self::VariantType => &["Variant type"],
            Self::CopyNumber => &["Copy number"],
            Self::ReferenceCopyNumber => &["Reference copy number"],
        }
    }
}

impl fmt::Display for VariantColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Columns of the CaseData file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseDataColumn {
    LinkingId,
    IndividualId,
    CollectionMethod,
    AlleleOrigin,
    AffectedStatus,
    ClinicalFeatures,
}

impl Column for CaseDataColumn {
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::LinkingId => &["Linking ID", "Linking id"],
            Self::IndividualId => &["Individual ID"],
            Self::CollectionMethod => &["Collection method"],
            Self::AlleleOrigin => &["Allele origin"],
            Self::AffectedStatus => &["Affected status"],
            Self::ClinicalFeatures => &["Clinical features"],
        }
    }
}

impl fmt::Display for CaseDataColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
