//! Controlled vocabularies accepted by the ClinVar submission API.

/// Germline classification terms, in the API's canonical casing.
pub const CLINICAL_SIGNIFICANCE_TERMS: &[&str] = &[
    "Pathogenic",
    "Likely pathogenic",
    "Uncertain significance",
    "Likely benign",
    "Benign",
    "Pathogenic, low penetrance",
    "Uncertain risk allele",
    "Likely pathogenic, low penetrance",
    "Established risk allele",
    "Likely risk allele",
    "affects",
    "association",
    "drug response",
    "confers sensitivity",
    "protective",
    "other",
    "not provided",
];

/// Condition database names used in files, mapped to the API's `db` values.
pub const CONDITION_DATABASES: &[(&str, &str)] = &[
    ("HPO", "HP"),
    ("MedGen", "MedGen"),
    ("MeSH", "MeSH"),
    ("MONDO", "MONDO"),
    ("OMIM", "OMIM"),
    ("Orphanet", "Orphanet"),
];

/// Citation sources recognized in the legacy `Assertion method citation`
/// column, mapped to the API's citation `db` values.
pub const LEGACY_CITATION_SOURCES: &[(&str, &str)] =
    &[("PMID", "PubMed"), ("DOI", "DOI"), ("pmc", "pmc")];

/// Chromosome spellings rewritten before submission.
pub const CHROMOSOME_ALIASES: &[(&str, &str)] = &[("M", "MT")];

/// Canonical casing of a clinical significance term, matched case-insensitively.
pub fn canonical_significance(term: &str) -> Option<&'static str> {
    let term = term.trim();
    CLINICAL_SIGNIFICANCE_TERMS
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(term))
}

/// API database name for a condition database used in files.
pub fn condition_database(name: &str) -> Option<&'static str> {
    let name = name.trim();
    CONDITION_DATABASES
        .iter()
        .find(|(file_name, _)| *file_name == name)
        .map(|(_, api_name)| *api_name)
}

/// API citation database for a legacy citation prefix (`PMID`, `DOI`, `pmc`).
pub fn legacy_citation_source(prefix: &str) -> Option<&'static str> {
    LEGACY_CITATION_SOURCES
        .iter()
        .find(|(file_prefix, _)| *file_prefix == prefix)
        .map(|(_, db)| *db)
}

/// Chromosome name with aliases applied (`M` becomes `MT`).
pub fn normalize_chromosome(chromosome: &str) -> String {
    let chromosome = chromosome.trim();
    CHROMOSOME_ALIASES
        .iter()
        .find(|(alias, _)| *alias == chromosome)
        .map_or_else(|| chromosome.to_string(), |(_, name)| (*name).to_string())
}
