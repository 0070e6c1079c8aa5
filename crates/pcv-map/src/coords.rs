//! Chromosome coordinate normalization.
//!
//! Small variants are located by a point and their alleles, structural
//! variants by breakpoints or an outer/inner range. Each geometry has a
//! fixed table of source columns, read in declared order. A cell that fails
//! its conversion is recorded in [`Diagnostics`] and left out; it never fails
//! the row.

use pcv_model::vocab::normalize_chromosome;
use pcv_model::{CoordinateRecord, Record, VariantColumn};

use crate::diagnostics::Diagnostics;
use crate::error::ConversionError;

/// Destination key inside `chromosomeCoordinates`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateKey {
    Chromosome,
    Start,
    Stop,
    ReferenceAllele,
    AlternateAllele,
    OuterStart,
    InnerStart,
    InnerStop,
    OuterStop,
}

impl CoordinateKey {
    /// JSON key in the submission schema.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chromosome => "chromosome",
            Self::Start => "start",
            Self::Stop => "stop",
            Self::ReferenceAllele => "referenceAllele",
            Self::AlternateAllele => "alternateAllele",
            Self::OuterStart => "outerStart",
            Self::InnerStart => "innerStart",
            Self::InnerStop => "innerStop",
            Self::OuterStop => "outerStop",
        }
    }

    /// Declared type of the key's value.
    pub const fn format(self) -> FieldFormat {
        match self {
            Self::Chromosome => FieldFormat::Chromosome,
            Self::ReferenceAllele | Self::AlternateAllele => FieldFormat::Text,
            Self::Start
            | Self::Stop
            | Self::OuterStart
            | Self::InnerStart
            | Self::InnerStop
            | Self::OuterStop => FieldFormat::Integer,
        }
    }
}

/// How a cell is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// Text with chromosome aliases applied (`M` becomes `MT`).
    Chromosome,
    Text,
    /// Non-negative whole number.
    Integer,
}

/// A converted cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateValue {
    Text(String),
    Integer(u64),
}

impl FieldFormat {
    pub fn convert(self, raw: &str) -> Result<CoordinateValue, ConversionError> {
        let raw = raw.trim();
        match self {
            Self::Chromosome => Ok(CoordinateValue::Text(normalize_chromosome(raw))),
            Self::Text => Ok(CoordinateValue::Text(raw.to_string())),
            Self::Integer => raw.parse::<u64>().map(CoordinateValue::Integer).map_err(|_| {
                ConversionError::NotAnInteger {
                    value: raw.to_string(),
                }
            }),
        }
    }
}

/// Source column to destination key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateField {
    pub column: &'static str,
    pub key: CoordinateKey,
}

const fn field(column: &'static str, key: CoordinateKey) -> CoordinateField {
    CoordinateField { column, key }
}

/// Columns of a small variant. Assembly comes from the request, not the file.
pub const SMALL_VARIANT_FIELDS: &[CoordinateField] = &[
    field("Chromosome", CoordinateKey::Chromosome),
    field("Start", CoordinateKey::Start),
    field("Stop", CoordinateKey::Stop),
    field("Reference allele", CoordinateKey::ReferenceAllele),
    field("Alternate allele", CoordinateKey::AlternateAllele),
];

/// Columns of a structural variant. Assembly comes from the request, not the file.
pub const STRUCTURAL_VARIANT_FIELDS: &[CoordinateField] = &[
    field("Chromosome", CoordinateKey::Chromosome),
    field("Breakpoint 1", CoordinateKey::Start),
    field("Breakpoint 2", CoordinateKey::Stop),
    field("Outer start", CoordinateKey::OuterStart),
    field("Inner start", CoordinateKey::InnerStart),
    field("Inner stop", CoordinateKey::InnerStop),
    field("Outer stop", CoordinateKey::OuterStop),
];

/// Variant geometry, selected by the presence of a `Variant type` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    SmallVariant,
    StructuralVariant,
}

impl Geometry {
    pub fn of(record: &Record) -> Self {
        if record.get(VariantColumn::VariantType).is_some() {
            Self::StructuralVariant
        } else {
            Self::SmallVariant
        }
    }

    pub const fn fields(self) -> &'static [CoordinateField] {
        match self {
            Self::SmallVariant => SMALL_VARIANT_FIELDS,
            Self::StructuralVariant => STRUCTURAL_VARIANT_FIELDS,
        }
    }
}

fn text_slot(coords: &mut CoordinateRecord, key: CoordinateKey) -> Option<&mut Option<String>> {
    match key {
        CoordinateKey::Chromosome => Some(&mut coords.chromosome),
        CoordinateKey::ReferenceAllele => Some(&mut coords.reference_allele),
        CoordinateKey::AlternateAllele => Some(&mut coords.alternate_allele),
        _ => None,
    }
}

fn integer_slot(coords: &mut CoordinateRecord, key: CoordinateKey) -> Option<&mut Option<u64>> {
    match key {
        CoordinateKey::Start => Some(&mut coords.start),
        CoordinateKey::Stop => Some(&mut coords.stop),
        CoordinateKey::OuterStart => Some(&mut coords.outer_start),
        CoordinateKey::InnerStart => Some(&mut coords.inner_start),
        CoordinateKey::InnerStop => Some(&mut coords.inner_stop),
        CoordinateKey::OuterStop => Some(&mut coords.outer_stop),
        _ => None,
    }
}

fn assign(coords: &mut CoordinateRecord, key: CoordinateKey, value: CoordinateValue) {
    match value {
        CoordinateValue::Text(text) => {
            if let Some(slot) = text_slot(coords, key) {
                *slot = Some(text);
            }
        }
        CoordinateValue::Integer(number) => {
            if let Some(slot) = integer_slot(coords, key) {
                *slot = Some(number);
            }
        }
    }
}

/// Reads the coordinate columns of `geometry` from a Variant row.
pub fn read_coordinates(
    row: usize,
    record: &Record,
    geometry: Geometry,
    diagnostics: &mut Diagnostics,
) -> CoordinateRecord {
    let mut coords = CoordinateRecord::default();
    for field in geometry.fields() {
        let Some(raw) = record.value(field.column) else {
            continue;
        };
        match field.key.format().convert(raw) {
            Ok(value) => assign(&mut coords, field.key, value),
            Err(error) => diagnostics.record(
                row,
                field.column,
                raw,
                format!("skipping {}: {error}", field.key.as_str()),
            ),
        }
    }
    coords
}

/// Normalized coordinates of a Variant row, using the row's own geometry.
pub fn normalize_coordinates(
    row: usize,
    record: &Record,
    diagnostics: &mut Diagnostics,
) -> CoordinateRecord {
    read_coordinates(row, record, Geometry::of(record), diagnostics)
}
