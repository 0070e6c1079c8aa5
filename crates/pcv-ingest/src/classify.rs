//! Classification of uploads into Variant and CaseData files.

use std::fmt;

use tracing::debug;

use crate::error::{IngestError, Result};
use crate::upload::Upload;

/// The two files a conversion needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Variant,
    CaseData,
}

impl FileKind {
    /// Kind of file implied by its name (case-insensitive substring match).
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.contains("casedata") {
            Some(Self::CaseData)
        } else if lower.contains("variant") {
            Some(Self::Variant)
        } else {
            None
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Variant => "Variant",
            Self::CaseData => "CaseData",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The Variant and CaseData uploads of one conversion request.
#[derive(Debug, Clone)]
pub struct ClassifiedUploads<U> {
    pub variant: U,
    pub casedata: U,
}

/// Picks the Variant and CaseData files out of a set of uploads.
///
/// Uploads whose name matches neither kind are ignored. Both kinds must be
/// present exactly once.
pub fn classify_uploads<U: Upload>(uploads: Vec<U>) -> Result<ClassifiedUploads<U>> {
    let mut variant: Option<U> = None;
    let mut casedata: Option<U> = None;

    for upload in uploads {
        let Some(kind) = FileKind::from_filename(upload.filename()) else {
            debug!(filename = upload.filename(), "ignoring unrecognized upload");
            continue;
        };
        let slot = match kind {
            FileKind::Variant => &mut variant,
            FileKind::CaseData => &mut casedata,
        };
        if let Some(existing) = slot.as_ref() {
            return Err(IngestError::DuplicateFile {
                kind,
                first: existing.filename().to_string(),
                second: upload.filename().to_string(),
            });
        }
        *slot = Some(upload);
    }

    match (variant, casedata) {
        (Some(variant), Some(casedata)) => Ok(ClassifiedUploads { variant, casedata }),
        (None, _) => Err(IngestError::MissingFile {
            missing: FileKind::Variant,
        }),
        (Some(_), None) => Err(IngestError::MissingFile {
            missing: FileKind::CaseData,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::MemoryUpload;

    #[test]
    fn test_kind_from_filename() {
        assert_eq!(FileKind::from_filename("Variant.csv"), Some(FileKind::Variant));
        assert_eq!(
            FileKind::from_filename("SV_variants.tsv"),
            Some(FileKind::Variant)
        );
        assert_eq!(
            FileKind::from_filename("casedata_2024.CSV"),
            Some(FileKind::CaseData)
        );
        assert_eq!(FileKind::from_filename("notes.txt"), None);
    }

    #[test]
    fn test_classify_pair() {
        let uploads = vec![
            MemoryUpload::new("CaseData.csv", "a"),
            MemoryUpload::new("readme.md", "b"),
            MemoryUpload::new("Variant.csv", "c"),
        ];
        let pair = classify_uploads(uploads).unwrap();
        assert_eq!(pair.variant.filename(), "Variant.csv");
        assert_eq!(pair.casedata.filename(), "CaseData.csv");
    }

    #[test]
    fn test_classify_missing_casedata() {
        let uploads = vec![MemoryUpload::new("Variant.csv", "c")];
        let result = classify_uploads(uploads);
        assert!(matches!(
            result,
            Err(IngestError::MissingFile {
                missing: FileKind::CaseData
            })
        ));
    }

    #[test]
    fn test_classify_duplicate() {
        let uploads = vec![
            MemoryUpload::new("Variant_a.csv", "a"),
            MemoryUpload::new("Variant_b.csv", "b"),
        ];
        assert!(matches!(
            classify_uploads(uploads),
            Err(IngestError::DuplicateFile { .. })
        ));
    }
}
