// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Zip packaging of split project files.
//!
//! All files land under a single `playwright-automation/` root so the
//! archive unpacks into one directory.

use std::io::{Cursor, Write};

use specwright_core::SpecwrightError;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::splitter::ExtractedFile;

/// Root directory inside every produced archive.
pub const ARCHIVE_ROOT: &str = "playwright-automation";

/// Packages the file set into zip bytes under [`ARCHIVE_ROOT`].
pub fn bundle_archive(files: &[ExtractedFile]) -> Result<Vec<u8>, SpecwrightError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in files {
        let entry_path = format!("{ARCHIVE_ROOT}/{}", file.path);
        writer
            .start_file(entry_path, options)
            .map_err(|e| SpecwrightError::Internal(format!("zip entry failed: {e}")))?;
        writer
            .write_all(file.content.as_bytes())
            .map_err(|e| SpecwrightError::Internal(format!("zip write failed: {e}")))?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| SpecwrightError::Internal(format!("zip finish failed: {e}")))?;

    let bytes = cursor.into_inner();
    debug!(files = files.len(), bytes = bytes.len(), "archive bundled");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn unzip(bytes: &[u8]) -> Vec<(String, String)> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut entries = Vec::new();
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).unwrap();
            let mut content = String::new();
            entry.read_to_string(&mut content).unwrap();
            entries.push((entry.name().to_string(), content));
        }
        entries
    }

    #[test]
    fn bundle_round_trips_all_files_under_root() {
        let files = vec![
            ExtractedFile {
                path: "tests/gherkin.spec.ts".to_string(),
                content: "test('x', ...)".to_string(),
            },
            ExtractedFile {
                path: "models/LoginPage.ts".to_string(),
                content: "class LoginPage {}".to_string(),
            },
        ];

        let bytes = bundle_archive(&files).unwrap();
        let entries = unzip(&bytes);

        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0],
            (
                "playwright-automation/tests/gherkin.spec.ts".to_string(),
                "test('x', ...)".to_string()
            )
        );
        assert_eq!(
            entries[1],
            (
                "playwright-automation/models/LoginPage.ts".to_string(),
                "class LoginPage {}".to_string()
            )
        );
    }

    #[test]
    fn bundle_of_empty_set_is_a_valid_archive() {
        let bytes = bundle_archive(&[]).unwrap();
        assert!(unzip(&bytes).is_empty());
    }

    #[test]
    fn bundle_preserves_unicode_content() {
        let files = vec![ExtractedFile {
            path: "tests/steps.spec.ts".to_string(),
            content: "// náïve check: ✓\n".to_string(),
        }];
        let bytes = bundle_archive(&files).unwrap();
        let entries = unzip(&bytes);
        assert_eq!(entries[0].1, "// náïve check: ✓\n");
    }
}
