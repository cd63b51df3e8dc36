// SPDX-License-Identifier: MPL-2.0
//! Mask download helpers.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

const INVALID_FILE_NAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Default file name offered when saving the mask of `title`.
///
/// Characters that are not allowed in file names on common platforms, and
/// control characters, are replaced with `_`.
#[must_use]
pub fn mask_file_name(title: &str) -> String {
    let safe: String = title
        .chars()
        .map(|c| {
            if c.is_control() || INVALID_FILE_NAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();
    format!("mask_{safe}.png")
}

/// Writes the encoded mask to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`Error::Export`] when the file cannot be written.
pub fn write_mask(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|err| Error::Export(format!("{}: {err}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_name_keeps_plain_titles() {
        assert_eq!(mask_file_name("Ground"), "mask_Ground.png");
        assert_eq!(mask_file_name("Roads again"), "mask_Roads again.png");
    }

    #[test]
    fn file_name_replaces_invalid_characters() {
        assert_eq!(mask_file_name("a/b\\c:d*e?f\"g<h>i|j"), "mask_a_b_c_d_e_f_g_h_i_j.png");
        assert_eq!(mask_file_name("tab\there"), "mask_tab_here.png");
    }

    #[test]
    fn write_mask_round_trips_bytes() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(mask_file_name("Yard"));
        write_mask(&path, b"\x89PNG").expect("write");
        assert_eq!(fs::read(&path).expect("read"), b"\x89PNG");
    }

    #[test]
    fn write_mask_reports_export_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("mask.png");
        let err = write_mask(&path, b"x").unwrap_err();
        assert!(matches!(err, Error::Export(_)));
    }
}
