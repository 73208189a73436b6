//! Browser-side types shared across components.
//!
//! Domain types live in `pecas_core`; this module only binds them to
//! `web_sys` handles.

use pecas_core::SelectedFile;
use web_sys::{File, FileList};

/// A selected archive together with the browser `File` to upload.
pub type BrowserFile = SelectedFile<File>;

/// Converts a `FileList` (from a drop or the picker) into selection
/// entries, preserving order.
pub fn files_from_list(list: &FileList) -> Vec<BrowserFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| SelectedFile::new(file.name(), file.size() as u64, file))
        .collect()
}
