//! File selection state for the drop zone.
//!
//! [`FileSelection`] is generic over the browser handle so the same rules
//! (truncate to `max`, keep order, remove by index) are testable without a
//! DOM. The frontend instantiates it with `web_sys::File`.

/// Default cap on files per selection.
pub const DEFAULT_MAX_FILES: usize = 10;

/// A file the user picked or dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<H> {
    pub name: String,
    pub size: u64,
    pub handle: H,
}

impl<H> SelectedFile<H> {
    pub fn new(name: impl Into<String>, size: u64, handle: H) -> Self {
        Self {
            name: name.into(),
            size,
            handle,
        }
    }

    /// Size formatted for the file list.
    pub fn display_size(&self) -> String {
        format_file_size(self.size)
    }
}

/// Ordered, capped list of selected files.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSelection<H> {
    files: Vec<SelectedFile<H>>,
    max_files: usize,
}

impl<H> FileSelection<H> {
    pub fn new(max_files: usize) -> Self {
        Self {
            files: Vec::new(),
            max_files,
        }
    }

    pub fn files(&self) -> &[SelectedFile<H>] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Replaces the selection with `incoming`, dropping everything past
    /// `max_files`.
    ///
    /// Returns `false` and leaves the selection untouched when `incoming` is
    /// empty, matching a cancelled picker dialog.
    pub fn replace(&mut self, incoming: impl IntoIterator<Item = SelectedFile<H>>) -> bool {
        let files: Vec<_> = incoming.into_iter().take(self.max_files).collect();
        if files.is_empty() {
            return false;
        }
        self.files = files;
        true
    }

    /// Removes the file at `index`. Out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) -> Option<SelectedFile<H>> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }
}

impl<H: Clone> FileSelection<H> {
    /// Snapshot handed to the selection callback.
    pub fn to_vec(&self) -> Vec<SelectedFile<H>> {
        self.files.clone()
    }
}

impl<H> Default for FileSelection<H> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILES)
    }
}

// =============================================================================
// Drag & Drop
// =============================================================================

/// Drag events the drop zone reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
    Drop,
}

/// Whether the highlight ring around the drop zone is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    pub is_drag_over: bool,
}

impl DragState {
    pub fn apply(&mut self, event: DragEvent) {
        match event {
            DragEvent::Enter => self.is_drag_over = true,
            DragEvent::Leave | DragEvent::Drop => self.is_drag_over = false,
            DragEvent::Over => {}
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Human-readable byte count: `0 Bytes`, `1.5 KB`, `200 MB`...
///
/// Base 1024, at most two decimals with trailing zeros dropped.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{rounded:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", text, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&str]) -> Vec<SelectedFile<()>> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| SelectedFile::new(*n, i as u64, ()))
            .collect()
    }

    fn names(selection: &FileSelection<()>) -> Vec<&str> {
        selection.files().iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_truncates_to_max_in_order() {
        let mut selection = FileSelection::new(5);
        let incoming = named(&["a", "b", "c", "d", "e", "f", "g"]);
        assert!(selection.replace(incoming));
        assert_eq!(names(&selection), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_under_max_keeps_everything() {
        let mut selection = FileSelection::new(5);
        selection.replace(named(&["x.zip", "y.rar"]));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_new_selection_replaces_previous() {
        let mut selection = FileSelection::new(5);
        selection.replace(named(&["old.zip"]));
        selection.replace(named(&["new1.zip", "new2.zip"]));
        assert_eq!(names(&selection), vec!["new1.zip", "new2.zip"]);
    }

    #[test]
    fn test_empty_drop_is_ignored() {
        let mut selection = FileSelection::new(5);
        selection.replace(named(&["keep.zip"]));
        assert!(!selection.replace(Vec::new()));
        assert_eq!(names(&selection), vec!["keep.zip"]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut selection = FileSelection::new(10);
        selection.replace(named(&["a", "b", "c", "d"]));

        let removed = selection.remove(1).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(names(&selection), vec!["a", "c", "d"]);

        assert!(selection.remove(7).is_none());
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_drag_highlight() {
        let mut state = DragState::default();
        state.apply(DragEvent::Enter);
        assert!(state.is_drag_over);
        state.apply(DragEvent::Over);
        assert!(state.is_drag_over);
        state.apply(DragEvent::Drop);
        assert!(!state.is_drag_over);

        state.apply(DragEvent::Enter);
        state.apply(DragEvent::Leave);
        assert!(!state.is_drag_over);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(200 * 1024 * 1024), "200 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
    }
}
