//! In-terminal "open file" dialog.
//!
//! Lists the current directory's subdirectories and its `.json` files.
//! Only a single file can be chosen; directories are navigated into, never
//! returned. `Esc` closes the dialog with [`Selection::Cancelled`].

use super::list_state::ListState;
use crossterm::event::{KeyCode, KeyEvent};
use std::cmp::Ordering;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of a finished file selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(PathBuf),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    Parent,
    Directory,
    JsonFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// User intents inside the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    /// Descend into the highlighted directory or choose the highlighted file
    Activate,
    GoToParent,
    ToggleHidden,
    Cancel,
}

/// Pure function: map a key to a picker action.
pub fn determine_picker_action(key: KeyEvent) -> Option<PickerAction> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(PickerAction::Cancel),
        KeyCode::Up | KeyCode::Char('k') => Some(PickerAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(PickerAction::MoveDown),
        KeyCode::PageUp => Some(PickerAction::PageUp),
        KeyCode::PageDown => Some(PickerAction::PageDown),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => Some(PickerAction::Activate),
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => Some(PickerAction::GoToParent),
        KeyCode::Char('.') => Some(PickerAction::ToggleHidden),
        _ => None,
    }
}

/// Directory listing state of the open dialog.
#[derive(Debug, Clone)]
pub struct FilePicker {
    dir: PathBuf,
    entries: Vec<PickerEntry>,
    list: ListState,
    show_hidden: bool,
    error: Option<String>,
}

impl FilePicker {
    /// Open the dialog at `dir`.
    pub fn open(dir: &Path, show_hidden: bool) -> Self {
        let dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        let mut picker = Self {
            dir,
            entries: Vec::new(),
            list: ListState::new(),
            show_hidden,
            error: None,
        };
        picker.refresh();
        picker
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[PickerEntry] {
        &self.entries
    }

    pub fn selected_index(&self) -> usize {
        self.list.selected_index()
    }

    pub fn scroll_offset(&self) -> usize {
        self.list.scroll_offset()
    }

    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    /// Listing error for the current directory, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> Option<&PickerEntry> {
        self.entries.get(self.list.selected_index())
    }

    /// Apply an action. Returns a selection once the dialog is finished.
    pub fn apply(&mut self, action: PickerAction, viewport: usize) -> Option<Selection> {
        let count = self.entries.len();
        let page = viewport.max(1) as isize;

        match action {
            PickerAction::Cancel => return Some(Selection::Cancelled),
            PickerAction::MoveUp => self.list.move_by(-1, count),
            PickerAction::MoveDown => self.list.move_by(1, count),
            PickerAction::PageUp => self.list.move_by(-page, count),
            PickerAction::PageDown => self.list.move_by(page, count),
            PickerAction::GoToParent => self.go_to_parent(),
            PickerAction::ToggleHidden => {
                self.show_hidden = !self.show_hidden;
                self.refresh();
            }
            PickerAction::Activate => {
                let entry = self.selected()?.clone();
                match entry.kind {
                    EntryKind::JsonFile => return Some(Selection::Chosen(entry.path)),
                    EntryKind::Directory => self.enter(entry.path),
                    EntryKind::Parent => self.go_to_parent(),
                }
            }
        }

        self.list.follow_selection(viewport);
        None
    }

    fn enter(&mut self, dir: PathBuf) {
        self.dir = dir;
        self.list.reset();
        self.refresh();
    }

    fn go_to_parent(&mut self) {
        let Some(parent) = self.dir.parent().map(Path::to_path_buf) else {
            return;
        };
        let came_from = std::mem::replace(&mut self.dir, parent);
        self.list.reset();
        self.refresh();

        if let Some(index) = self.entries.iter().position(|e| e.path == came_from) {
            self.list.set_selected_index(index, self.entries.len());
        }
    }

    fn refresh(&mut self) {
        match list_directory(&self.dir, self.show_hidden) {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(e) => {
                log::debug!("Cannot list {}: {}", self.dir.display(), e);
                self.entries = parent_entry(&self.dir).into_iter().collect();
                self.error = Some(e.to_string());
            }
        }
        let count = self.entries.len();
        let selected = self.list.selected_index();
        self.list.set_selected_index(selected, count);
    }
}

/// List `dir` for the picker: parent link, directories, then `.json` files.
pub fn list_directory(dir: &Path, show_hidden: bool) -> io::Result<Vec<PickerEntry>> {
    let mut entries = Vec::new();

    for item in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(io::Error::from(e)),
            Err(e) => {
                // Broken symlinks and unreadable children are skipped
                log::debug!("Skipping entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if !show_hidden && name.starts_with('.') {
            continue;
        }

        let kind = if entry.file_type().is_dir() {
            EntryKind::Directory
        } else if is_json_file(entry.path()) {
            EntryKind::JsonFile
        } else {
            continue;
        };

        entries.push(PickerEntry {
            name,
            path: entry.into_path(),
            kind,
        });
    }

    entries.sort_by(compare_entries);
    Ok(parent_entry(dir).into_iter().chain(entries).collect())
}

/// Whether the picker may return this path
pub fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn parent_entry(dir: &Path) -> Option<PickerEntry> {
    dir.parent().map(|parent| PickerEntry {
        name: "..".to_string(),
        path: parent.to_path_buf(),
        kind: EntryKind::Parent,
    })
}

fn compare_entries(a: &PickerEntry, b: &PickerEntry) -> Ordering {
    a.kind
        .cmp(&b.kind)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::fs;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("reports")).unwrap();
        fs::create_dir(dir.path().join(".cache")).unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("A.JSON"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join(".hidden.json"), "{}").unwrap();
        fs::write(dir.path().join("reports").join("run.json"), "{}").unwrap();
        dir
    }

    fn names(picker: &FilePicker) -> Vec<&str> {
        picker.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_lists_directories_then_json_files() {
        let dir = fixture();
        let picker = FilePicker::open(dir.path(), false);
        assert_eq!(names(&picker), vec!["..", "reports", "A.JSON", "b.json"]);
        assert!(picker.error().is_none());
    }

    #[test]
    fn test_hidden_entries_toggle() {
        let dir = fixture();
        let mut picker = FilePicker::open(dir.path(), false);
        picker.apply(PickerAction::ToggleHidden, 10);
        assert_eq!(
            names(&picker),
            vec!["..", ".cache", "reports", ".hidden.json", "A.JSON", "b.json"]
        );
    }

    #[test]
    fn test_activate_directory_descends_and_file_is_chosen() {
        let dir = fixture();
        let mut picker = FilePicker::open(dir.path(), false);

        picker.apply(PickerAction::MoveDown, 10);
        assert_eq!(picker.selected().unwrap().name, "reports");
        assert_eq!(picker.apply(PickerAction::Activate, 10), None);
        assert_eq!(names(&picker), vec!["..", "run.json"]);

        picker.apply(PickerAction::MoveDown, 10);
        let selection = picker.apply(PickerAction::Activate, 10);
        let expected = dir.path().canonicalize().unwrap().join("reports").join("run.json");
        assert_eq!(selection, Some(Selection::Chosen(expected)));
    }

    #[test]
    fn test_parent_reselects_previous_directory() {
        let dir = fixture();
        let mut picker = FilePicker::open(&dir.path().join("reports"), false);

        picker.apply(PickerAction::GoToParent, 10);
        assert_eq!(picker.selected().unwrap().name, "reports");
    }

    #[test]
    fn test_cancel_returns_cancelled() {
        let dir = fixture();
        let mut picker = FilePicker::open(dir.path(), false);
        assert_eq!(
            picker.apply(PickerAction::Cancel, 10),
            Some(Selection::Cancelled)
        );
    }

    #[test]
    fn test_missing_directory_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let picker = FilePicker::open(&dir.path().join("gone"), false);
        assert!(picker.error().is_some());
        assert_eq!(names(&picker), vec![".."]);
    }

    #[test]
    fn test_json_extension_check() {
        assert!(is_json_file(Path::new("a/report.json")));
        assert!(is_json_file(Path::new("REPORT.Json")));
        assert!(!is_json_file(Path::new("report.json.bak")));
        assert!(!is_json_file(Path::new("json")));
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            determine_picker_action(key(KeyCode::Esc)),
            Some(PickerAction::Cancel)
        );
        assert_eq!(
            determine_picker_action(key(KeyCode::Enter)),
            Some(PickerAction::Activate)
        );
        assert_eq!(
            determine_picker_action(key(KeyCode::Backspace)),
            Some(PickerAction::GoToParent)
        );
        assert_eq!(determine_picker_action(key(KeyCode::Char('x'))), None);
    }
}
