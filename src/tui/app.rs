//! Application state for the coverage viewer.

use super::list_state::ScrollState;
use super::picker::{FilePicker, Selection};
use crate::display::{render, DisplayState, DisplayTree, StateStore};
use crate::loader::Loader;
use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

/// View mode for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Button, summary and grouped list
    Main,
    /// File selection dialog
    Picker,
    /// Help overlay
    Help,
}

/// Where the file picker starts and what it lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    pub start_dir: PathBuf,
    pub show_hidden: bool,
}

/// Main application state
pub struct ViewerApp {
    store: StateStore,
    loader: Loader,
    /// Display tree of the current state, rebuilt on every transition
    tree: DisplayTree,
    /// Set by the store listener when the state changed
    changed: Rc<Cell<bool>>,
    view_mode: ViewMode,
    picker: Option<FilePicker>,
    picker_options: PickerOptions,
    /// Directory of the last chosen file; the picker reopens there
    last_dir: Option<PathBuf>,
    scroll: ScrollState,
    list_len: usize,
    list_viewport: usize,
    picker_viewport: usize,
}

impl ViewerApp {
    pub fn new(picker_options: PickerOptions) -> Self {
        let mut store = StateStore::new();
        let changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&changed);
        store.subscribe(move |_| flag.set(true));

        let tree = render(store.state());

        Self {
            store,
            loader: Loader::new(),
            tree,
            changed,
            view_mode: ViewMode::Main,
            picker: None,
            picker_options,
            last_dir: None,
            scroll: ScrollState::new(),
            list_len: 0,
            list_viewport: 0,
            picker_viewport: 0,
        }
    }

    pub fn state(&self) -> &DisplayState {
        self.store.state()
    }

    pub fn tree(&self) -> &DisplayTree {
        &self.tree
    }

    pub fn has_report(&self) -> bool {
        !self.store.state().is_empty()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn picker(&self) -> Option<&FilePicker> {
        self.picker.as_ref()
    }

    pub fn picker_mut(&mut self) -> Option<&mut FilePicker> {
        self.picker.as_mut()
    }

    /// Files whose load has not completed yet
    pub fn loading(&self) -> impl Iterator<Item = &Path> {
        self.loader.pending()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset()
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }

    pub fn list_len(&self) -> usize {
        self.list_len
    }

    pub fn list_viewport(&self) -> usize {
        self.list_viewport
    }

    /// Record the coverage list geometry from the last draw.
    pub fn set_list_geometry(&mut self, len: usize, viewport: usize) {
        self.list_len = len;
        self.list_viewport = viewport;
        self.scroll.clamp(len, viewport);
    }

    pub fn picker_viewport(&self) -> usize {
        self.picker_viewport
    }

    pub fn set_picker_viewport(&mut self, viewport: usize) {
        self.picker_viewport = viewport;
    }

    /// Open the file picker.
    pub fn request_load(&mut self) {
        let dir = self
            .last_dir
            .as_deref()
            .unwrap_or(self.picker_options.start_dir.as_path());
        self.picker = Some(FilePicker::open(dir, self.picker_options.show_hidden));
        self.view_mode = ViewMode::Picker;
    }

    /// Close the picker and start loading the chosen file, if any.
    pub fn finish_selection(&mut self, selection: Selection) {
        if let Some(picker) = self.picker.take() {
            self.picker_options.show_hidden = picker.show_hidden();
        }
        self.view_mode = ViewMode::Main;

        match selection {
            Selection::Chosen(path) => self.start_load(path),
            Selection::Cancelled => log::debug!("File selection cancelled"),
        }
    }

    /// Read and decode `path` in the background.
    pub fn start_load(&mut self, path: PathBuf) {
        self.last_dir = path.parent().map(Path::to_path_buf);
        if let Err(e) = self.loader.request(path.clone()) {
            log::error!("Could not start loading {}: {}", path.display(), e);
        }
    }

    /// Apply finished loads. Returns true when the displayed state changed.
    pub fn tick(&mut self) -> bool {
        self.loader.drain(&mut self.store);
        self.refresh_tree()
    }

    /// Block up to `timeout` for one load to finish, then apply it.
    pub fn block_on_load(&mut self, timeout: Duration) -> bool {
        let arrived = self.loader.wait(&mut self.store, timeout);
        self.refresh_tree();
        arrived
    }

    fn refresh_tree(&mut self) -> bool {
        if !self.changed.replace(false) {
            return false;
        }
        self.tree = render(self.store.state());
        self.scroll.scroll_to_top();
        true
    }
}
