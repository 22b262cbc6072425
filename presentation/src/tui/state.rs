//! TUI application state
//!
//! Single source of truth for everything the TUI renders. The chamber
//! layouts are rebuilt from the composition after every edit.

use super::mode::InputMode;
use legislation_application::{BuildChamberLayoutsUseCase, DisplayConfig};
use legislation_domain::{ChamberLayout, Composition, PartyField};
use std::time::{Duration, Instant};

/// Single-line text buffer with a byte cursor on char boundaries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub text: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            let prev_char_len = self.text[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.text.remove(self.cursor - prev_char_len);
            self.cursor -= prev_char_len;
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            let prev_char_len = self.text[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev_char_len;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.text.len() {
            let next_char_len = self.text[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor += next_char_len;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.text.len();
    }
}

/// Country picker overlay state
#[derive(Debug, Clone, Default)]
pub struct PickerState {
    pub query: TextInput,
    /// Index into the filtered list
    pub selected: usize,
    /// Mode to return to when the picker closes
    pub return_mode: InputMode,
}

/// Central TUI state — owned by the TuiApp select! loop
pub struct TuiState {
    // -- Mode --
    pub mode: InputMode,

    // -- Data --
    pub composition: Composition,
    pub layouts: Vec<ChamberLayout>,
    pub display: DisplayConfig,

    // -- Editor --
    pub selected_row: usize,
    pub selected_field: PartyField,
    pub cell_input: TextInput,

    // -- Country picker --
    pub picker: PickerState,

    // -- Visualization --
    pub scroll: usize,

    // -- Overlay --
    pub show_help: bool,
    pub flash_message: Option<(String, Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(composition: Composition, display: DisplayConfig) -> Self {
        let mut state = Self {
            mode: InputMode::default(),
            composition,
            layouts: Vec::new(),
            display,
            selected_row: 0,
            selected_field: PartyField::Chamber,
            cell_input: TextInput::default(),
            picker: PickerState::default(),
            scroll: 0,
            show_help: false,
            flash_message: None,
            should_quit: false,
        };
        state.refresh_layouts();
        state
    }

    /// Whether the party table is on screen (also while typing or picking from it)
    pub fn editor_open(&self) -> bool {
        match self.mode {
            InputMode::Editor | InputMode::Insert => true,
            InputMode::Picker => self.picker.return_mode == InputMode::Editor,
            InputMode::Normal => false,
        }
    }

    /// Rebuild layouts from the current composition and clamp selections.
    pub fn refresh_layouts(&mut self) {
        self.layouts = BuildChamberLayoutsUseCase::new().execute(&self.composition);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.composition.len();
        self.selected_row = self.selected_row.min(len.saturating_sub(1));
        self.scroll = self.scroll.min(self.layouts.len().saturating_sub(1));
    }

    pub fn select_row_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn select_row_down(&mut self) {
        if self.selected_row + 1 < self.composition.len() {
            self.selected_row += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.layouts.len() {
            self.scroll += 1;
        }
    }

    /// Load the selected cell's current value into the input buffer.
    pub fn begin_cell_edit(&mut self) -> bool {
        match self.composition.get(self.selected_row) {
            Some(record) => {
                self.cell_input = TextInput::with_text(self.selected_field.value_of(record));
                self.mode = InputMode::Insert;
                true
            }
            None => false,
        }
    }

    /// Text input targeted by the current mode, if any
    pub fn active_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.mode {
            InputMode::Insert => Some(&mut self.cell_input),
            InputMode::Picker => Some(&mut self.picker.query),
            _ => None,
        }
    }

    pub fn open_picker(&mut self) {
        self.picker = PickerState {
            query: TextInput::default(),
            selected: 0,
            return_mode: self.mode,
        };
        self.mode = InputMode::Picker;
    }

    pub fn close_picker(&mut self) {
        self.mode = self.picker.return_mode;
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() >= max_age
        {
            self.flash_message = None;
        }
    }

    /// Total seats across all chambers
    pub fn total_seats(&self) -> u64 {
        self.layouts.iter().map(|l| u64::from(l.total_members)).sum()
    }
}
