//! TUI application — terminal setup, event loop and action dispatch
//!
//! The app owns the [`TuiState`]. Key events become [`KeyAction`]s, which
//! either move the selection or go through [`EditCompositionUseCase`]
//! before the layouts are rebuilt.

use super::mode::{self, InputMode, KeyAction};
use super::state::TuiState;
use super::widgets::{
    MainLayout, chambers::ChambersWidget, editor::EditorWidget, header::HeaderWidget,
    help::HelpWidget, picker::CountryPickerWidget, status_bar::StatusBarWidget,
};
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use legislation_application::{
    CountryCatalog, DisplayConfig, EditCommand, EditCompositionUseCase, EditOutcome,
};
use legislation_domain::{Composition, PartyField};
use ratatui::{Terminal, backend::CrosstermBackend, widgets::Clear};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const TICK: Duration = Duration::from_millis(250);
const FLASH_TTL: Duration = Duration::from_secs(5);

/// Interactive seat-grid editor
pub struct TuiApp<C: CountryCatalog + 'static> {
    catalog: Arc<C>,
    editor: EditCompositionUseCase<C>,
    state: TuiState,
}

impl<C: CountryCatalog + 'static> TuiApp<C> {
    pub fn new(catalog: Arc<C>, composition: Composition, display: DisplayConfig) -> Self {
        Self {
            editor: EditCompositionUseCase::new(catalog.clone()),
            catalog,
            state: TuiState::new(composition, display),
        }
    }

    pub fn state(&self) -> &TuiState {
        &self.state
    }

    /// Consume the app, keeping the edited composition
    pub fn into_composition(self) -> Composition {
        self.state.composition
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(TICK);

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(term_event);
                }

                // Tick for flash expiry
                _ = tick.tick() => {
                    self.state.expire_flash(FLASH_TTL);
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Render all widgets
    fn render(&self, frame: &mut ratatui::Frame) {
        let state = &self.state;
        let layout = MainLayout::compute(frame.area(), state.editor_open());

        frame.render_widget(HeaderWidget::new(state), layout.header);
        frame.render_widget(ChambersWidget::new(state), layout.chambers);
        if let Some(editor_area) = layout.editor {
            frame.render_widget(EditorWidget::new(state), editor_area);
        }
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

        if state.mode == InputMode::Picker {
            let matches = self.catalog.search(&state.picker.query.text);
            let area = MainLayout::centered_overlay(50, 60, frame.area());
            frame.render_widget(Clear, area);
            frame.render_widget(CountryPickerWidget::new(state, &matches), area);
        }

        if state.show_help {
            let area = MainLayout::centered_overlay(60, 70, frame.area());
            frame.render_widget(Clear, area);
            frame.render_widget(HelpWidget::new(), area);
        }
    }

    fn handle_terminal_event(&mut self, event: Event) {
        // Terminal auto-resizes on next draw
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            self.handle_key(key);
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // If help is showing, Esc or ? closes it
        if self.state.show_help && matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            self.state.show_help = false;
            return;
        }

        let action = mode::handle_key(self.state.mode, key);
        self.handle_action(action);
    }

    /// Handle a semantic key action
    pub fn handle_action(&mut self, action: KeyAction) {
        let state = &mut self.state;
        match action {
            KeyAction::None => {}

            // Mode transitions
            KeyAction::OpenEditor => state.mode = InputMode::Editor,
            KeyAction::CloseEditor => state.mode = InputMode::Normal,
            KeyAction::OpenPicker => state.open_picker(),

            // Navigation
            KeyAction::ScrollUp => state.scroll_up(),
            KeyAction::ScrollDown => state.scroll_down(),
            KeyAction::RowUp => match state.mode {
                InputMode::Picker => {
                    state.picker.selected = state.picker.selected.saturating_sub(1);
                }
                _ => state.select_row_up(),
            },
            KeyAction::RowDown => match state.mode {
                InputMode::Picker => {
                    let count = self.catalog.search(&state.picker.query.text).len();
                    if state.picker.selected + 1 < count {
                        state.picker.selected += 1;
                    }
                }
                _ => state.select_row_down(),
            },
            KeyAction::FieldLeft => state.selected_field = state.selected_field.prev(),
            KeyAction::FieldRight => state.selected_field = state.selected_field.next(),

            // Editing
            KeyAction::BeginEdit => {
                if !state.begin_cell_edit() {
                    state.set_flash("No party selected. Press a to add one.");
                }
            }
            KeyAction::AddParty => {
                self.apply(EditCommand::AddParty);
            }
            KeyAction::RemoveParty => {
                if state.composition.is_empty() {
                    state.set_flash("Nothing to remove");
                } else {
                    let index = state.selected_row;
                    self.apply(EditCommand::RemoveParty(index));
                }
            }
            KeyAction::Submit => self.submit(),
            KeyAction::Cancel => match state.mode {
                InputMode::Insert => state.mode = InputMode::Editor,
                InputMode::Picker => state.close_picker(),
                _ => state.show_help = false,
            },

            // Text input
            KeyAction::InsertChar(c) => {
                if let Some(input) = state.active_input_mut() {
                    input.insert_char(c);
                }
                if state.mode == InputMode::Picker {
                    state.picker.selected = 0;
                }
            }
            KeyAction::DeleteChar => {
                if let Some(input) = state.active_input_mut() {
                    input.delete_char();
                }
                if state.mode == InputMode::Picker {
                    state.picker.selected = 0;
                }
            }
            KeyAction::CursorLeft => {
                if let Some(input) = state.active_input_mut() {
                    input.cursor_left();
                }
            }
            KeyAction::CursorRight => {
                if let Some(input) = state.active_input_mut() {
                    input.cursor_right();
                }
            }
            KeyAction::CursorStart => {
                if let Some(input) = state.active_input_mut() {
                    input.cursor_home();
                }
            }
            KeyAction::CursorEnd => {
                if let Some(input) = state.active_input_mut() {
                    input.cursor_end();
                }
            }

            // Application
            KeyAction::ToggleHelp => state.show_help = !state.show_help,
            KeyAction::Quit => state.should_quit = true,
        }
    }

    /// Commit the cell buffer or the picked country
    fn submit(&mut self) {
        match self.state.mode {
            InputMode::Insert => {
                let command = EditCommand::UpdateRaw {
                    index: self.state.selected_row,
                    field: self.state.selected_field,
                    value: self.state.cell_input.text.clone(),
                };
                if self.apply(command) {
                    self.state.mode = InputMode::Editor;
                }
            }
            InputMode::Picker => {
                let picked = self
                    .catalog
                    .search(&self.state.picker.query.text)
                    .get(self.state.picker.selected)
                    .map(|name| name.to_string());
                match picked {
                    Some(name) => {
                        if self.apply(EditCommand::SetCountry(Some(name))) {
                            self.state.close_picker();
                        }
                    }
                    None => self.state.set_flash("No matching country"),
                }
            }
            _ => {}
        }
    }

    /// Run an edit through the use case; returns whether it was applied
    fn apply(&mut self, command: EditCommand) -> bool {
        let state = &mut self.state;
        match self.editor.execute(&mut state.composition, command) {
            Ok(outcome) => {
                debug!(?outcome, "Edit applied");
                match outcome {
                    EditOutcome::Added(index) => {
                        state.selected_row = index;
                        state.selected_field = PartyField::Chamber;
                        state.set_flash("Added party row");
                    }
                    EditOutcome::Removed(record) => {
                        state.set_flash(format!("Removed {} ({})", record.party, record.chamber));
                    }
                    EditOutcome::Updated(_) => {}
                    EditOutcome::CountryChanged(country) => {
                        state.set_flash(match country {
                            Some(name) => format!("Country: {name}"),
                            None => "Country cleared".to_string(),
                        });
                    }
                }
                state.refresh_layouts();
                true
            }
            Err(e) => {
                warn!(error = %e, "Edit rejected");
                state.set_flash(e.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use legislation_application::InMemoryCountryCatalog;

    fn app() -> TuiApp<InMemoryCountryCatalog> {
        let catalog = InMemoryCountryCatalog::new(["France", "United Kingdom", "United States"]);
        TuiApp::new(
            Arc::new(catalog),
            Composition::united_states(),
            DisplayConfig::default(),
        )
    }

    fn press(app: &mut TuiApp<InMemoryCountryCatalog>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut TuiApp<InMemoryCountryCatalog>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_edit_members_rebuilds_layout() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.state().selected_field, PartyField::Members);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().mode, InputMode::Insert);
        for _ in 0..3 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "220");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state().mode, InputMode::Editor);
        assert_eq!(app.state().layouts[0].total_members, 437);
        assert_eq!(app.state().layouts[0].majority_threshold, 218);
    }

    #[test]
    fn test_invalid_members_keep_composition() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        app.state.selected_field = PartyField::Members;
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, ".5");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state().mode, InputMode::Insert);
        assert!(app.state().flash_message.is_some());
        assert_eq!(app.state().composition, Composition::united_states());
    }

    #[test]
    fn test_cancel_discards_buffer() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "zzz");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state().mode, InputMode::Editor);
        assert_eq!(app.state().composition, Composition::united_states());
    }

    #[test]
    fn test_add_and_remove_party() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.state().composition.len(), 6);
        assert_eq!(app.state().selected_row, 5);
        // Blank row forms its own empty chamber
        assert_eq!(app.state().layouts.len(), 3);
        assert!(app.state().layouts[2].is_empty());

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.state().composition.len(), 5);
        assert_eq!(app.state().selected_row, 4);
        assert_eq!(app.state().layouts.len(), 2);
    }

    #[test]
    fn test_remove_on_empty_composition() {
        let mut app = TuiApp::new(
            Arc::new(InMemoryCountryCatalog::default()),
            Composition::default(),
            DisplayConfig::default(),
        );
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('d'));
        assert!(app.state().flash_message.is_some());
        assert!(app.state().composition.is_empty());
    }

    #[test]
    fn test_pick_country() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.state().mode, InputMode::Picker);
        type_text(&mut app, "united");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state().picker.selected, 1);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state().mode, InputMode::Normal);
        assert_eq!(
            app.state().composition.country.as_deref(),
            Some("United Kingdom")
        );
    }

    #[test]
    fn test_picker_without_match() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "atlantis");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().mode, InputMode::Picker);
        assert_eq!(
            app.state().composition.country.as_deref(),
            Some("United States")
        );
    }

    #[test]
    fn test_help_toggle() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.state().show_help);
        press(&mut app, KeyCode::Esc);
        assert!(!app.state().show_help);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.state().should_quit);
    }

    #[test]
    fn test_into_composition() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.into_composition().len(), 4);
    }
}
