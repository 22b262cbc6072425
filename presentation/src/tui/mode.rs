//! TUI mode system (vim-like mode switching)
//!
//! Defines the mode-based interaction model:
//! - Normal mode: look at the chamber grids
//! - Editor mode: move around the party table
//! - Insert mode: type a new value for one cell
//! - Picker mode: filter and choose a country

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input mode (vim-like)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Viewing the visualization
    #[default]
    Normal,
    /// Party table open, navigating cells
    Editor,
    /// Typing into the selected cell
    Insert,
    /// Country picker open
    Picker,
}

impl InputMode {
    /// Get the mode indicator string for status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "VIEW",
            Self::Editor => "EDIT",
            Self::Insert => "INSERT",
            Self::Picker => "COUNTRY",
        }
    }

    /// Get the mode color for status line
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Normal => Color::Blue,
            Self::Editor => Color::Yellow,
            Self::Insert => Color::Green,
            Self::Picker => Color::Magenta,
        }
    }

    /// Key hints shown in the status bar
    pub fn hints(&self) -> &'static str {
        match self {
            Self::Normal => "e:edit  c:country  j/k:scroll  ?:help  q:quit",
            Self::Editor => "j/k:row  h/l:column  Enter:edit  a:add  d:remove  Esc:close",
            Self::Insert => "Enter:apply  Esc:cancel",
            Self::Picker => "type:filter  ↑/↓:select  Enter:choose  Esc:cancel",
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Open the party editor
    OpenEditor,
    /// Close the party editor
    CloseEditor,
    /// Open the country picker
    OpenPicker,
    /// Scroll the chamber list
    ScrollUp,
    ScrollDown,
    /// Move the editor selection
    RowUp,
    RowDown,
    FieldLeft,
    FieldRight,
    /// Start editing the selected cell
    BeginEdit,
    /// Append a blank party
    AddParty,
    /// Remove the selected party
    RemoveParty,
    /// Commit the current input (cell value or picked country)
    Submit,
    /// Abandon the current input
    Cancel,
    InsertChar(char),
    DeleteChar,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
    ToggleHelp,
    Quit,
    None,
}

/// Map a key event to an action for the given mode
pub fn handle_key(mode: InputMode, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    match mode {
        InputMode::Normal => handle_normal(key),
        InputMode::Editor => handle_editor(key),
        InputMode::Insert => handle_text(key, false),
        InputMode::Picker => handle_text(key, true),
    }
}

fn handle_normal(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('e') => KeyAction::OpenEditor,
        KeyCode::Char('c') => KeyAction::OpenPicker,
        KeyCode::Char('k') | KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::Char('j') | KeyCode::Down => KeyAction::ScrollDown,
        KeyCode::Char('?') => KeyAction::ToggleHelp,
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Esc => KeyAction::Cancel,
        _ => KeyAction::None,
    }
}

fn handle_editor(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => KeyAction::RowUp,
        KeyCode::Char('j') | KeyCode::Down => KeyAction::RowDown,
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => KeyAction::FieldLeft,
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => KeyAction::FieldRight,
        KeyCode::Enter | KeyCode::Char('i') => KeyAction::BeginEdit,
        KeyCode::Char('a') => KeyAction::AddParty,
        KeyCode::Char('d') | KeyCode::Delete => KeyAction::RemoveParty,
        KeyCode::Char('c') => KeyAction::OpenPicker,
        KeyCode::Char('?') => KeyAction::ToggleHelp,
        KeyCode::Esc | KeyCode::Char('e') => KeyAction::CloseEditor,
        KeyCode::Char('q') => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

fn handle_text(key: KeyEvent, list_navigation: bool) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::Cancel,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Up if list_navigation => KeyAction::RowUp,
        KeyCode::Down if list_navigation => KeyAction::RowDown,
        KeyCode::Char(c) => KeyAction::InsertChar(c),
        KeyCode::Backspace => KeyAction::DeleteChar,
        KeyCode::Left => KeyAction::CursorLeft,
        KeyCode::Right => KeyAction::CursorRight,
        KeyCode::Home => KeyAction::CursorStart,
        KeyCode::End => KeyAction::CursorEnd,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_mode_default() {
        assert_eq!(InputMode::default(), InputMode::Normal);
    }

    #[test]
    fn test_mode_indicator() {
        assert_eq!(InputMode::Normal.indicator(), "VIEW");
        assert_eq!(InputMode::Editor.indicator(), "EDIT");
        assert_eq!(InputMode::Insert.indicator(), "INSERT");
        assert_eq!(InputMode::Picker.indicator(), "COUNTRY");
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [
            InputMode::Normal,
            InputMode::Editor,
            InputMode::Insert,
            InputMode::Picker,
        ] {
            assert_eq!(handle_key(mode, ctrl_c), KeyAction::Quit);
        }
    }

    #[test]
    fn test_normal_mode_key_handling() {
        assert_eq!(handle_key(InputMode::Normal, key(KeyCode::Char('e'))), KeyAction::OpenEditor);
        assert_eq!(handle_key(InputMode::Normal, key(KeyCode::Char('c'))), KeyAction::OpenPicker);
        assert_eq!(handle_key(InputMode::Normal, key(KeyCode::Down)), KeyAction::ScrollDown);
        assert_eq!(handle_key(InputMode::Normal, key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handle_key(InputMode::Normal, key(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn test_editor_mode_key_handling() {
        assert_eq!(handle_key(InputMode::Editor, key(KeyCode::Char('j'))), KeyAction::RowDown);
        assert_eq!(handle_key(InputMode::Editor, key(KeyCode::Tab)), KeyAction::FieldRight);
        assert_eq!(handle_key(InputMode::Editor, key(KeyCode::Enter)), KeyAction::BeginEdit);
        assert_eq!(handle_key(InputMode::Editor, key(KeyCode::Char('a'))), KeyAction::AddParty);
        assert_eq!(handle_key(InputMode::Editor, key(KeyCode::Char('d'))), KeyAction::RemoveParty);
        assert_eq!(handle_key(InputMode::Editor, key(KeyCode::Esc)), KeyAction::CloseEditor);
    }

    #[test]
    fn test_insert_mode_takes_all_chars() {
        // Letters that are commands elsewhere are plain input here
        for c in ['q', 'j', 'e', 'd', '#'] {
            assert_eq!(
                handle_key(InputMode::Insert, key(KeyCode::Char(c))),
                KeyAction::InsertChar(c)
            );
        }
        assert_eq!(handle_key(InputMode::Insert, key(KeyCode::Up)), KeyAction::None);
    }

    #[test]
    fn test_picker_navigates_with_arrows() {
        assert_eq!(handle_key(InputMode::Picker, key(KeyCode::Down)), KeyAction::RowDown);
        assert_eq!(handle_key(InputMode::Picker, key(KeyCode::Up)), KeyAction::RowUp);
        assert_eq!(
            handle_key(InputMode::Picker, key(KeyCode::Char('j'))),
            KeyAction::InsertChar('j')
        );
    }
}
