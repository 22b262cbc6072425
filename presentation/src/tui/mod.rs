//! TUI (Text User Interface) module for legislation
//!
//! Interactive view of the chamber grids with a party editor and a
//! country picker, built on ratatui.

mod app;
mod mode;
mod state;
mod widgets;

pub use app::TuiApp;
pub use mode::{InputMode, KeyAction, handle_key};
pub use state::{PickerState, TextInput, TuiState};
pub use widgets::{
    MainLayout,
    chambers::{ChambersWidget, chamber_lines, seat_color},
    editor::EditorWidget,
    header::HeaderWidget,
    help::HelpWidget,
    picker::CountryPickerWidget,
    status_bar::StatusBarWidget,
};
