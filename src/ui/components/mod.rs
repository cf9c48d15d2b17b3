// UI Components
pub mod command_bar;
pub mod dialog;
pub mod dropdown;
pub mod warning;

// Re-export components for convenience
pub use command_bar::{CommandBar, CommandItem};
pub use dialog::{
    Dialog, DialogKind, DialogResult, DialogTone, KeyboardType, DEFAULT_EXIT_MESSAGE,
    DEFAULT_EXIT_TITLE, INPUT_ERROR_MESSAGE,
};
pub use dropdown::{Dropdown, DropdownState};
pub use warning::WarningScreen;
