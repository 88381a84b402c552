//! filmdb menu: the interactive console shell.

pub mod choice;
pub mod menu;
pub mod report;

pub use choice::{ChoiceError, MenuChoice};
pub use menu::{Menu, MenuState};

