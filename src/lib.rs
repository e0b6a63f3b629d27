//! VT Console Control Library
//!
//! Helpers for manipulating a terminal window through ANSI/VT escape
//! sequences: enabling virtual-terminal processing on the console, resizing
//! the window, switching to and from the alternate screen buffer, setting
//! colors from the 16-color palette, and inverting colors.
//!
//! - `console`: console mode access behind a mockable trait
//! - `sequences`: the escape sequences and color tables
//! - `controller`: the [`TerminalController`] tying them together

pub mod console;
pub mod controller;
pub mod sequences;

pub use console::{Console, ConsoleError, ConsoleHandle, ConsoleMode, HandleRole};
pub use controller::{ClearScreen, SystemClear, TerminalController};

#[cfg(unix)]
pub use console::UnixConsole;
