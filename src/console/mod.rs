//! Console mode access
//!
//! The controller never touches the console driver directly; it goes through
//! the [`Console`] trait so tests can substitute a mock and exercise the
//! failure paths (invalid handle, failed query, failed or degraded set).

#[cfg(unix)]
mod unix;

#[cfg(unix)]
pub use unix::UnixConsole;

use std::ops::{BitOr, BitOrAssign};

/// Which standard stream a console handle refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleRole {
    /// The process's standard input stream.
    Input,
    /// The process's standard output stream.
    Output,
}

/// A console handle resolved from a stream role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleHandle {
    /// Underlying descriptor (a file descriptor on Unix).
    pub fd: i32,
    /// The stream role this handle was resolved for.
    pub role: HandleRole,
}

/// Console mode bitmask.
///
/// The flag values mirror the console host's documented mode bits so a mask
/// read from the driver can be OR-ed with the requested capabilities and
/// written back unchanged otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleMode(pub u32);

impl ConsoleMode {
    /// Interpret VT escape sequences written to the output stream.
    pub const VT_PROCESSING: ConsoleMode = ConsoleMode(0x0004);

    /// Suppress the automatic carriage-return on line feed.
    pub const DISABLE_NEWLINE_AUTO_RETURN: ConsoleMode = ConsoleMode(0x0008);

    /// Accept VT sequences on the input stream.
    pub const VT_INPUT: ConsoleMode = ConsoleMode(0x0200);

    /// True if every flag in `other` is set in `self`.
    pub fn contains(self, other: ConsoleMode) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if no flags are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ConsoleMode {
    type Output = ConsoleMode;

    fn bitor(self, rhs: ConsoleMode) -> ConsoleMode {
        ConsoleMode(self.0 | rhs.0)
    }
}

impl BitOrAssign for ConsoleMode {
    fn bitor_assign(&mut self, rhs: ConsoleMode) {
        self.0 |= rhs.0;
    }
}

/// Error type for console mode operations
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("no console handle available for the {0:?} stream")]
    HandleUnavailable(HandleRole),

    #[error("failed to query console mode: {0}")]
    ModeQuery(#[source] nix::Error),

    #[error("failed to set console mode: {0}")]
    ModeSet(#[source] nix::Error),
}

/// Result type for console mode operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Access to the console driver's per-stream mode bits.
pub trait Console {
    /// Resolve a handle for the given standard stream role.
    fn handle(&self, role: HandleRole) -> ConsoleResult<ConsoleHandle>;

    /// Read the current mode bits for a handle.
    fn mode(&self, handle: ConsoleHandle) -> ConsoleResult<ConsoleMode>;

    /// Write new mode bits for a handle.
    fn set_mode(&mut self, handle: ConsoleHandle, mode: ConsoleMode) -> ConsoleResult<()>;
}
