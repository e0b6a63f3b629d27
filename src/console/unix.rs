//! Unix console backend
//!
//! Implements [`Console`] over the process's standard stream file
//! descriptors using POSIX termios. Unix terminals interpret VT sequences
//! natively, so the VT flags are reported as always set and only the
//! newline-translation flag maps to a real attribute (ONLCR).

use std::os::fd::BorrowedFd;

use nix::sys::termios::{tcgetattr, tcsetattr, OutputFlags, SetArg};
use nix::unistd::isatty;

use super::{Console, ConsoleError, ConsoleHandle, ConsoleMode, ConsoleResult, HandleRole};

/// Console backend over the process's standard streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixConsole;

impl UnixConsole {
    /// Create a backend for the current process's terminal.
    pub fn new() -> Self {
        Self
    }
}

impl Console for UnixConsole {
    fn handle(&self, role: HandleRole) -> ConsoleResult<ConsoleHandle> {
        let fd = match role {
            HandleRole::Input => 0,
            HandleRole::Output => 1,
        };
        // A redirected stream has no console behind it.
        match isatty(fd) {
            Ok(true) => Ok(ConsoleHandle { fd, role }),
            Ok(false) | Err(_) => Err(ConsoleError::HandleUnavailable(role)),
        }
    }

    fn mode(&self, handle: ConsoleHandle) -> ConsoleResult<ConsoleMode> {
        // SAFETY: handles come from `handle()` and refer to the process's
        // standard streams, which outlive this call.
        let fd = unsafe { BorrowedFd::borrow_raw(handle.fd) };
        let termios = tcgetattr(fd).map_err(ConsoleError::ModeQuery)?;

        let mut mode = match handle.role {
            HandleRole::Input => ConsoleMode::VT_INPUT,
            HandleRole::Output => ConsoleMode::VT_PROCESSING,
        };
        if handle.role == HandleRole::Output
            && !termios.output_flags.contains(OutputFlags::ONLCR)
        {
            mode |= ConsoleMode::DISABLE_NEWLINE_AUTO_RETURN;
        }
        Ok(mode)
    }

    fn set_mode(&mut self, handle: ConsoleHandle, mode: ConsoleMode) -> ConsoleResult<()> {
        // VT input is native; there is nothing to change on the input stream.
        if handle.role == HandleRole::Input {
            return Ok(());
        }

        // SAFETY: as in `mode()`, the fd refers to a standard stream.
        let fd = unsafe { BorrowedFd::borrow_raw(handle.fd) };
        let mut termios = tcgetattr(fd).map_err(ConsoleError::ModeQuery)?;

        let translate_newlines = !mode.contains(ConsoleMode::DISABLE_NEWLINE_AUTO_RETURN);
        if termios.output_flags.contains(OutputFlags::ONLCR) == translate_newlines {
            return Ok(());
        }
        termios
            .output_flags
            .set(OutputFlags::ONLCR, translate_newlines);
        tcsetattr(fd, SetArg::TCSANOW, &termios).map_err(ConsoleError::ModeSet)
    }
}
