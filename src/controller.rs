//! Terminal window controller
//!
//! [`TerminalController`] owns a console backend, a byte sink, and the
//! alternate-buffer flag, and exposes the five window operations: enabling
//! VT processing, resizing, toggling the alternate screen buffer, setting
//! palette colors, and inverting colors.
//!
//! The fallible operations return booleans rather than errors; callers that
//! care (for example to skip escape output on a console that cannot
//! interpret it) check the result of [`enable_virtual_terminal`] first.
//!
//! [`enable_virtual_terminal`]: TerminalController::enable_virtual_terminal

use std::io::Write;

use tracing::debug;

use crate::console::{Console, ConsoleMode, HandleRole};
use crate::sequences;

/// Blocking screen-clear hook invoked by the buffer toggle.
pub trait ClearScreen {
    /// Clear the screen; returns once the clear has completed.
    fn clear(&mut self);
}

/// Clears the screen by running the external `clear` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClear;

impl ClearScreen for SystemClear {
    fn clear(&mut self) {
        match std::process::Command::new("clear").status() {
            Ok(status) if !status.success() => {
                debug!("clear command exited with {status}");
            },
            Err(e) => debug!("failed to run clear command: {e}"),
            Ok(_) => {},
        }
    }
}

/// Controls a terminal window through VT escape sequences.
///
/// The controller tracks only one piece of state, which screen buffer is
/// active; everything else (colors, window size, mode bits) lives in the
/// terminal itself. A controller starts on the primary buffer.
pub struct TerminalController<C, W> {
    console: C,
    sink: W,
    clear: Box<dyn ClearScreen>,
    alternate_active: bool,
}

impl<C: Console, W: Write> TerminalController<C, W> {
    /// Create a controller writing to `sink`, clearing via the system
    /// `clear` command.
    pub fn new(console: C, sink: W) -> Self {
        Self::with_clear(console, sink, Box::new(SystemClear))
    }

    /// Create a controller with a custom screen-clear hook.
    pub fn with_clear(console: C, sink: W, clear: Box<dyn ClearScreen>) -> Self {
        Self {
            console,
            sink,
            clear,
            alternate_active: false,
        }
    }

    /// The console backend.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// True if the alternate screen buffer is currently active.
    pub fn alternate_active(&self) -> bool {
        self.alternate_active
    }

    /// Enable VT sequence interpretation on the console.
    ///
    /// Acquires the output and input handles, then ORs the VT capabilities
    /// into each stream's current mode. If the output mode cannot be set
    /// together with newline-translation suppression, steps down to
    /// requesting sequence interpretation alone. Returns false if any
    /// remaining step fails; the output mode may already have been set when
    /// the input step fails.
    ///
    /// Original modes are not saved, so the change lasts until the terminal
    /// is reset externally.
    pub fn enable_virtual_terminal(&mut self) -> bool {
        let out = match self.console.handle(HandleRole::Output) {
            Ok(handle) => handle,
            Err(e) => {
                debug!("cannot enable VT processing: {e}");
                return false;
            },
        };
        let input = match self.console.handle(HandleRole::Input) {
            Ok(handle) => handle,
            Err(e) => {
                debug!("cannot enable VT processing: {e}");
                return false;
            },
        };

        let out_mode = match self.console.mode(out) {
            Ok(mode) => mode,
            Err(e) => {
                debug!("cannot read output mode: {e}");
                return false;
            },
        };
        let in_mode = match self.console.mode(input) {
            Ok(mode) => mode,
            Err(e) => {
                debug!("cannot read input mode: {e}");
                return false;
            },
        };

        let requested =
            ConsoleMode::VT_PROCESSING | ConsoleMode::DISABLE_NEWLINE_AUTO_RETURN;
        if self.console.set_mode(out, out_mode | requested).is_err() {
            // Step down: keep sequence interpretation, drop the newline
            // suppression request.
            if let Err(e) = self
                .console
                .set_mode(out, out_mode | ConsoleMode::VT_PROCESSING)
            {
                debug!("cannot set output mode: {e}");
                return false;
            }
        }

        if let Err(e) = self
            .console
            .set_mode(input, in_mode | ConsoleMode::VT_INPUT)
        {
            debug!("cannot set input mode: {e}");
            return false;
        }
        true
    }

    /// Request that the terminal resize its window and buffer.
    ///
    /// Dimensions are in character cells and passed through unvalidated;
    /// the terminal applies the change asynchronously.
    pub fn resize(&mut self, width: i32, height: i32) {
        let sequence = sequences::resize_window(width, height);
        self.emit(&sequence);
    }

    /// Switch between the primary and alternate screen buffers.
    ///
    /// With `clear` set, the clear hook runs to completion before the
    /// switch sequence is written. Returns the new state, true when the
    /// alternate buffer is now active.
    pub fn toggle_screen_buffer(&mut self, clear: bool) -> bool {
        if clear {
            self.clear.clear();
        }
        if self.alternate_active {
            self.emit(sequences::LEAVE_ALTERNATE_BUFFER);
            self.alternate_active = false;
        } else {
            self.emit(sequences::ENTER_ALTERNATE_BUFFER);
            self.alternate_active = true;
        }
        self.alternate_active
    }

    /// Set the foreground and background colors from the 16-color palette.
    ///
    /// Each code is `-1` (leave unchanged, nothing written), `0` (reset to
    /// default), or `1..=16` (palette entry). The foreground sequence is
    /// written before the background sequence; an invalid foreground fails
    /// before any bytes are written, an invalid background fails after the
    /// foreground bytes went out.
    pub fn set_colors(&mut self, foreground: i32, background: i32) -> bool {
        let Some(fg) = sequences::foreground_sequence(foreground) else {
            debug!("invalid foreground color code {foreground}");
            return false;
        };
        if !fg.is_empty() {
            self.emit(fg);
        }

        let Some(bg) = sequences::background_sequence(background) else {
            debug!("invalid background color code {background}");
            return false;
        };
        if !bg.is_empty() {
            self.emit(bg);
        }
        true
    }

    /// Swap the terminal's effective foreground and background colors.
    ///
    /// Stays in effect until inverted again or reset by the terminal; no
    /// state is tracked here.
    pub fn invert_colors(&mut self) {
        self.emit(sequences::INVERT_VIDEO);
    }

    /// Write a sequence to the sink, logging rather than propagating
    /// failures; a dead sink degrades to a no-op controller.
    fn emit(&mut self, sequence: &str) {
        if let Err(e) = self.sink.write_all(sequence.as_bytes()) {
            debug!("failed to write escape sequence: {e}");
            return;
        }
        if let Err(e) = self.sink.flush() {
            debug!("failed to flush escape sequence: {e}");
        }
    }
}
