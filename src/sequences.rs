//! VT escape sequences emitted by the controller
//!
//! Everything the controller writes to the terminal lives here: window
//! management sequences, reverse video, and the two 16-color palette tables.
//! The tables are plain data so the code-to-sequence mapping is testable
//! without a terminal.

/// The escape character that introduces every sequence.
pub const ESC: &str = "\x1b";

/// Switch to the alternate screen buffer (DECSET 1049).
pub const ENTER_ALTERNATE_BUFFER: &str = "\x1b[?1049h";

/// Return to the primary screen buffer (DECRST 1049).
pub const LEAVE_ALTERNATE_BUFFER: &str = "\x1b[?1049l";

/// Swap the effective foreground and background colors (SGR 7).
pub const INVERT_VIDEO: &str = "\x1b[7m";

/// Color code meaning "leave this channel unchanged" (no bytes written).
pub const COLOR_UNCHANGED: i32 = -1;

/// Color code meaning "reset this channel to the terminal default".
pub const COLOR_RESET: i32 = 0;

/// Highest valid palette code (bright white).
pub const COLOR_MAX: i32 = 16;

/// Build the XTWINOPS resize request for the given dimensions.
///
/// Values are passed through as-is; the terminal defines the effect of
/// zero or negative dimensions.
pub fn resize_window(width: i32, height: i32) -> String {
    format!("\x1b[8;{width};{height}t")
}

/// Foreground sequences indexed by color code.
///
/// Index 0 is the reset-to-default sequence; 1-8 are the standard colors
/// (black, red, green, yellow, blue, magenta, cyan, white) and 9-16 the
/// bright variants.
const FOREGROUND: [&str; 17] = [
    "\x1b[39m", // 0: reset to default
    "\x1b[30m", // 1: black
    "\x1b[31m", // 2: red
    "\x1b[32m", // 3: green
    "\x1b[33m", // 4: yellow
    "\x1b[34m", // 5: blue
    "\x1b[35m", // 6: magenta
    "\x1b[36m", // 7: cyan
    "\x1b[37m", // 8: white
    "\x1b[90m", // 9: bright black
    "\x1b[91m", // 10: bright red
    "\x1b[92m", // 11: bright green
    "\x1b[93m", // 12: bright yellow
    "\x1b[94m", // 13: bright blue
    "\x1b[95m", // 14: bright magenta
    "\x1b[96m", // 15: bright cyan
    "\x1b[97m", // 16: bright white
];

/// Background sequences indexed by color code, same layout as [`FOREGROUND`].
const BACKGROUND: [&str; 17] = [
    "\x1b[49m",  // 0: reset to default
    "\x1b[40m",  // 1: black
    "\x1b[41m",  // 2: red
    "\x1b[42m",  // 3: green
    "\x1b[43m",  // 4: yellow
    "\x1b[44m",  // 5: blue
    "\x1b[45m",  // 6: magenta
    "\x1b[46m",  // 7: cyan
    "\x1b[47m",  // 8: white
    "\x1b[100m", // 9: bright black
    "\x1b[101m", // 10: bright red
    "\x1b[102m", // 11: bright green
    "\x1b[103m", // 12: bright yellow
    "\x1b[104m", // 13: bright blue
    "\x1b[105m", // 14: bright magenta
    "\x1b[106m", // 15: bright cyan
    "\x1b[107m", // 16: bright white
];

/// Look up the foreground sequence for a color code.
///
/// Returns an empty string for [`COLOR_UNCHANGED`] (nothing to write) and
/// `None` for codes outside `{-1, 0, 1..16}`.
pub fn foreground_sequence(code: i32) -> Option<&'static str> {
    match code {
        COLOR_UNCHANGED => Some(""),
        0..=COLOR_MAX => Some(FOREGROUND[code as usize]),
        _ => None,
    }
}

/// Look up the background sequence for a color code.
///
/// Same semantics as [`foreground_sequence`] with the background table.
pub fn background_sequence(code: i32) -> Option<&'static str> {
    match code {
        COLOR_UNCHANGED => Some(""),
        0..=COLOR_MAX => Some(BACKGROUND[code as usize]),
        _ => None,
    }
}
