//! VT Console Demo
//!
//! Exercises the controller surface against the real terminal: enables VT
//! processing, optionally resizes the window, prints the 16-color palette,
//! and demonstrates inverted video and the alternate screen buffer.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use vt_console::{sequences, TerminalController, UnixConsole};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut resize_to: Option<(i32, i32)> = None;
    let mut show_alternate = false;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--size" => {
                i += 1;
                if i + 1 < args.len() {
                    let width = args[i].parse().unwrap_or(80);
                    let height = args[i + 1].parse().unwrap_or(24);
                    resize_to = Some((width, height));
                    i += 1;
                }
            },
            "-a" | "--alternate" => {
                show_alternate = true;
            },
            "-h" | "--help" => {
                show_help = true;
            },
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                show_help = true;
            },
        }
        i += 1;
    }

    if show_help {
        print_help(&args[0]);
        return ExitCode::SUCCESS;
    }

    let mut controller = TerminalController::new(UnixConsole::new(), io::stdout());

    if !controller.enable_virtual_terminal() {
        // Without VT interpretation the sequences below would print as
        // garbage, so stop here.
        eprintln!("could not enable virtual terminal processing");
        return ExitCode::FAILURE;
    }

    if let Some((width, height)) = resize_to {
        controller.resize(width, height);
    }

    print_palette(&mut controller);

    println!();
    controller.invert_colors();
    print!(" inverted video ");
    controller.set_colors(sequences::COLOR_RESET, sequences::COLOR_RESET);
    println!();

    if show_alternate {
        let active = controller.toggle_screen_buffer(true);
        println!("alternate buffer active: {active}");
        let _ = io::stdout().flush();
        std::thread::sleep(Duration::from_secs(2));
        let active = controller.toggle_screen_buffer(false);
        println!("alternate buffer active: {active}");
    }

    ExitCode::SUCCESS
}

/// Print each palette entry as foreground on the default background, then
/// as the background behind the default foreground.
fn print_palette<W: Write>(controller: &mut TerminalController<UnixConsole, W>) {
    for code in 1..=sequences::COLOR_MAX {
        controller.set_colors(code, sequences::COLOR_UNCHANGED);
        print!(" {code:2} ");
    }
    controller.set_colors(sequences::COLOR_RESET, sequences::COLOR_UNCHANGED);
    println!();

    for code in 1..=sequences::COLOR_MAX {
        controller.set_colors(sequences::COLOR_UNCHANGED, code);
        print!(" {code:2} ");
    }
    controller.set_colors(sequences::COLOR_UNCHANGED, sequences::COLOR_RESET);
    println!();
}

fn print_help(program: &str) {
    println!("Usage: {program} [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -s, --size WIDTH HEIGHT  Resize the terminal window first");
    println!("  -a, --alternate          Demonstrate the alternate screen buffer");
    println!("  -h, --help               Show this help");
}
