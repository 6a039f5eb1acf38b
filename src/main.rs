// SPDX-License-Identifier: MPL-2.0
use icon_rescaler::{process, AssetPaths};
use std::backtrace::Backtrace;
use std::panic;
use std::process::ExitCode;

const HELP: &str = "\
Rescale the Android adaptive icon foreground to fill the circular safe zone.

USAGE:
  icon_rescaler

The icon is read from assets/adaptive-icon-foreground.png; the result is
written to adaptive-icon-foreground-new.png and the original is backed up
to adaptive-icon-foreground-old.png on the first run.

FLAGS:
  -h, --help     Print this help
  -V, --version  Print version";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{HELP}");
        return ExitCode::SUCCESS;
    }
    if args.contains(["-V", "--version"]) {
        println!("icon_rescaler {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }
    for arg in args.finish() {
        eprintln!("[WARN] Ignoring unexpected argument: {}", arg.to_string_lossy());
    }

    if let Err(err) = process::install_interrupt_handler() {
        err.report();
        return ExitCode::from(err.exit_code());
    }

    panic::set_hook(Box::new(|info| {
        eprintln!("\nError: {info}");
        eprintln!("{}", Backtrace::force_capture());
    }));

    let paths = AssetPaths::locate();
    let outcome = panic::catch_unwind(|| icon_rescaler::run(&paths));
    ExitCode::from(process::exit_status(outcome))
}
