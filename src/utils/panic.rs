use std::{panic, process};

use color_eyre::{config::HookBuilder, eyre::Result};

use crate::infrastructure::tui::real::RealTui;

/// Install color-eyre hooks and a panic hook that restores the terminal first
///
/// Release builds write a human-panic crash report; debug builds print a full
/// better-panic backtrace. Both log the report before exiting.
pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "This is a bug. Consider reporting it at {}",
            env!("CARGO_PKG_REPOSITORY")
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = RealTui::restore() {
            tracing::error!("Unable to restore the terminal: {e:?}");
        }

        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, print_msg, Metadata};
            let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "))
                .homepage(env!("CARGO_PKG_HOMEPAGE"));

            let crash_file = handle_dump(&meta, panic_info);
            if let Err(e) = print_msg(crash_file, &meta) {
                eprintln!("human-panic: printing error message to console failed: {e}");
            }
            eprintln!("{}", panic_hook.panic_report(panic_info));
        }

        let report = panic_hook.panic_report(panic_info).to_string();
        log::error!("Panic: {}", strip_ansi_escapes::strip_str(report));

        #[cfg(debug_assertions)]
        {
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}
