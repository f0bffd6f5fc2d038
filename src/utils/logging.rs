//! Logging utilities
//!
//! The terminal belongs to the UI, so every `log` and `tracing` record goes to
//! a file under the data directory instead of stderr.

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    self, filter::EnvFilter, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt, Layer,
};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

/// Quiet HTTP client internals unless asked for
const DEPENDENCY_DIRECTIVES: &str = "reqwest=warn,hyper=warn,hyper_util=warn";

/// Filter directives: `RUST_LOG` wins over `$POSTFEED_LOGLEVEL`, which wins over the default
pub fn filter_directives(rust_log: Option<String>, app_log: Option<String>) -> String {
    rust_log.or(app_log).unwrap_or_else(|| {
        format!(
            "{}=info,{DEPENDENCY_DIRECTIVES}",
            env!("CARGO_CRATE_NAME")
        )
    })
}

/// Route `log` and `tracing` records to `<data dir>/postfeed.log`
pub fn initialize_logging() -> Result<()> {
    let directory = get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE.as_str());
    let log_file = std::fs::File::create(&log_path)?;

    let directives = filter_directives(
        std::env::var("RUST_LOG").ok(),
        std::env::var(LOG_ENV.as_str()).ok(),
    );
    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::try_new(&directives)?);
    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .init();

    log::info!("Logging to {} with filter {directives}", log_path.display());
    Ok(())
}

/// Similar to the `std::dbg!` macro, but generates `tracing` events rather
/// than printing to stdout.
///
/// By default, the verbosity level for the generated events is `DEBUG`, but
/// this can be customized.
#[macro_export]
macro_rules! trace_dbg {
    (target: $target:expr, level: $level:expr, $ex:expr) => {{
        match $ex {
            value => {
                tracing::event!(target: $target, $level, ?value, stringify!($ex));
                value
            }
        }
    }};
    (level: $level:expr, $ex:expr) => {
        trace_dbg!(target: module_path!(), level: $level, $ex)
    };
    (target: $target:expr, $ex:expr) => {
        trace_dbg!(target: $target, level: tracing::Level::DEBUG, $ex)
    };
    ($ex:expr) => {
        trace_dbg!(level: tracing::Level::DEBUG, $ex)
    };
}
