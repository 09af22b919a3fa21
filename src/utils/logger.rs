use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "small_utils=info";
const VERBOSE_FILTER: &str = "small_utils=debug,info";

/// Picks the filter directive: verbose beats the configured level, which beats the default.
pub fn filter_directive(verbose: bool, configured_level: Option<&str>) -> String {
    if verbose {
        VERBOSE_FILTER.to_string()
    } else if let Some(level) = configured_level {
        format!("small_utils={}", level)
    } else {
        DEFAULT_FILTER.to_string()
    }
}

pub fn init_cli_logger(verbose: bool, configured_level: Option<&str>) {
    let directive = filter_directive(verbose, configured_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    // Logs go to stderr so stdout only carries results.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
