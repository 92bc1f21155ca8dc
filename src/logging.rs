use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr diagnostics subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug over warn.
pub fn init_cli_logger(verbose: bool) {
    let default = if verbose {
        "jobspage_autofix=debug,warn"
    } else {
        "jobspage_autofix=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
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
        .try_init();
}
