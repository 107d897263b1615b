use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` for this crate with
/// `--verbose`. Colors only when stderr is a terminal. Safe to call more than
/// once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "fair_jury=debug"
    } else {
        "warn"
    }
}
