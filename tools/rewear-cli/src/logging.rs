//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug for the
/// storefront crates with `--verbose`. `--json` switches to JSON lines.
pub fn init(verbose: bool, json: bool) {
    let default_directives = if verbose {
        "warn,rewear=debug,rewear_commerce=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
