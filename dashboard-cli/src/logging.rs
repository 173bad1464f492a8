use tracing_subscriber::{EnvFilter, prelude::*};

/// Install the stderr subscriber. `RUST_LOG` wins over `verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer =
        tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false);

    tracing_subscriber::registry().with(stderr_layer.with_filter(filter)).init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "info,dashboard_core=debug,dashboard=debug" } else { "warn" }
}
