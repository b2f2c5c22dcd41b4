//! Tracing setup shared by the picker and webserver binaries

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the stdout tracing subscriber.
///
/// `level` applies to this workspace's crates; transport crates are pinned
/// to `warn` so HTTP plumbing does not drown the picker's own output.
/// `RUST_LOG` overrides everything when set.
pub fn init_tracing(level: &str) {
    let directives =
        format!("picker={level},webserver={level},shared={level},reqwest=warn,hyper=warn,tower=warn");

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directives));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
