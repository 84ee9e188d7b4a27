use tracing_subscriber::prelude::*;

/// Initialize tracing subscriber for the whole process.
///
/// Diagnostics go to stderr so they do not interleave with one-shot stdout
/// output; control verbosity with RUST_LOG (e.g. RUST_LOG=repotrend=debug).
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repotrend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
