use tracing_subscriber::EnvFilter;

/// Install the default `tracing` subscriber for binaries and examples.
///
/// Library crates only emit events; whoever owns `main` decides where they
/// go. `NACRE_LOG` overrides the built-in filter.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("NACRE_LOG")
                .unwrap_or_else(|_| EnvFilter::new("info,nacre_ui=debug")),
        )
        .init();
}
