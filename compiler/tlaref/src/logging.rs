use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable selecting the hierarchical span layout.
pub const LOG_TREE_VAR: &str = "TLAREF_LOG_TREE";

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=tla_resolve=debug`;
/// set `TLAREF_LOG_TREE` to print spans as an indented tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os(LOG_TREE_VAR).is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
