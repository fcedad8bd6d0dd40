//! Tracing subscriber setup for the `lumen` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a global subscriber if `RUST_LOG` is set.
///
/// `LUMEN_LOG_TREE` switches from flat lines to indented span trees, which
/// follow the checker and interpreter recursion.
///
/// ```bash
/// RUST_LOG=lum_types=trace lumen program.json
/// RUST_LOG=debug LUMEN_LOG_TREE=1 lumen program.json
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var_os("LUMEN_LOG_TREE").is_some();

        // Writes to stderr by default.
        let tree_layer =
            tree.then(|| tracing_tree::HierarchicalLayer::new(2).with_targets(true));
        let fmt_layer = (!tree).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(tree_layer)
            .with(fmt_layer)
            .init();
    });
}
