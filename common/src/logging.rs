//! Common logging initializer.
//!

use eyre::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use tracing_tree::HierarchicalLayer;

/// Set up the global `tracing` subscriber.
///
/// Filters come from the environment (`RUST_LOG`).  Output is either a
/// compact single-line format or, with `use_tree`, a hierarchical span tree.
///
pub fn init_logging(use_tree: bool) -> Result<()> {
    // Load filters from environment
    //
    let filter = EnvFilter::from_default_env();

    // Do we want hierarchical output?
    //
    let tree = if use_tree {
        Some(
            HierarchicalLayer::new(2)
                .with_ansi(true)
                .with_targets(true)
                .with_bracketed_fields(true),
        )
    } else {
        None
    };

    let fmt = if use_tree {
        None
    } else {
        Some(
            fmt::layer()
                .with_target(false)
                .compact(),
        )
    };

    // Combine filters & exporters
    //
    tracing_subscriber::registry()
        .with(filter)
        .with(tree)
        .with(fmt)
        .init();

    Ok(())
}
