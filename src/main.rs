//! Binary entrypoint.
//!
//! The crate is split into layers:
//! - domain: pure types, path rules and errors
//! - usecase: flattening + per-profile orchestration
//! - infrastructure: serde + async IO + logging
//! - interface: CLI wiring and output formats

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    chrome_bookmarks::infrastructure::logging::init_logging();
    chrome_bookmarks::interface::cli::run().await
}
