//! Library part of the `skywatchctl` utility.
//!
//! This library implements the command line interface and the per-command
//! handlers; the binary in `main.rs` is just the driver.
//!

pub use cli::*;
pub use cmds::*;

mod cli;
mod cmds;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
