//! File-based structured logging.
//!
//! `tracing` events and spans are formatted by `tracing-subscriber` and
//! written to a size-rotated log file in the data directory. Stdout belongs
//! to the terminal UI, so nothing is logged there.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → hero-catalog.log
//! ```
//!
//! # Configuration
//!
//! The filter is taken from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `log_level` in `config.toml`
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
