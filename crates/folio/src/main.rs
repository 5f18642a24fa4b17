//! # Folio CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/folioapp/`: Core library: slugs, ids, index/detail synchronization, storage
//! - `crates/folio/`: This CLI tool, depends on the `folioapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/folio/src/cli/)                          │
//! │  - clap argument parsing (args.rs)                          │
//! │  - Dispatch to the API (handlers.rs)                        │
//! │  - Menu-driven session over stdin/stdout (interactive.rs)   │
//! │  - Colored terminal output (print.rs)                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/folioapp/src/api.rs)                     │
//! │  - Per-collection locking, dispatch to command modules      │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI is responsible for argument
//! parsing, context initialization, rendering and exit codes.
//!
//! ## Testing Approach
//!
//! - Handlers and the interactive session write to any `io::Write`, so unit tests run
//!   them against an in-memory backend and inspect the output.
//! - `tests/cli_e2e.rs` runs the real binary against a temporary content directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
