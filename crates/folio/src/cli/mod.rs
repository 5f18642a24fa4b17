//! # CLI Behavior
//!
//! This is **one possible UI client** for folio, not the application itself. The CLI is
//! the only place that knows about terminal I/O, exit codes and output formatting.
//!
//! ## Commands
//!
//! ```text
//! folio [--content-dir DIR] [-v] blog    <list|show|new|edit|rm>
//! folio [--content-dir DIR] [-v] project <list|show|new|edit|rm>
//! folio [--content-dir DIR] [-v] gallery <list|show|new|edit|rm>
//! folio [--content-dir DIR] [-v] profile <show|set>
//! folio [--content-dir DIR] [-v] interactive
//! ```
//!
//! Items are addressed by slug. `edit --title` re-slugs the item; the old slug stops
//! resolving immediately.
//!
//! ## Output
//!
//! Command results go to stdout, colored by message level. Logs go to stderr and are
//! quiet unless `-v`, `FOLIO_LOG` or the configured `log_level` ask for more. Any error
//! exits with status 1.
//!
//! ## Module Structure
//!
//! - `args`: Argument parsing via clap
//! - `handlers`: One function per command group, calling the API
//! - `interactive`: Menu loop over an explicit [`session::Session`]
//! - `print`: Colored rendering of lists, items and messages
//! - `logging`: `tracing-subscriber` setup

mod args;
mod handlers;
mod interactive;
mod logging;
mod print;
mod session;

use anyhow::{Context, Result};
use args::{Cli, Commands};
use clap::Parser;
use folioapp::config::FolioConfig;
use folioapp::init::initialize_with_config;
use session::Session;
use std::io;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("could not determine the working directory")?;
    let config = FolioConfig::load(&cwd)?;
    logging::init(cli.verbose, &config.log_level);
    let ctx = initialize_with_config(&cwd, config, cli.content_dir)?;
    debug!(content_dir = %ctx.content_dir.display(), "using content directory");

    let api = &ctx.api;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Blog { action } => handlers::blog(api, action, &mut out),
        Commands::Project { action } => handlers::project(api, action, &mut out),
        Commands::Gallery { action } => handlers::gallery(api, action, &mut out),
        Commands::Profile { action } => handlers::profile(api, action, &mut out),
        Commands::Interactive => {
            let stdin = io::stdin();
            let mut session = Session::new(stdin.lock(), out);
            interactive::run(api, &mut session)?;
            Ok(())
        }
    }
}
