//! ## atomrt-cli
//! **Operational harness for the Atom runtime**
//!
//! Drives the runtime's bounds-check contract from the command line: the
//! aborting check generated code relies on, and the catchable probe for
//! host embedding. The integration tests spawn this binary because
//! abnormal termination and the exact stderr diagnostic can only be
//! observed from outside the dying process.

use clap::Parser;

mod commands;

use commands::Cli;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    commands::run_command(cli)
}
