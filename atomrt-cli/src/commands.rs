use clap::{Args, Parser, Subcommand};

use atomrt_config::AtomRtConfig;
use atomrt_core::bounds;
use atomrt_telemetry::logging::EventLogger;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the aborting bounds check (the contract generated code gets)
    Check(CheckArgs),
    /// Run the catchable host-API check and report the outcome
    Probe(ProbeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Attempted access position
    #[arg(long)]
    pub index: u64,
    /// Exclusive upper bound of the valid range
    #[arg(long)]
    pub length: u64,
    /// Route the check through the exported C ABI symbol instead of the
    /// crate API
    #[arg(long)]
    pub ffi: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ProbeArgs {
    /// Attempted access position
    #[arg(long)]
    pub index: u64,
    /// Exclusive upper bound of the valid range
    #[arg(long)]
    pub length: u64,
}

pub fn run_command(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AtomRtConfig::load()?;
    EventLogger::init_with_filter(&config.telemetry.log_level);

    match cli.command {
        Commands::Check(check_args) => run_check(check_args),
        Commands::Probe(probe_args) => run_probe(probe_args),
    }
}

fn run_check(args: CheckArgs) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing::debug!(index = args.index, length = args.length, ffi = args.ffi, "running check");

    // Does not return on failure.
    if args.ffi {
        atomrt_ffi::atom_do_bounds_check(args.index, args.length);
    } else {
        bounds::check(args.index, args.length);
    }

    println!(
        "bounds check passed: index {} < length {}",
        args.index, args.length
    );
    Ok(())
}

fn run_probe(args: ProbeArgs) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match bounds::try_check(args.index, args.length) {
        Ok(()) => {
            println!("in bounds: index {} < length {}", args.index, args.length);
            Ok(())
        }
        Err(err) => {
            tracing::warn!(%err, "probe rejected");
            println!("out of bounds: {err}");
            std::process::exit(1);
        }
    }
}
