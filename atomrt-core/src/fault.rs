//! ## atomrt-core::fault
//! **Diagnostic emission and abnormal termination**
//!
//! The reporting side of a failed bounds check. The diagnostic block
//! written here is parsed by downstream crash tooling, so its shape is
//! frozen: a 48-dash separator, the literal panic message, the two
//! values, a closing separator. Termination is via `abort` (SIGABRT),
//! never a normal exit code, so supervisors can tell "programming bug
//! detected" apart from ordinary failures.

use std::backtrace::Backtrace;
use std::io::{self, Write};
use std::process;

use atomrt_config::FaultConfig;
use once_cell::sync::Lazy;

const SEPARATOR: &str = "------------------------------------------------";

// Read once, env only: the fault path must not touch the filesystem of a
// process that is already dying.
static FAULT_CONFIG: Lazy<FaultConfig> = Lazy::new(FaultConfig::from_env);

/// Writes the fixed-format out-of-bounds diagnostic block.
///
/// Factored out of [`out_of_bounds`] so the exact bytes can be asserted
/// without aborting. `Index:` carries two trailing spaces so the two
/// values align.
pub fn write_report<W: Write>(out: &mut W, index: u64, length: u64) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "ATOM PANIC: Index out of bounds!")?;
    writeln!(out, "  Index:  {index}")?;
    writeln!(out, "  Length: {length}")?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

/// Reports an out-of-bounds access and terminates the process.
///
/// Holds the stderr lock for the whole block so concurrent faults each
/// emit a complete report, flushes before aborting so the message
/// survives the SIGABRT, and never returns.
#[cold]
#[inline(never)]
pub fn out_of_bounds(index: u64, length: u64) -> ! {
    tracing::error!(index, length, "bounds check failed, aborting");

    let mut stderr = io::stderr().lock();
    // Write failures are ignored: the process terminates either way, and
    // there is nowhere left to report them.
    let _ = write_report(&mut stderr, index, length);
    if FAULT_CONFIG.backtrace {
        let _ = writeln!(stderr, "{}", Backtrace::force_capture());
    }
    let _ = stderr.flush();
    drop(stderr);

    process::abort();
}
