//! One report run
//!
//! Header, per-file notices, then either both tables or the failure notice
//! and the abort line. Everything goes to a single writer.

use std::io::{self, Write};

use crate::cli::display::{write_abort, write_failure, write_header, write_loaded};
use crate::report::{build_cycle_rows, render_report};
use crate::scenario::{load_scenario, ScenarioFiles};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Both tables were written
    Rendered,
    /// Loading failed; no table was written
    Aborted,
}

/// Load `files` and write the whole run to `out`.
///
/// A load failure is reported on `out` and yields [`RunOutcome::Aborted`];
/// only write errors are returned as `Err`.
pub fn run_report<W: Write>(out: &mut W, files: &ScenarioFiles) -> io::Result<RunOutcome> {
    write_header(out)?;

    let mut notice_error = None;
    let loaded = load_scenario(files, |kind, path| {
        if notice_error.is_none() {
            notice_error = write_loaded(out, kind, path).err();
        }
    });
    if let Some(err) = notice_error {
        return Err(err);
    }

    match loaded {
        Ok(loaded) => {
            let rows = build_cycle_rows(&loaded.cycles);
            render_report(out, &loaded.totals, &rows)?;
            Ok(RunOutcome::Rendered)
        }
        Err(err) => {
            write_failure(out, &err)?;
            write_abort(out)?;
            Ok(RunOutcome::Aborted)
        }
    }
}
