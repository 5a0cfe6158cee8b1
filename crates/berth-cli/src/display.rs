//! Release output
//!
//! Plain text only, so the output can be consumed by scripts: the release
//! name alone, or a labelled four-line summary in verbose mode.

use berth_core::{Release, format_timestamp};
use std::io::{self, Write};

/// Write a release to `out`
///
/// An absent release writes nothing.
pub fn render_release<W: Write>(out: &mut W, release: Option<&Release>, verbose: bool) -> io::Result<()> {
    let Some(rel) = release else {
        return Ok(());
    };

    if verbose {
        writeln!(out, "NAME:   {}", rel.name)?;
        writeln!(
            out,
            "INFO:   {} {}",
            format_timestamp(&rel.info.last_deployed),
            rel.info.status
        )?;
        writeln!(out, "CHART:  {} {}", rel.chart.name, rel.chart.version)?;
        writeln!(out, "MANIFEST: {}", rel.manifest)?;
    } else {
        writeln!(out, "{}", rel.name)?;
    }

    Ok(())
}

/// Print a release to stdout
pub fn print_release(release: Option<&Release>, verbose: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_release(&mut out, release, verbose)?;
    out.flush()
}
