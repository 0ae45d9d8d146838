//! Text rendering of scaling options.
use std::io::{self, Write};

use crate::scaling::ScalingResult;

/// Write the aspect ratio and a table of scaling options.
///
/// The header is always written, so an empty option list produces a table
/// with no rows.
///
/// # Args
/// * `result` - The computed scaling options.
/// * `out` - Where to write the text.
pub fn render<W: Write>(result: &ScalingResult, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Original Aspect Ratio: {:.3} (Width:Height)",
        result.aspect_ratio
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "Scaling options ({}) that fit within {}x{}:",
        result.mode, result.max_size, result.max_size
    )?;
    writeln!(out, "Width x Height | Scale Factor")?;
    writeln!(out, "-----------------------------")?;
    for candidate in &result.candidates {
        writeln!(
            out,
            "{} x {}      | {:.3}",
            candidate.width, candidate.height, candidate.scale
        )?;
    }
    Ok(())
}
