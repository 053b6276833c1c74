//! Interactive prompt for the listing identifier.

use std::io::{self, BufRead, Write};

/// Prompt shown when no identifier was given on the command line.
pub const ITEM_ID_PROMPT: &str = "Enter the listing ID (e.g. MLB1234567890): ";

/// Writes the prompt to `output` and reads one line from `input`.
///
/// Returns an empty string on EOF; validation downstream rejects it.
pub fn read_item_id<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    output.write_all(ITEM_ID_PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
