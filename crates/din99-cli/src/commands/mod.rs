//! CLI command implementations

pub mod convert;
pub mod delta;

use anyhow::{Context, Result, bail};
use din99_color::Triple;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open a line source: the file at `path`, or stdin.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(p) => {
            let file = File::open(p).with_context(|| format!("Failed to open: {}", p.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Parse one input line into a triple.
///
/// Values are separated by whitespace and/or commas. Blank lines and
/// lines starting with `#` yield `None`.
pub fn parse_triple(line: &str) -> Result<Option<Triple>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    if fields.len() != 3 {
        bail!("expected 3 values, got {}", fields.len());
    }

    let mut triple = [0.0; 3];
    for (slot, field) in triple.iter_mut().zip(&fields) {
        *slot = field
            .parse()
            .with_context(|| format!("invalid number '{}'", field))?;
    }
    Ok(Some(triple))
}

/// Format a triple as space-separated fixed-point values.
pub fn format_triple(t: Triple, precision: usize) -> String {
    format!(
        "{:.p$} {:.p$} {:.p$}",
        t[0],
        t[1],
        t[2],
        p = precision
    )
}

/// Convert a triple argument list into a `Triple`.
pub fn triple_arg(values: &[f64]) -> Result<Triple> {
    match values {
        &[x, y, z] => Ok([x, y, z]),
        _ => bail!("expected 3 values, got {}", values.len()),
    }
}
