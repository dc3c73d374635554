//! Lab <-> DIN99 conversion commands.
//!
//! `to-din99` and `to-lab` convert a single triple given on the command
//! line. `convert` streams triples from a file or stdin, one per line, and
//! converts them as one batch.

use crate::{ConvertArgs, OutputOpts, TripleArgs};
use anyhow::{Context, Result, bail};
use din99_color::{ColorError, Conversion, Din99, KFactors, Lab, Triple};
use serde_json::Value;
use std::io::{self, BufRead, BufWriter, Write};
use tracing::{debug, info};

/// Converts one triple given as arguments.
pub fn run_single(conversion: Conversion, args: TripleArgs, out: OutputOpts) -> Result<()> {
    let k = args.factors.factors()?;
    let input = super::triple_arg(&args.values)?;
    info!(%conversion, k_e = k.k_e, k_ch = k.k_ch, "converting {:?}", input);

    let output = conversion
        .apply(input, k)
        .with_context(|| format!("{} failed", conversion))?;

    if conversion == Conversion::LabToDin99 {
        let d = Din99::from_array(output);
        debug!(chroma = d.chroma(), hue = d.hue(), "DIN99 polar form");
    }

    let mut stdout = io::stdout().lock();
    write_result(&mut stdout, conversion, k, input, output, out)?;
    Ok(())
}

/// Converts every triple of a file or stdin.
pub fn run_stream(args: ConvertArgs, out: OutputOpts) -> Result<()> {
    let k = args.factors.factors()?;
    let conversion = args.direction;

    let reader = super::open_input(args.input.as_deref())?;
    let rows = convert_lines(reader, conversion, k)?;

    let mut w = BufWriter::new(io::stdout().lock());
    for &(input, output) in &rows {
        write_result(&mut w, conversion, k, input, output, out)?;
    }
    w.flush()?;
    Ok(())
}

/// Reads one triple per line and converts them as a single batch.
///
/// Blank and `#` lines are skipped. Errors name the 1-based input line.
fn convert_lines<R: BufRead>(
    reader: R,
    conversion: Conversion,
    k: KFactors,
) -> Result<Vec<(Triple, Triple)>> {
    let mut triples: Vec<Triple> = Vec::new();
    let mut line_numbers: Vec<usize> = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        let lineno = idx + 1;
        if let Some(t) = super::parse_triple(&line).with_context(|| format!("line {}", lineno))? {
            triples.push(t);
            line_numbers.push(lineno);
        }
    }
    info!(%conversion, count = triples.len(), "read input triples");

    let converted = match conversion.apply_slice(&triples, k) {
        Ok(v) => v,
        Err(ColorError::Domain {
            channel,
            value,
            index,
        }) => {
            let lineno = line_numbers.get(index).copied().unwrap_or(index + 1);
            bail!("line {}: {} = {} is outside the transform domain", lineno, channel, value)
        }
        Err(e) => return Err(e).with_context(|| format!("{} failed", conversion)),
    };

    Ok(triples.into_iter().zip(converted).collect())
}

fn write_result<W: Write>(
    w: &mut W,
    conversion: Conversion,
    k: KFactors,
    input: Triple,
    output: Triple,
    out: OutputOpts,
) -> Result<()> {
    if out.json {
        let record = json_record(conversion, k, input, output)?;
        writeln!(w, "{}", record)?;
    } else {
        writeln!(w, "{}", super::format_triple(output, out.precision))?;
    }
    Ok(())
}

/// One JSON object per converted triple.
fn json_record(conversion: Conversion, k: KFactors, input: Triple, output: Triple) -> Result<Value> {
    let (input, output) = match conversion {
        Conversion::LabToDin99 => (
            serde_json::to_value(Lab::from_array(input))?,
            serde_json::to_value(Din99::from_array(output))?,
        ),
        Conversion::Din99ToLab => (
            serde_json::to_value(Din99::from_array(input))?,
            serde_json::to_value(Lab::from_array(output))?,
        ),
    };
    Ok(serde_json::json!({
        "conversion": conversion.name(),
        "factors": k,
        "input": input,
        "output": output,
    }))
}
