//! DIN99 colour difference command.

use crate::{DeltaArgs, OutputOpts};
use anyhow::{Context, Result, bail};
use din99_color::{Lab, delta_e_din99};
use din99_color::difference::difference_factors;
use tracing::info;

/// Prints the DIN99 colour difference of two Lab triples.
pub fn run(args: DeltaArgs, out: OutputOpts) -> Result<()> {
    let (lab1, lab2) = match args.values.as_slice() {
        &[l1, a1, b1, l2, a2, b2] => ([l1, a1, b1], [l2, a2, b2]),
        other => bail!("expected 6 values, got {}", other.len()),
    };
    info!(textiles = args.textiles, "colour difference of {:?} and {:?}", lab1, lab2);

    let de = delta_e_din99(lab1, lab2, args.textiles).context("Colour difference failed")?;

    if out.json {
        let record = serde_json::json!({
            "lab1": Lab::from_array(lab1),
            "lab2": Lab::from_array(lab2),
            "factors": difference_factors(args.textiles),
            "delta_e": de,
        });
        println!("{}", record);
    } else {
        println!("{:.p$}", de, p = out.precision);
    }
    Ok(())
}
