//! OSA UCS command
//!
//! Forward XYZ to Ljg, or the optimisation-based inverse with `--inverse`.
//! `--best-fit` reports the closest XYZ and its residual instead of failing.

use crate::OsaArgs;
use anyhow::{Context, Result};
use std::path::Path;
use tinct_color::osa_ucs::{InverseOptions, fit_osa_ucs, osa_ucs_to_xyz, xyz_to_osa_ucs};
use tracing::info;

pub fn run(args: OsaArgs, verbose: u8) -> Result<()> {
    let input = super::triplet(&args.values)?;

    if !args.inverse {
        let ljg = xyz_to_osa_ucs(input);
        if verbose > 0 {
            println!("XYZ {} ->", super::format_triplet(input));
        }
        println!("{}", super::format_triplet(ljg));
        return Ok(());
    }

    let mut options = match &args.options {
        Some(path) => load_options(path)?,
        None => InverseOptions::default(),
    };
    if let Some(max_iter) = args.max_iter {
        options.max_iter = max_iter;
    }
    info!(?options, "inverting OSA UCS");

    if args.best_fit {
        let fit = fit_osa_ucs(input, &options)
            .with_context(|| format!("Failed to invert Ljg {}", super::format_triplet(input)))?;
        if verbose > 0 {
            println!("Ljg {} ->", super::format_triplet(input));
        }
        println!("{}", super::format_triplet(fit.xyz));
        println!("residual {:e} ({} runs)", fit.residual, fit.runs);
        return Ok(());
    }

    let xyz = osa_ucs_to_xyz(input, &options)
        .with_context(|| format!("Failed to invert Ljg {}", super::format_triplet(input)))?;
    if verbose > 0 {
        println!("Ljg {} ->", super::format_triplet(input));
    }
    println!("{}", super::format_triplet(xyz));
    Ok(())
}

/// Reads [`InverseOptions`] from a JSON file; missing fields keep defaults.
fn load_options(path: &Path) -> Result<InverseOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid inverse options: {}", path.display()))
}
