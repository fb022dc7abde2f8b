//! CVD simulation command

use crate::CvdArgs;
use anyhow::{Context, Result};
use tinct_color::cvd::{Deficiency, cvd_matrix_machado2009};

pub fn run(args: CvdArgs, verbose: u8) -> Result<()> {
    let deficiency: Deficiency = args.deficiency.parse()?;
    let m = cvd_matrix_machado2009(deficiency, args.severity)
        .with_context(|| format!("Cannot simulate {} at severity {}", deficiency, args.severity))?;

    if verbose > 0 || args.matrix {
        let label = if args.severity == 1.0 {
            deficiency.dichromacy().to_string()
        } else {
            format!("{} {:.2}", deficiency, args.severity)
        };
        println!("{}:", label);
        println!("{}", super::format_matrix(&m));
    }

    if !args.rgb.is_empty() {
        let rgb = super::triplet(&args.rgb)?;
        anyhow::ensure!(rgb.is_finite(), "RGB values must be finite");
        println!("{}", super::format_triplet(m * rgb));
    }
    Ok(())
}
