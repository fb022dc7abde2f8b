//! tinct - colour science calculator
//!
//! Thin command-line front end over `tinct-color`: OSA UCS conversions,
//! colour-vision-deficiency simulation, Rec. 2020 transfer functions and
//! colourspace records.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tinct")]
#[command(author, version, about = "Colour science calculator")]
#[command(long_about = "
Colour science calculator: OSA UCS, CVD simulation, Rec. 2020.

Examples:
  tinct osa 7.049534 10.08 9.558313          # XYZ -> OSA UCS Ljg
  tinct osa --inverse -- -4.49 0.70 3.03     # Ljg -> XYZ
  tinct osa --inverse --best-fit 0 30 30     # closest XYZ and residual
  tinct cvd protanomaly 0.5 0.8 0.2 0.1      # simulate on linear RGB
  tinct cvd deutan 1.0 --matrix              # print the matrix
  tinct rec2020 encode 0.18 --bits 12
  tinct colorspace \"Rec. 2020\" --json
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert between CIE XYZ (domain [0, 100]) and OSA UCS Ljg
    Osa(OsaArgs),

    /// Simulate colour-vision deficiency (Machado 2009)
    Cvd(CvdArgs),

    /// Rec. 2020 transfer function
    #[command(name = "rec2020")]
    Rec2020(Rec2020Args),

    /// Show an RGB colourspace record
    #[command(visible_alias = "cs")]
    Colorspace(ColorspaceArgs),
}

/// Arguments for the `osa` command.
#[derive(Args)]
struct OsaArgs {
    /// X Y Z, or L j g with --inverse
    #[arg(num_args = 3, required = true, allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Convert Ljg back to XYZ
    #[arg(short, long)]
    inverse: bool,

    /// Simplex iteration limit for the inverse
    #[arg(long)]
    max_iter: Option<usize>,

    /// JSON file with inverse options (x0, xtol, ftol, max_iter, ...)
    #[arg(long)]
    options: Option<PathBuf>,

    /// With --inverse, print the closest XYZ and its residual even if it
    /// misses the tolerance
    #[arg(long, requires = "inverse")]
    best_fit: bool,
}

/// Arguments for the `cvd` command.
#[derive(Args)]
struct CvdArgs {
    /// protanomaly, deuteranomaly or tritanomaly
    deficiency: String,

    /// Severity in [0, 1]
    severity: f64,

    /// Linear R G B
    #[arg(num_args = 3, allow_negative_numbers = true, required_unless_present = "matrix")]
    rgb: Vec<f64>,

    /// Print the simulation matrix
    #[arg(short, long)]
    matrix: bool,
}

/// Transfer direction for `rec2020`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Direction {
    /// Linear to non-linear (OETF)
    Encode,
    /// Non-linear to linear (inverse OETF)
    Decode,
}

/// Arguments for the `rec2020` command.
#[derive(Args)]
struct Rec2020Args {
    /// encode or decode
    direction: Direction,

    /// Value to convert
    #[arg(allow_negative_numbers = true)]
    value: f64,

    /// System bit depth: 10 or 12
    #[arg(short, long, default_value = "10")]
    bits: u32,
}

/// Arguments for the `colorspace` command.
#[derive(Args)]
struct ColorspaceArgs {
    /// Colourspace name; lists the known names when omitted
    name: Option<String>,

    /// Print as JSON
    #[arg(long)]
    json: bool,
}

/// Sets up the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the `-v` count. The returned guard
/// flushes the log file on drop.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Osa(args) => commands::osa::run(args, cli.verbose),
        Commands::Cvd(args) => commands::cvd::run(args, cli.verbose),
        Commands::Rec2020(args) => commands::rec2020::run(args, cli.verbose),
        Commands::Colorspace(args) => commands::colorspace::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_osa_inverse_with_negatives() {
        let cli = Cli::try_parse_from(["tinct", "osa", "--inverse", "-4.49", "0.70", "3.03"]).unwrap();
        let Commands::Osa(args) = cli.command else {
            panic!("expected osa");
        };
        assert!(args.inverse);
        assert!(!args.best_fit);
        assert_eq!(args.values, vec![-4.49, 0.70, 3.03]);
    }

    #[test]
    fn test_parse_osa_best_fit_needs_inverse() {
        assert!(Cli::try_parse_from(["tinct", "osa", "--best-fit", "0", "30", "30"]).is_err());
        let cli = Cli::try_parse_from(["tinct", "osa", "-i", "--best-fit", "0", "30", "30"]).unwrap();
        let Commands::Osa(args) = cli.command else {
            panic!("expected osa");
        };
        assert!(args.best_fit);
    }

    #[test]
    fn test_parse_cvd_matrix_only() {
        let cli = Cli::try_parse_from(["tinct", "-vv", "cvd", "tritan", "0.3", "--matrix"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Cvd(args) = cli.command else {
            panic!("expected cvd");
        };
        assert!(args.matrix);
        assert!(args.rgb.is_empty());
    }

    #[test]
    fn test_parse_cvd_requires_rgb() {
        assert!(Cli::try_parse_from(["tinct", "cvd", "protan", "0.5"]).is_err());
    }

    #[test]
    fn test_parse_rec2020() {
        let cli = Cli::try_parse_from(["tinct", "rec2020", "decode", "0.5", "--bits", "12"]).unwrap();
        let Commands::Rec2020(args) = cli.command else {
            panic!("expected rec2020");
        };
        assert_eq!(args.direction, Direction::Decode);
        assert_eq!(args.bits, 12);
    }
}
