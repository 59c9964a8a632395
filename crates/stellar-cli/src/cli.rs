//! Argument parsing and the single analysis command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use stellar::{Star, StellarReport, ValidationLimits};
use tracing::{debug, info};

const CLOSING_NOTE: &str = "Note: All Earth-equivalent calculations are based on receiving \
the same amount of stellar radiation as Earth receives from the Sun.\n\
Actual habitability depends on many additional factors including \
atmospheric composition, magnetic fields, and planetary mass.";

/// Derive luminosity, habitable zone, orbital period and MK class of a star.
#[derive(Debug, Parser)]
#[command(name = "stellar-calc", version, about, long_about = None)]
pub struct Cli {
    /// Stellar mass in solar masses
    #[arg(short, long, allow_negative_numbers = true)]
    pub mass: f64,

    /// Stellar radius in solar radii
    #[arg(short, long, allow_negative_numbers = true)]
    pub radius: f64,

    /// Effective temperature in Kelvin
    #[arg(short, long, allow_negative_numbers = true)]
    pub temperature: f64,

    /// Print the report as pretty JSON
    #[arg(long)]
    pub json: bool,

    /// TOML file overriding the plausibility limits
    #[arg(long, value_name = "FILE", env = "STELLAR_LIMITS")]
    pub limits: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Validates the inputs, analyses the star and renders the report.
pub fn run(cli: &Cli) -> Result<String> {
    let limits = load_limits(cli.limits.as_deref())?;
    let star = build_star(cli, &limits)?;
    info!(
        mass = cli.mass,
        radius = cli.radius,
        temperature = cli.temperature,
        "analysing star"
    );

    let report = StellarReport::for_star(&star);
    render(&report, cli.json)
}

/// Reads limits from `path`, or the defaults when no file was given.
pub fn load_limits(path: Option<&Path>) -> Result<ValidationLimits> {
    let Some(path) = path else {
        return Ok(ValidationLimits::default());
    };

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read limits file {}", path.display()))?;
    let limits: ValidationLimits = toml::from_str(&contents)
        .with_context(|| format!("failed to parse limits file {}", path.display()))?;

    debug!(?limits, path = %path.display(), "loaded validation limits");
    Ok(limits)
}

pub fn build_star(cli: &Cli, limits: &ValidationLimits) -> Result<Star> {
    let mass = limits.validate_mass(cli.mass).context("invalid mass")?;
    let radius = limits.validate_radius(cli.radius).context("invalid radius")?;
    let temperature = limits
        .validate_temperature(cli.temperature)
        .context("invalid temperature")?;

    Ok(Star::new(mass, radius, temperature)?)
}

pub fn render(report: &StellarReport, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(report).context("failed to serialize report");
    }
    Ok(format!("{report}\n{CLOSING_NOTE}"))
}
