use std::io;

use anyhow::bail;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use solar_cli::input;
use solar_cli::session::{Session, render_result};
use solar_core::calculations::Estimator;
use solar_core::wizard::{StepField, validate_field};
use solar_core::{EstimateInput, SystemConfig};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Solar panel production and savings estimator.
///
/// Without options, starts the interactive wizard. Give --roof-area,
/// --roof-angle and --direction together for a one-shot estimate
/// suitable for scripting.
#[derive(Debug, Parser)]
struct Cli {
    /// Roof area in square metres.
    #[arg(long)]
    roof_area: Option<f64>,

    /// Roof tilt angle in degrees (0-90).
    #[arg(long)]
    roof_angle: Option<f64>,

    /// Direction the roof faces: south, east, west, north or flat.
    #[arg(long)]
    direction: Option<String>,

    /// Monthly electricity bill; adds a bill-coverage line to the results.
    #[arg(long)]
    monthly_bill: Option<String>,

    /// Print the one-shot estimate as JSON.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn wants_one_shot(&self) -> bool {
        self.roof_area.is_some() || self.roof_angle.is_some() || self.direction.is_some()
    }
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── one-shot mode ───────────────────────────────────────────────────────────

fn run_one_shot(
    cli: &Cli,
    config: SystemConfig,
) -> anyhow::Result<()> {
    let (Some(area), Some(angle), Some(direction)) =
        (cli.roof_area, cli.roof_angle, cli.direction.as_deref())
    else {
        bail!("one-shot mode needs --roof-area, --roof-angle and --direction together");
    };

    let mut record = EstimateInput::empty()
        .with_roof_area(area)
        .with_roof_angle(angle)
        .with_roof_direction(input::parse_direction(direction)?);
    if let Some(bill) = &cli.monthly_bill {
        record = record.with_monthly_bill(input::parse_decimal(bill)?);
    }

    // Same rules the wizard applies per step, so flag input gets the
    // same friendly messages.
    validate_field(StepField::RoofArea, &record)?;
    validate_field(StepField::RoofAngle, &record)?;
    validate_field(StepField::RoofDirection, &record)?;
    if record.monthly_bill.is_some() {
        validate_field(StepField::MonthlyBill, &record)?;
    }

    let estimator = Estimator::new(config);
    let result = estimator.estimate(&record)?;
    debug!(panels = result.panel_count, "one-shot estimate");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let stdout = io::stdout();
        render_result(
            &mut stdout.lock(),
            &result,
            estimator.config(),
            record.monthly_bill,
        )?;
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = SystemConfig::default();

    if cli.wants_one_shot() {
        run_one_shot(&cli, config)
    } else if cli.json {
        bail!("--json requires --roof-area, --roof-angle and --direction");
    } else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(config, stdin.lock(), stdout.lock());
        session.run()
    }
}
