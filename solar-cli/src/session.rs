//! Interactive wizard session over plain reader/writer handles.
//!
//! Generic over `BufRead`/`Write` so tests can drive a whole session
//! through in-memory buffers. Each round prints the progress line and
//! the current question, reads one line, and either applies it as an
//! answer or executes a navigation command (`back`, `restart`, `quit`).

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use solar_core::calculations::common::round_whole;
use solar_core::wizard::StepField;
use solar_core::{EstimateResult, SystemConfig, Wizard, WizardError, WizardState};
use tracing::debug;

use crate::input::{self, InputError};

/// An interactive wizard run bound to a reader and a writer.
pub struct Session<R, W> {
    wizard: Wizard,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        config: SystemConfig,
        reader: R,
        writer: W,
    ) -> Self {
        Self {
            wizard: Wizard::new(config),
            reader,
            writer,
        }
    }

    /// Runs the wizard until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.writer, "Solar panel estimator")?;
        writeln!(
            self.writer,
            "Answer each question, or type 'back', 'restart' or 'quit'.\n"
        )?;

        loop {
            let keep_going = match self.wizard.state() {
                WizardState::Question(_) => self.question_round()?,
                WizardState::Results => self.results_round()?,
            };
            if !keep_going {
                break;
            }
        }
        Ok(())
    }

    /// One question: prompt, read, apply, advance. Returns `false` when
    /// the session should end.
    fn question_round(&mut self) -> Result<bool> {
        let progress = self.wizard.progress();
        let (prompt, hint, field) = {
            let descriptor = self
                .wizard
                .current_descriptor()
                .context("wizard has no active question")?;
            (descriptor.prompt, descriptor.hint, descriptor.field)
        };

        writeln!(
            self.writer,
            "Step {} of {} — {}% complete",
            progress.current, progress.total, progress.percent
        )?;
        writeln!(self.writer, "{prompt}")?;
        writeln!(self.writer, "  ({hint})")?;
        write!(self.writer, "> ")?;
        self.writer.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(false);
        };

        match line.to_ascii_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(false),
            "back" | "b" => {
                self.wizard.retreat();
                return Ok(true);
            }
            "restart" => {
                self.wizard.reset();
                return Ok(true);
            }
            _ => {}
        }

        // A non-empty line is this question's answer; an empty one keeps
        // whatever was answered before (nothing, on a first visit) and
        // lets validation speak.
        if !line.is_empty() {
            if let Err(error) = self.apply_answer(field, &line) {
                writeln!(self.writer, "{error}\n")?;
                return Ok(true);
            }
        }

        match self.wizard.advance() {
            Ok(_) => writeln!(self.writer)?,
            Err(WizardError::Validation(error)) => {
                writeln!(self.writer, "{error}\n")?;
            }
            Err(error) => return Err(error.into()),
        }
        Ok(true)
    }

    /// The results screen. Returns `false` when the session should end.
    fn results_round(&mut self) -> Result<bool> {
        let result = self
            .wizard
            .result()
            .context("wizard is at results without an estimate")?
            .clone();
        render_result(
            &mut self.writer,
            &result,
            self.wizard.config(),
            self.wizard.input().monthly_bill,
        )?;

        writeln!(self.writer, "Type 'restart' to try other numbers, or 'quit'.")?;
        write!(self.writer, "> ")?;
        self.writer.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        match line.to_ascii_lowercase().as_str() {
            "restart" => {
                debug!("restarting wizard");
                self.wizard.reset();
                writeln!(self.writer)?;
                Ok(true)
            }
            "back" | "b" => {
                self.wizard.retreat();
                writeln!(self.writer)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn apply_answer(
        &mut self,
        field: StepField,
        raw: &str,
    ) -> Result<(), InputError> {
        match field {
            StepField::RoofArea => self.wizard.set_roof_area(input::parse_f64(raw)?),
            StepField::RoofAngle => self.wizard.set_roof_angle(input::parse_f64(raw)?),
            StepField::RoofDirection => {
                self.wizard.set_roof_direction(input::parse_direction(raw)?);
            }
            StepField::MonthlyBill => self.wizard.set_monthly_bill(input::parse_decimal(raw)?),
        }
        Ok(())
    }

    /// Reads one trimmed line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line)?;
        if bytes == 0 {
            Ok(None)
        } else {
            Ok(Some(line.trim().to_string()))
        }
    }
}

/// Writes the results screen: the estimate, the assumptions behind it,
/// and — when a monthly bill was given — how much of it the savings
/// would cover.
pub fn render_result<W: Write>(
    writer: &mut W,
    result: &EstimateResult,
    config: &SystemConfig,
    monthly_bill: Option<Decimal>,
) -> std::io::Result<()> {
    writeln!(writer, "──────── Your solar estimate ────────")?;
    writeln!(
        writer,
        "Estimated production:  {:.2} kW",
        result.estimated_production_kw
    )?;
    writeln!(
        writer,
        "Panels fitted:         {} ({} m × {} m each)",
        result.panel_count, config.panel_width_m, config.panel_height_m
    )?;
    writeln!(writer, "Panel area:            {:.1} m²", result.usable_area_sqm)?;
    writeln!(writer, "Yearly savings:        {}", result.yearly_savings)?;
    writeln!(writer, "Installation cost:     {}", result.installation_cost)?;
    match &result.payback_years {
        Some(years) => writeln!(writer, "Payback period:        {years} years")?,
        None => writeln!(writer, "Payback period:        — (no yearly savings)")?,
    }
    writeln!(
        writer,
        "Assumes {} kW/m² panels and peak production at {}° tilt.",
        config.kw_per_sqm, config.optimal_angle_deg
    )?;

    if let Some(bill) = monthly_bill {
        let yearly_bill = bill * Decimal::from(12);
        if yearly_bill > Decimal::ZERO {
            let coverage = round_whole(result.yearly_savings / yearly_bill * Decimal::from(100));
            writeln!(
                writer,
                "Your savings would cover {coverage}% of your electricity bill."
            )?;
        }
    }
    writeln!(writer)?;
    Ok(())
}
