use clap::{Args, Parser, Subcommand};
use commission_calc::application::engine::CommissionEngine;
use commission_calc::application::form::CommissionForm;
use commission_calc::config::{CalculatorConfig, OutputFormat};
use commission_calc::domain::input::Field;
use commission_calc::error::CommissionError;
use commission_calc::interfaces::csv::input_reader::InputReader;
use commission_calc::interfaces::csv::result_writer::ResultWriter;
use commission_calc::interfaces::report::{write_fields, write_json, write_report};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(author, version, about = "Monthly sales commission calculator", long_about = None)]
struct Cli {
    /// Output format for `calc` and `form` (overrides COMMISSION_OUTPUT_FORMAT)
    #[arg(long, value_enum, global = true)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute one payout from the given metrics
    Calc(CalcArgs),
    /// Compute a payout for every row of a CSV file and write the results as CSV
    Batch {
        /// Input CSV file, one period per row
        input: PathBuf,
    },
    /// Read `field=value` edits from stdin and print the updated payout after each one.
    /// `fields` lists the field names, `reset` restores the defaults and `quit` exits.
    Form,
}

// Metric values are taken as raw text: anything that is not a
// non-negative number counts as zero.
#[derive(Args)]
struct CalcArgs {
    /// Target count of plan activations (defaults to COMMISSION_GROSS_ADD_GOAL or 20)
    #[arg(long, allow_hyphen_values = true)]
    gross_add_goal: Option<String>,
    /// Target accessory revenue (defaults to COMMISSION_ACCESSORY_GOAL or 500)
    #[arg(long, allow_hyphen_values = true)]
    accessory_goal: Option<String>,
    /// $30 plan activations
    #[arg(long, allow_hyphen_values = true)]
    plans30: Option<String>,
    /// $40 plan activations
    #[arg(long, allow_hyphen_values = true)]
    plans40: Option<String>,
    /// $55 plan activations
    #[arg(long, allow_hyphen_values = true)]
    plans55: Option<String>,
    /// $60 plan activations
    #[arg(long, allow_hyphen_values = true)]
    plans60: Option<String>,
    /// Device upgrades
    #[arg(long, allow_hyphen_values = true)]
    upgrades: Option<String>,
    /// Auto-pay enrollments
    #[arg(long, allow_hyphen_values = true)]
    auto_pay: Option<String>,
    /// Protection plan enrollments
    #[arg(long, allow_hyphen_values = true)]
    protect: Option<String>,
    /// Accessory revenue in dollars
    #[arg(long, allow_hyphen_values = true)]
    accessories: Option<String>,
    /// PPP activations on a $40+ plan
    #[arg(long, allow_hyphen_values = true)]
    ppp_activations: Option<String>,
    /// PPP accessory revenue in dollars
    #[arg(long, allow_hyphen_values = true)]
    ppp_accessories: Option<String>,
    /// AIA units (paid after 90 days, not part of the total)
    #[arg(long, allow_hyphen_values = true)]
    aia: Option<String>,
}

impl CalcArgs {
    fn edits(&self) -> impl Iterator<Item = (Field, &str)> {
        [
            (Field::GrossAddGoal, &self.gross_add_goal),
            (Field::AccessoryGoal, &self.accessory_goal),
            (Field::Plans30, &self.plans30),
            (Field::Plans40, &self.plans40),
            (Field::Plans55, &self.plans55),
            (Field::Plans60, &self.plans60),
            (Field::Upgrades, &self.upgrades),
            (Field::AutoPayEnabled, &self.auto_pay),
            (Field::ProtectEnabled, &self.protect),
            (Field::AccessoriesValue, &self.accessories),
            (Field::GrossAddsWith40Plus, &self.ppp_activations),
            (Field::PppAccessoryRevenue, &self.ppp_accessories),
            (Field::AiaCount, &self.aia),
        ]
        .into_iter()
        .filter_map(|(field, raw)| raw.as_deref().map(|raw| (field, raw)))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    let config = CalculatorConfig::new();
    let format = cli.output.unwrap_or(config.output_format);
    debug!(?config, %format, "configuration loaded");

    match cli.command {
        Command::Calc(args) => run_calc(&config, format, &args),
        Command::Batch { input } => run_batch(input),
        Command::Form => run_form(&config, format),
    }
}

fn run_calc(config: &CalculatorConfig, format: OutputFormat, args: &CalcArgs) -> Result<()> {
    let mut form = CommissionForm::with_defaults(config);
    for (field, raw) in args.edits() {
        form.edit(field, raw);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_form(&mut out, &form, format).into_diagnostic()?;
    out.flush().into_diagnostic()?;
    Ok(())
}

fn run_batch(path: PathBuf) -> Result<()> {
    let file = File::open(&path).into_diagnostic()?;
    let reader = InputReader::new(file);

    let stdout = io::stdout();
    let mut writer = ResultWriter::new(stdout.lock());
    let mut written = 0usize;
    let mut skipped = 0usize;

    for (index, input) in reader.inputs().enumerate() {
        let row = index + 1;
        match input {
            Ok(input) => {
                writer
                    .write_result(row, &CommissionEngine::compute(&input))
                    .into_diagnostic()?;
                written += 1;
            }
            Err(e) => {
                eprintln!("Error reading row {}: {}", row, e);
                skipped += 1;
            }
        }
    }
    writer.flush().into_diagnostic()?;

    info!(path = %path.display(), written, skipped, "batch complete");
    Ok(())
}

fn run_form(config: &CalculatorConfig, format: OutputFormat) -> Result<()> {
    let mut form = CommissionForm::with_defaults(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    print_form(&mut out, &form, format).into_diagnostic()?;

    for line in stdin.lock().lines() {
        let line = line.into_diagnostic()?;
        let command = line.trim();
        match command {
            "" => continue,
            "quit" | "exit" => break,
            "show" => {}
            "fields" => {
                write_fields(&mut out, form.input()).into_diagnostic()?;
                continue;
            }
            "reset" => {
                form.reset();
            }
            edit => {
                if let Err(e) = form.apply(edit) {
                    eprintln!("Error applying edit: {}", e);
                    if matches!(e, CommissionError::UnknownField(_)) {
                        eprintln!("Enter `fields` to list the field names");
                    }
                    continue;
                }
            }
        }
        writeln!(out).into_diagnostic()?;
        print_form(&mut out, &form, format).into_diagnostic()?;
    }

    out.flush().into_diagnostic()?;
    Ok(())
}

fn print_form<W: Write>(
    out: &mut W,
    form: &CommissionForm,
    format: OutputFormat,
) -> std::result::Result<(), CommissionError> {
    let input = form.input();
    let result = form.result();
    if input.gross_add_goal.is_zero() && !input.total_gross_adds().is_zero() {
        warn!("gross add goal is zero; goal completion is reported as 0%");
    }

    match format {
        OutputFormat::Text => write_report(out, result)?,
        OutputFormat::Json => write_json(out, input, result)?,
    }
    Ok(())
}
