use serde_json::Value;

use crate::cli::config::AppConfig;
use crate::plan::runner::{PlanRunner, load_plans};
use crate::provider::snapshot::{PageSnapshot, load_snapshot, render_snapshot};
use crate::report::console::format_console_report;
use crate::report::report_model::RunReport;
use crate::trace::logger::TraceLogger;
use crate::transfer::sync::{copy, set_value};

// ============================================================================
// copy subcommand
// ============================================================================

pub struct CopyArgs<'a> {
    pub snapshot: &'a str,
    pub from: &'a str,
    pub to: &'a str,
    pub name: &'a str,
    pub to_name: Option<&'a str>,
    pub allow_multiple: bool,
    pub output: Option<&'a str>,
}

pub fn cmd_copy(
    args: &CopyArgs<'_>,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut snapshot = load_snapshot(args.snapshot)?;
    let from_scope = snapshot.select(args.from);
    let to_scope = snapshot.select(args.to);

    let written = copy(
        &mut snapshot,
        &from_scope,
        &to_scope,
        args.name,
        args.to_name,
        args.allow_multiple || config.transfer.allow_multiple,
    )?;

    eprintln!("Copied '{}' to {} control(s)", args.name, written);
    write_snapshot(&snapshot, args.output, config.output.pretty)
}

// ============================================================================
// set subcommand
// ============================================================================

pub struct SetArgs<'a> {
    pub snapshot: &'a str,
    pub to: &'a str,
    pub name: &'a str,
    pub value: &'a str,
    pub raw: bool,
    pub allow_multiple: bool,
    pub output: Option<&'a str>,
}

pub fn cmd_set(
    args: &SetArgs<'_>,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut snapshot = load_snapshot(args.snapshot)?;
    let to_scope = snapshot.select(args.to);
    let value = parse_literal(args.value, args.raw);

    let written = set_value(
        &mut snapshot,
        &value,
        &to_scope,
        args.name,
        args.allow_multiple || config.transfer.allow_multiple,
    )?;

    eprintln!("Set '{}' on {} control(s)", args.name, written);
    write_snapshot(&snapshot, args.output, config.output.pretty)
}

// ============================================================================
// run subcommand
// ============================================================================

/// Run sync plans and return whether all passed.
pub fn cmd_run(
    plan_path: &str,
    snapshot_path: &str,
    output: Option<&str>,
    config: &AppConfig,
    tracer: &TraceLogger,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let plans = load_plans(plan_path)?;

    if plans.is_empty() {
        eprintln!("No sync plans found at: {}", plan_path);
        return Ok(true);
    }

    if verbose > 0 {
        eprintln!("Running {} sync plans...", plans.len());
    }

    let mut snapshot = load_snapshot(snapshot_path)?;
    let runner = PlanRunner::new(config.transfer.allow_multiple);
    let start = std::time::Instant::now();

    let results = plans
        .iter()
        .map(|plan| runner.run(plan, &mut snapshot, tracer))
        .collect();

    let report = RunReport::from_results(plan_path, results)
        .with_duration(start.elapsed().as_millis());
    print!("{}", format_console_report(&report));

    if let Some(path) = output {
        let rendered = render_snapshot(&snapshot, Some(path), config.output.pretty)?;
        std::fs::write(path, rendered)?;
    }

    Ok(report.all_passed())
}

// ============================================================================
// Helpers
// ============================================================================

/// Interpret a command-line literal. Valid JSON is used as-is so `true`
/// reaches a checkbox as a boolean; anything else is a plain string.
pub fn parse_literal(input: &str, raw: bool) -> Value {
    if raw {
        return Value::String(input.to_string());
    }
    serde_json::from_str(input).unwrap_or_else(|_| Value::String(input.to_string()))
}

fn write_snapshot(
    snapshot: &PageSnapshot,
    output: Option<&str>,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = render_snapshot(snapshot, output, pretty)?;
    match output {
        Some(path) => std::fs::write(path, rendered)?,
        None => println!("{}", rendered),
    }
    Ok(())
}
