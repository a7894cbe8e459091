use clap::Parser;
use form_transfer::cli::commands::{CopyArgs, SetArgs, cmd_copy, cmd_run, cmd_set};
use form_transfer::cli::config::{Cli, Commands, load_config, resolve_trace_path, verbosity_filter};
use form_transfer::trace::logger::TraceLogger;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref());
    let tracer = match resolve_trace_path(cli.trace.as_deref(), &config) {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    match cli.command {
        Commands::Copy {
            snapshot,
            from,
            to,
            name,
            to_name,
            allow_multiple,
            output,
        } => {
            cmd_copy(
                &CopyArgs {
                    snapshot: &snapshot,
                    from: &from,
                    to: &to,
                    name: &name,
                    to_name: to_name.as_deref(),
                    allow_multiple,
                    output: output.as_deref(),
                },
                &config,
            )?;
        }
        Commands::Set {
            snapshot,
            to,
            name,
            value,
            raw,
            allow_multiple,
            output,
        } => {
            cmd_set(
                &SetArgs {
                    snapshot: &snapshot,
                    to: &to,
                    name: &name,
                    value: &value,
                    raw,
                    allow_multiple,
                    output: output.as_deref(),
                },
                &config,
            )?;
        }
        Commands::Run {
            plan,
            snapshot,
            output,
        } => {
            let all_passed = cmd_run(
                &plan,
                &snapshot,
                output.as_deref(),
                &config,
                &tracer,
                cli.verbose,
            )?;
            if !all_passed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
