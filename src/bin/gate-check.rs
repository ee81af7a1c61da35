use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use lead_intel_web::config::{load_config, GateConfig, WebConfig};
use lead_intel_web::GatePolicy;

/// `gate-check [--config p] --path /x [--authenticated]`
/// or `gate-check validate --config p`.
#[derive(Parser)]
#[command(name = "gate-check")]
#[command(about = "Inspect access gate decisions offline", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Request path to evaluate, e.g. /dashboard
    #[arg(short, long)]
    path: Option<String>,

    /// Treat the request as carrying the auth cookie
    #[arg(short, long, requires = "path")]
    authenticated: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration file
    Validate,
}

/// JSON report of what the gate does with `path`.
fn evaluate(gate: &GateConfig, path: &str, authenticated: bool) -> Value {
    let policy = GatePolicy::from_config(gate);
    let mut report = json!({ "path": path, "authenticated": authenticated });

    let outcome = if policy.is_excluded(path) {
        json!({ "decision": "excluded" })
    } else {
        serde_json::to_value(policy.evaluate(path, authenticated))
            .unwrap_or_else(|e| json!({ "error": e.to_string() }))
    };

    if let (Some(report), Value::Object(fields)) = (report.as_object_mut(), outcome) {
        report.extend(fields);
    }
    report
}

fn run(cli: Cli) -> Result<Value, String> {
    let config = match &cli.config {
        Some(path) => load_config(path).map_err(|e| e.to_string())?,
        None => WebConfig::default(),
    };

    match (cli.command, cli.path) {
        (Some(Commands::Validate), _) => Ok(json!({ "valid": true, "gate": config.gate })),
        (None, Some(path)) => Ok(evaluate(&config.gate, &path, cli.authenticated)),
        (None, None) => Err("either --path or the validate subcommand is required".to_string()),
    }
}

fn main() -> ExitCode {
    let output = run(Cli::parse()).and_then(|value| {
        serde_json::to_string_pretty(&value).map_err(|e| e.to_string())
    });

    match output {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
