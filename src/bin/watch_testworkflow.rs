//! CLI: render a test workflow execution from its notification stream.
//!
//! Live mode reads newline-delimited JSON notifications (from `--notifications` or stdin) and
//! renders step transitions interleaved with the log as they arrive. Raw mode (`--raw-log` and
//! `--result`) re-segments a complete log blob using the inline start hints.
//!
//! Usage: `watch_testworkflow --signature <FILE> [OPTIONS]`
//!
//! Set RUST_LOG=testworkflow_watch=debug for diagnostics on stderr.

use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use testworkflow_watch::{
  NdjsonSource, ResultSnapshot, StepSignature, Terminal, WatchConfig, flatten_signatures,
  print_details_hint, print_execution_summary, print_raw_log_lines, watch_logs,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Render a test workflow execution's log with live step status.
#[derive(Parser, Debug)]
#[command(name = "watch_testworkflow")]
#[command(
  after_help = r#"Environment variables (override the matching flags when set):
  TESTWORKFLOW_START_HINT   Regex recognising a step start line in raw logs; capture group 1
                            is the step reference. Default: ^\[start:([^\]\s]+)\]
  NO_COLOR                  Disable coloured output.

Examples:
  watch_testworkflow --signature sig.json --notifications stream.ndjson
  kubectl-notifications | watch_testworkflow --signature sig.json --execution-id 65f1
  watch_testworkflow --signature sig.json --raw-log run.log --result result.json"#
)]
struct Args {
  /// JSON array of step signatures of the execution
  #[arg(long, value_name = "FILE")]
  signature: PathBuf,

  /// Execution identifier shown in messages
  #[arg(long, value_name = "ID", default_value = "local")]
  execution_id: String,

  /// Newline-delimited JSON notifications. Default: stdin
  #[arg(long, value_name = "FILE", conflicts_with = "raw_log")]
  notifications: Option<PathBuf>,

  /// Complete log of the execution, rendered with the inline start hints
  #[arg(long, value_name = "FILE", requires = "result")]
  raw_log: Option<PathBuf>,

  /// Final result snapshot (JSON) used with --raw-log
  #[arg(long, value_name = "FILE", requires = "raw_log")]
  result: Option<PathBuf>,

  /// Start hint regex for raw logs. Overridden by TESTWORKFLOW_START_HINT if set
  #[arg(long, value_name = "REGEX")]
  start_hint: Option<String>,

  /// Disable coloured output
  #[arg(long)]
  no_color: bool,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> T {
  let text = match fs::read_to_string(path) {
    Ok(s) => s,
    Err(e) => {
      eprintln!("Error reading {} {}: {}", what, path.display(), e);
      process::exit(1);
    }
  };
  match serde_json::from_str(&text) {
    Ok(v) => v,
    Err(e) => {
      eprintln!("Error parsing {} {}: {}", what, path.display(), e);
      process::exit(1);
    }
  }
}

/// Prints the summary and the details hint; returns the exit code.
fn report<W: Write>(
  term: &mut Terminal<W>,
  result: Option<&ResultSnapshot>,
  execution_id: &str,
) -> io::Result<i32> {
  let code = print_execution_summary(term, result)?;
  print_details_hint(term, execution_id)?;
  term.flush()?;
  Ok(code)
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  let args = Args::parse();
  let config = match WatchConfig::from_env(args.no_color, args.start_hint.as_deref()) {
    Ok(c) => c,
    Err(e) => {
      eprintln!("Error: {}", e);
      process::exit(1);
    }
  };
  info!(execution_id = %args.execution_id, color = config.color, start_hint = config.start_hint.as_str(), "options (env or flags)");

  let signatures: Vec<StepSignature> = read_json(&args.signature, "signature");
  let mut term = Terminal::new(io::stdout(), config.color);

  let result = match (&args.raw_log, &args.result) {
    (Some(log_path), Some(result_path)) => {
      let result: ResultSnapshot = read_json(result_path, "result");
      let logs = match fs::read(log_path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
          eprintln!("Error reading log {}: {}", log_path.display(), e);
          process::exit(1);
        }
      };
      let steps = flatten_signatures(&signatures);
      if let Err(e) = print_raw_log_lines(&mut term, &logs, &steps, &result, &config.start_hint) {
        eprintln!("Error rendering log: {}", e);
        process::exit(1);
      }
      Some(result)
    }
    _ => {
      let source = match &args.notifications {
        Some(path) => NdjsonSource::from_file(path),
        None => NdjsonSource::stdin(),
      };
      match watch_logs(&mut term, &args.execution_id, &signatures, &source).await {
        Ok(result) => result,
        Err(failure) => {
          eprintln!("Error reading test workflow execution logs: {}", failure);
          if let Some(partial) = &failure.last_result {
            if let Err(e) = print_execution_summary(&mut term, Some(partial)) {
              warn!(error = %e, "failed to print summary of partial result");
            }
          }
          process::exit(1);
        }
      }
    }
  };

  let exit_code = match report(&mut term, result.as_ref(), &args.execution_id) {
    Ok(code) => code,
    Err(e) => {
      eprintln!("Error writing output: {}", e);
      1
    }
  };
  info!(exit_code, "watch finished");
  process::exit(exit_code);
}
