// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stepgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stepgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Stepgraph CLI entrypoint.
//!
//! Reads steps or run nodes as JSON and prints the Mermaid flowchart definition on stdout.
//! Logging goes to stderr and is filtered by `STEPGRAPH_LOG` (or `RUST_LOG`), default `warn`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use stepgraph::load::load_graph_input;
use stepgraph::{compute_style, export_graph, GraphInput, GraphMode};

const LOG_ENV: &str = "STEPGRAPH_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Runtime nodes with status styling.
    Status,
    /// Static step definitions.
    Config,
}

impl From<Mode> for GraphMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Status => GraphMode::Status,
            Mode::Config => GraphMode::Config,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "stepgraph", version, about = "Print a Mermaid flowchart for workflow steps")]
struct Cli {
    /// JSON file with steps or nodes; `-` reads stdin.
    input: PathBuf,

    #[arg(long, value_enum, default_value_t = Mode::Status)]
    mode: Mode,

    /// Emit `click` statements for every node.
    #[arg(long)]
    clickable: bool,

    /// Also print the container style as JSON after the definition.
    #[arg(long)]
    style: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Definition, then the style JSON on its own line when requested.
fn format_output(
    input: Option<&GraphInput>,
    clickable: bool,
    style: bool,
) -> Result<String, serde_json::Error> {
    let mut out = export_graph(input, clickable);
    if style {
        let style = compute_style(input.map(GraphInput::len));
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&serde_json::to_string(&style)?);
    }
    Ok(out)
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let input = load_graph_input(&cli.input, cli.mode.into())?;
    Ok(format_output(input.as_ref(), cli.clickable, cli.style)?)
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(out) => {
            if !out.is_empty() {
                println!("{out}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            eprintln!("stepgraph: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{format_output, Cli, Mode};
    use stepgraph::{GraphInput, Step};

    #[test]
    fn defaults_to_status_mode() {
        let cli = Cli::try_parse_from(["stepgraph", "run.json"]).unwrap();
        assert_eq!(cli.mode, Mode::Status);
        assert!(!cli.clickable);
        assert!(!cli.style);
    }

    #[test]
    fn parses_flags() {
        let cli =
            Cli::try_parse_from(["stepgraph", "-", "--mode", "config", "--clickable", "--style"])
                .unwrap();
        assert_eq!(cli.mode, Mode::Config);
        assert!(cli.clickable && cli.style);
        assert_eq!(cli.input.to_str(), Some("-"));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["stepgraph", "x.json", "--mode", "graph"]).is_err());
    }

    #[test]
    fn style_without_definition_has_no_leading_blank_line() {
        let absent = format_output(None, false, true).unwrap();
        assert_eq!(absent.lines().count(), 1);
        assert!(absent.starts_with('{'), "{absent}");
        assert!(absent.contains(r#""width":"100%""#));

        let empty = format_output(Some(&GraphInput::Config(Vec::new())), false, true).unwrap();
        assert!(empty.starts_with('{'), "{empty}");
        assert!(empty.contains(r#""width":"0px""#));
    }

    #[test]
    fn style_follows_definition_on_its_own_line() {
        let input = GraphInput::Config(vec![Step::new("only")]);
        let out = format_output(Some(&input), false, true).unwrap();
        let lines = out.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "flowchart LR;");
        assert!(lines[lines.len() - 2].starts_with("classDef skipped"));
        assert!(lines[lines.len() - 1].contains(r#""width":"240px""#));
    }
}
