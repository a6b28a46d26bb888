mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Commands, Format};
use diffly::config::Config;
use diffly::export::{render, write_export, ExportFormat};
use diffly::serialization::ToPlainText;
use diffly::share::ShareState;
use diffly::{build_diff_with, DiffResult, DifflyError, ViewMode};
use log::{debug, warn};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    debug!("{:?}", config);

    match cli.command {
        Commands::Compare {
            original,
            modified,
            mode,
            format,
            output,
        } => {
            let (left, right) = read_inputs(&original, &modified)?;
            let view = mode.map_or(config.view, ViewMode::from);
            let result = build_diff_with(&left, &right, &config.diff);
            match output {
                Some(dir) => {
                    let export = format
                        .export_format()
                        .context("JSON output can only be printed, not saved")?;
                    let path = write_export(&result, export, &dir)?;
                    println!("{}", path.display());
                }
                None => print!("{}", present(&result, format, view)?),
            }
        }
        Commands::Share {
            original,
            modified,
            mode,
        } => {
            let (left, right) = read_inputs(&original, &modified)?;
            let state = ShareState::new(left, right, mode.map_or(config.view, ViewMode::from));
            let link = state.to_query_with_limit(config.share.max_param_length);
            if let Some(warning) = link.warning() {
                warn!("{}", warning);
            }
            println!("?{}", link.query);
        }
        Commands::Open { query, format } => {
            let state = ShareState::from_query(&query);
            let result = build_diff_with(&state.left, &state.right, &config.diff);
            print!("{}", present(&result, format, state.mode)?);
        }
    }

    Ok(())
}

/// `-v` turns on info, `-vv` debug; `RUST_LOG` still wins when set.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read_inputs(original: &Path, modified: &Path) -> Result<(String, String)> {
    if is_stdin(original) && is_stdin(modified) {
        bail!(DifflyError::InvalidArgument(
            "only one of the two texts can come from stdin".to_string()
        ));
    }
    Ok((read_input(original)?, read_input(modified)?))
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn present(result: &DiffResult, format: Format, view: ViewMode) -> Result<String> {
    let text = match (format.export_format(), view) {
        (None, _) => format!("{}\n", serde_json::to_string_pretty(result)?),
        (Some(ExportFormat::Text), ViewMode::Inline) => format!(
            "{}\n\n{}\n",
            result.summary.to_plain_text(),
            result.inline.to_plain_text()
        ),
        (Some(export), _) => render(result, export),
    };
    Ok(text)
}
