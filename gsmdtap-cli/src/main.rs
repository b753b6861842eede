//! gsmdtap command line decoder
//!
//! Decodes hex encoded DTAP frames given as arguments, read from a file or
//! from stdin, one frame per line.

mod input;
mod render;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use gsmdtap_codec::{Association, CallAssociation, DtapDecoder, OpaqueSubDecoder, PartyRole};
use gsmdtap_common::{init_logging, DecoderConfig, LogLevel};

#[derive(Parser, Debug)]
#[command(name = "gsmdtap")]
#[command(author, version, about = "Decode GSM A-interface DTAP frames", long_about = None)]
pub struct Args {
    /// Hex encoded frames; read from --file or stdin when absent
    #[arg(value_name = "HEX")]
    pub frames: Vec<String>,

    /// File with one hex frame per line
    #[arg(short = 'f', long = "file", value_name = "PATH", conflicts_with = "frames")]
    pub file: Option<PathBuf>,

    /// YAML decoder configuration
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Overrides the configured log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print one summary line per frame instead of the field tree
    #[arg(short = 's', long = "summary")]
    pub summary: bool,

    /// Report embedded payloads as opaque octets
    #[arg(long = "no-embedded")]
    pub no_embedded: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            eprintln!("ERROR: {failed} frame(s) could not be parsed");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns the number of input lines that were not valid hex.
fn run() -> Result<usize> {
    let args = Args::parse();
    let config = load_config(&args)?;
    init_logging(config.log_level);
    tracing::debug!(?config, "decoder configuration");

    let lines = if !args.frames.is_empty() {
        args.frames.clone()
    } else if let Some(path) = &args.file {
        let file = File::open(path)
            .with_context(|| format!("Failed to open frame file {}", path.display()))?;
        input::read_lines(BufReader::new(file))
            .with_context(|| format!("Failed to read frame file {}", path.display()))?
    } else {
        input::read_lines(io::stdin().lock()).context("Failed to read frames from stdin")?
    };

    // Frames of one run are treated as one connection.
    let decoder = DtapDecoder::with_config(config, Arc::new(OpaqueSubDecoder));
    let mut association = CallAssociation::new();
    let mut failed = 0;
    for (index, line) in lines.iter().enumerate() {
        let number = index + 1;
        let frame = match input::parse_frame(line) {
            Ok(frame) => frame,
            Err(e) => {
                eprintln!("frame {number}: {e}");
                failed += 1;
                continue;
            }
        };
        let msg = decoder.decode_with_association(&frame, &mut association);
        if args.summary {
            println!("{}", render::render_summary(number, &msg));
        } else {
            println!("{}", render::render_tree(number, &msg));
        }
    }

    for role in [PartyRole::Calling, PartyRole::Called] {
        if let Some(number) = association.party(role) {
            tracing::info!(?role, number, "party number");
        }
    }
    Ok(failed)
}

fn load_config(args: &Args) -> Result<DecoderConfig> {
    let mut config = match &args.config {
        Some(path) => DecoderConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DecoderConfig::default(),
    };
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    if args.no_embedded {
        config.dissect_embedded = false;
    }
    Ok(config)
}
