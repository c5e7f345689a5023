//! castinfo CLI — inspect the descriptions built from cast options.
//!
//! Commands:
//!   castinfo media <file|->    Build a media description
//!   castinfo load <file|->     Build a load request (media + autoplay + position)
//!   castinfo tracks <file|->   Build track descriptions from a JSON array
//!   castinfo style <file|->    Build a text track style
//!
//! Input is JSON from a file, or stdin when the argument is `-`.
//! Output is pretty-printed receiver JSON. Set RUST_LOG=debug to see
//! which keys and names were skipped.

use std::io::Read;
use std::process::ExitCode;

use castinfo_core::{CastOptions, TextStyleOptions, TrackOptions};
use serde_json::Value;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let input = match read_input(&args[1]) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match args[0].as_str() {
        "media" => cmd_media(&input),
        "load" => cmd_load(&input),
        "tracks" => cmd_tracks(&input),
        "style" => cmd_style(&input),
        other => {
            eprintln!("unknown command: {}", other);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(out) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_media(input: &Value) -> Result<String, String> {
    let media = castinfo_core::build_from_value(input).map_err(|e| e.to_string())?;
    log::info!(
        "castinfo: {} ({:?}, {} tracks)",
        media.content_url(),
        media.stream_type(),
        media.tracks().len()
    );
    pretty(&media)
}

fn cmd_load(input: &Value) -> Result<String, String> {
    let options = CastOptions::from_value(input).map_err(|e| e.to_string())?;
    let req = castinfo_core::build_load_request(&options).map_err(|e| e.to_string())?;
    pretty(&req)
}

fn cmd_tracks(input: &Value) -> Result<String, String> {
    let entries = input
        .as_array()
        .ok_or_else(|| "tracks input must be a JSON array".to_string())?;
    let tracks = TrackOptions::from_values(entries).map_err(|e| e.to_string())?;
    pretty(&castinfo_core::build_tracks(&tracks))
}

fn cmd_style(input: &Value) -> Result<String, String> {
    let style = castinfo_core::build_text_style(&TextStyleOptions::from_value(input));
    pretty(&style)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_input(source: &str) -> Result<Value, String> {
    let text = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("reading stdin: {}", e))?;
        buf
    } else {
        std::fs::read_to_string(source).map_err(|e| format!("reading {}: {}", source, e))?
    };
    serde_json::from_str(&text).map_err(|e| format!("parsing {}: {}", source, e))
}

fn pretty<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}

fn print_usage() {
    eprintln!(
        "usage: castinfo <command> <file|->

commands:
  media    Build a media description from cast options
  load     Build a load request (media + autoplay + playPosition)
  tracks   Build track descriptions from a JSON array
  style    Build a text track style"
    );
}
