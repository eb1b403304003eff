use crate::stopwatch::StartTime;
use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ArgGroup, ColorChoice, Command,
};
use serde_json::Value;
use std::{fs, path::PathBuf};

pub fn validator_is_file() -> ValueParser {
    ValueParser::from(move |s: &str| -> std::result::Result<PathBuf, String> {
        if let Ok(metadata) = fs::metadata(s) {
            if metadata.is_file() {
                return Ok(PathBuf::from(s));
            }
        }

        Err(format!("Invalid file path of file does not exists: '{s}'"))
    })
}

/// Only floats are accepted, `123` is rejected while `123.0` is not
pub fn validator_start_time() -> ValueParser {
    ValueParser::from(move |s: &str| -> std::result::Result<f64, String> {
        let value = serde_json::from_str::<Value>(s).unwrap_or_else(|_| Value::String(s.into()));

        StartTime::try_from(&value)
            .map(StartTime::as_f64)
            .map_err(|e| e.to_string())
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("lapwatch")
        .about("Stopwatch with named laps that serializes itself to JSON ⏱")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a YAML file with the steps to time")
                .value_parser(validator_is_file())
                .value_name("FILE"),
        )
        .arg(
            Arg::new("step")
                .short('s')
                .long("step")
                .help("Shell command to time, a lap is recorded when it finishes")
                .action(ArgAction::Append)
                .value_name("CMD"),
        )
        .arg(
            Arg::new("start-time")
                .long("start-time")
                .help("Start the stopwatch at this time instead of now, must be a float")
                .value_parser(validator_start_time())
                .allow_hyphen_values(true)
                .value_name("SECONDS"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Print the stopwatch as indented JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase verbosity, -vv for debug")
                .action(ArgAction::Count),
        )
        .group(
            ArgGroup::new("steps")
                .args(["config", "step"])
                .required(true)
                .multiple(true),
        )
}
