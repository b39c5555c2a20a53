//! Command-line interface for dekl
//! This binary reads dekl configuration text from standard input and writes
//! the converted document to a file.
//!
//! Usage:
//!   dekl `<output>` [--format `<format>`] [--on-duplicate `<policy>`] [--verbose]

use std::fs;
use std::io::Read;

use clap::{Arg, ArgAction, Command};
use dekl_parser::dekl::error::ParseError;
use dekl_parser::dekl::formats;
use dekl_parser::dekl::parsing::{self, DuplicatePolicy, ParseOptions};

fn main() {
    let matches = Command::new("dekl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts dekl configuration text from stdin into TOML")
        .arg(
            Arg::new("output")
                .help("Path of the output file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'toml' or 'json'")
                .default_value("toml"),
        )
        .arg(
            Arg::new("on-duplicate")
                .long("on-duplicate")
                .help("Duplicate constant policy: 'reject' or 'overwrite'")
                .default_value("reject"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Trace parsing details to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let output = matches
        .get_one::<String>("output")
        .expect("output is required");
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default");
    let policy = matches
        .get_one::<String>("on-duplicate")
        .expect("on-duplicate has a default");
    let verbose = matches.get_flag("verbose");

    let options = match policy.as_str() {
        "reject" => ParseOptions::default(),
        "overwrite" => ParseOptions {
            duplicates: DuplicatePolicy::Overwrite,
        },
        other => {
            eprintln!(
                "Error: unknown duplicate policy '{}', expected 'reject' or 'overwrite'",
                other
            );
            std::process::exit(1);
        }
    };

    handle_convert_command(output, format, &options, verbose);
}

/// Handle the convert command: stdin -> parse -> serialize -> output file.
fn handle_convert_command(path: &str, format: &str, options: &ParseOptions, verbose: bool) {
    let mut source = String::new();
    if let Err(error) = std::io::stdin().read_to_string(&mut source) {
        eprintln!("Error: failed to read stdin: {}", error);
        std::process::exit(1);
    }

    let document = match parsing::parse_with_options(&source, options) {
        Ok(document) => document,
        Err(error) => {
            if verbose {
                if let ParseError::Syntax(line) = &error {
                    eprintln!("Debug: offending line -> {:?}", line);
                }
            }
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    };

    if verbose {
        eprintln!("Debug: parsed document -> {:?}", document);
    }

    let rendered = match format {
        "toml" => formats::to_toml_string(&document),
        "json" => formats::to_json_string(&document),
        other => {
            eprintln!("Error: unknown format '{}', expected 'toml' or 'json'", other);
            std::process::exit(1);
        }
    };
    let rendered = rendered.unwrap_or_else(|error| {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    });

    if let Err(error) = fs::write(path, rendered) {
        eprintln!("Error: failed to write {}: {}", path, error);
        std::process::exit(1);
    }

    println!("{} file written: {}", format.to_uppercase(), path);
}
