mod debug_report;

use lipsync::{Options, TableSet, convert_verbose_with};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lipsync=warn")))
        .with_writer(io::stderr)
        .init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let custom;
    let tables = match &config.tables {
        Some(path) => match TableSet::from_path(path) {
            Ok(loaded) => {
                custom = loaded;
                &custom
            }
            Err(err) => {
                eprintln!("error: failed to load tables from '{}': {err}", path.display());
                std::process::exit(1);
            }
        },
        None => TableSet::german(),
    };

    let opts = Options { normalize: config.normalize };
    let res = convert_verbose_with(&config.input, tables, &opts);

    if config.json {
        match serde_json::to_string_pretty(&res.sequence) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: failed to serialize output: {err}");
                std::process::exit(1);
            }
        }
    } else {
        debug_report::print_run(&config.input, tables.name(), &res, config.color);
    }
}

struct CliConfig {
    input: String,
    tables: Option<PathBuf>,
    normalize: bool,
    json: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut tables: Option<PathBuf> = None;
    let mut normalize = true;
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("lipsync {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => json = true,
            "--no-normalize" => normalize = false,
            "--tables" | "-t" => {
                let value = args.next().ok_or_else(|| "error: --tables expects a path".to_string())?;
                tables = Some(PathBuf::from(value));
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--tables=") => {
                tables = Some(PathBuf::from(arg.trim_start_matches("--tables=")));
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, tables, normalize, json, color })
}

fn set_input(slot: &mut Option<String>, value: String) -> Result<(), String> {
    if slot.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *slot = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "lipsync {version}

Rule-based text to viseme converter.

Usage:
  lipsync [OPTIONS] [--] <input...>
  lipsync [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text to convert. If omitted, reads remaining
                             args or stdin when no args are provided.
  -t, --tables <file.toml>   Load a custom table set instead of the built-in
                             German tables.
  --no-normalize             Skip number/symbol/diacritic normalization.
  --json                     Print the viseme sequence as JSON.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG                   Log filter (default: lipsync=warn).

Exit codes:
  0  Success.
  1  Table loading or output error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
