//! RISC-V PMP Checker CLI.
//!
//! Loads a PMP configuration table and reports whether one memory access
//! would be allowed or fault.
//!
//! # Usage
//!
//! ```text
//! pmp-check pmp_configuration.txt 0xaddress M/S/U R/W/X
//! ```

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use log::{Level, LevelFilter};
use serde::Serialize;
use std::ffi::OsString;
use std::process;

extern crate pmp_check;

use pmp_check::common::{AccessType, Error, Result};
use pmp_check::config::{Config, OutputFormat};
use pmp_check::core::arch::mode::PrivilegeMode;
use pmp_check::core::pmp::{AccessRequest, PolicyResolver, Resolution};
use pmp_check::loader;
use pmp_check::logger::StderrLogger;

static LOGGER: StderrLogger = StderrLogger::new(Level::Warn);

/// Number of positional arguments: table file, address, mode, operation.
const POSITIONALS: usize = 4;

/// Command-line arguments for the PMP checker.
#[derive(Parser, Debug)]
#[command(author, version, about = "RISC-V Physical Memory Protection Checker")]
struct Args {
    /// Table file: 64 pmpcfg lines followed by 64 pmpaddr lines, in hex.
    config_file: String,

    /// Physical address to check, with a 0x prefix.
    address: String,

    /// Privilege mode of the access: M, S or U.
    mode: String,

    /// Operation: R, W or X.
    operation: String,

    /// Optional TOML settings file.
    #[arg(short, long)]
    settings: Option<String>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Machine-readable result emitted with `--json`.
#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    resolution: Resolution,
    address: String,
    mode: PrivilegeMode,
    privilege_level: u8,
    operation: AccessType,
}

/// Reorders raw arguments so the positionals reach clap after a `--` escape.
///
/// Options are recognised before the table file and after the operation.
/// Once the table file is seen, the next three tokens are positional even if
/// they start with `-`, so `0x10 -v R` is a bad privilege mode rather than a
/// verbosity flag.
fn normalize_args<I: IntoIterator<Item = OsString>>(raw: I) -> Vec<OsString> {
    let mut raw = raw.into_iter();
    let mut options: Vec<OsString> = raw.next().into_iter().collect();
    let mut positionals = Vec::new();

    while let Some(arg) = raw.next() {
        if !positionals.is_empty() && positionals.len() < POSITIONALS {
            positionals.push(arg);
            continue;
        }
        match arg.to_str() {
            Some("--") => {
                positionals.extend(raw.by_ref());
            }
            Some("--settings") => {
                options.push(arg);
                options.extend(raw.next());
            }
            Some(s) if s.starts_with("--") => options.push(arg),
            // `-s` ending a short cluster takes the next token as its value.
            Some(s) if s.starts_with('-') && s.len() > 1 => {
                let takes_value = s[1..].find('s') == Some(s.len() - 2);
                options.push(arg);
                if takes_value {
                    options.extend(raw.next());
                }
            }
            _ => positionals.push(arg),
        }
    }

    options.push(OsString::from("--"));
    options.extend(positionals);
    options
}

/// Main entry point for the PMP checker.
///
/// # Behavior
///
/// 1. **Arguments**: Wrong argument counts print the usage line and exit 1.
/// 2. **Validation**: The address, privilege mode and operation are checked in that
///    order, before any file is read.
/// 3. **Loading**: The settings file (if any) and the 128-line table are read.
/// 4. **Resolution**: The access is resolved and "Access allowed" or "Access fault"
///    is printed. Both outcomes exit 0; any input error exits 1.
fn main() {
    let args = match Args::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                println!("{}", Error::Usage);
                process::exit(1);
            }
        },
    };

    if let Err(e) = LOGGER.install() {
        eprintln!("[!] could not install logger: {}", e);
    }

    if let Err(e) = run(&args) {
        println!("{}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let address = loader::parse_address(&args.address)?;
    let privilege: PrivilegeMode = args.mode.parse()?;
    let access: AccessType = args.operation.parse()?;

    let config = match &args.settings {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    LOGGER.update_log_level(log_level(args.verbose, config.general.trace));

    let table = loader::load_table(&args.config_file)?;

    let request = AccessRequest::new(address, privilege, access);
    let resolution = PolicyResolver::new(&table)
        .with_napot_decode(config.pmp.napot_decode)
        .explain(&request);

    if args.json || config.general.output == OutputFormat::Json {
        let report = Report {
            resolution,
            address: format!("{:#x}", address),
            mode: privilege,
            privilege_level: privilege.to_u8(),
            operation: access,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", resolution.decision);
    }
    Ok(())
}

fn log_level(verbose: u8, trace: bool) -> LevelFilter {
    if trace || cfg!(feature = "always-trace") {
        return LevelFilter::Trace;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
