// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Skema CLI entrypoint.
//!
//! By default this runs the kiosk TUI over a schedule document. `--print` renders the board
//! once to stdout and `--schema` prints the JSON Schema of the document format.

use std::error::Error;
use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::Duration;

use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

use skema::layout::{BoardGeometry, DEFAULT_ROWS_PER_HOUR};
use skema::pass::{run_pass, PassOptions, WallClock};
use skema::store::{DocumentSource, FileSource, StaticSource};
use skema::tui::{KioskOptions, DEFAULT_REFRESH_INTERVAL};

const DEFAULT_DOCUMENT: &str = "schedule.json";
const DEFAULT_PRINT_WIDTH: u16 = 80;
const LOG_ENV: &str = "SKEMA_LOG";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<document.json>] [--date YYYY-MM-DD] [--rows-per-hour N] \
         [--refresh-secs N] [--no-autoscroll] [--log <path>]\n  {program} --demo [...]\n  \
         {program} [<document.json> | --demo] --print [--width N] [--height N] [--date YYYY-MM-DD] \
         [--rows-per-hour N]\n  {program} --schema\n\n\
         The document defaults to ./{DEFAULT_DOCUMENT} and is re-read on every refresh \
         (default every {}s, or press r).\n\
         --demo uses a built-in demo schedule and cannot be combined with <document.json>.\n\
         --width/--height size the --print output; the kiosk uses the terminal size.\n\
         Logging is controlled by {LOG_ENV} (default info). The kiosk only logs with --log.",
        DEFAULT_REFRESH_INTERVAL.as_secs()
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    document: Option<String>,
    demo: bool,
    print: bool,
    schema: bool,
    date: Option<NaiveDate>,
    width: Option<u16>,
    height: Option<u16>,
    rows_per_hour: Option<u16>,
    refresh_secs: Option<u64>,
    no_autoscroll: bool,
    log: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => set_flag(&mut options.demo)?,
            "--print" => set_flag(&mut options.print)?,
            "--schema" => set_flag(&mut options.schema)?,
            "--no-autoscroll" => set_flag(&mut options.no_autoscroll)?,
            "--date" => {
                let raw = args.next().ok_or(())?;
                let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| ())?;
                set_once(&mut options.date, date)?;
            }
            "--width" => set_once(&mut options.width, parse_positive(args.next())?)?,
            "--height" => set_once(&mut options.height, parse_positive(args.next())?)?,
            "--rows-per-hour" => {
                set_once(&mut options.rows_per_hour, parse_positive(args.next())?)?;
            }
            "--refresh-secs" => {
                set_once(&mut options.refresh_secs, parse_positive(args.next())?)?;
            }
            "--log" => {
                let path = args.next().ok_or(())?;
                set_once(&mut options.log, path)?;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => set_once(&mut options.document, arg)?,
        }
    }

    if options.demo && options.document.is_some() {
        return Err(());
    }
    if options.schema && (options.print || options.demo || options.document.is_some()) {
        return Err(());
    }
    if !options.print && (options.width.is_some() || options.height.is_some()) {
        return Err(());
    }

    Ok(options)
}

fn set_flag(flag: &mut bool) -> Result<(), ()> {
    if *flag {
        return Err(());
    }
    *flag = true;
    Ok(())
}

fn set_once<T>(slot: &mut Option<T>, value: T) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    *slot = Some(value);
    Ok(())
}

fn parse_positive<T>(raw: Option<String>) -> Result<T, ()>
where
    T: std::str::FromStr + Default + PartialEq,
{
    let value = raw.ok_or(())?.parse::<T>().map_err(|_| ())?;
    if value == T::default() {
        return Err(());
    }
    Ok(value)
}

fn document_source(options: &CliOptions) -> Box<dyn DocumentSource> {
    if options.demo {
        return Box::new(StaticSource::demo());
    }
    let path = options.document.clone().unwrap_or_else(|| DEFAULT_DOCUMENT.to_owned());
    Box::new(FileSource::new(path))
}

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt().with_env_filter(log_filter()).with_writer(std::io::stderr).init();
}

fn init_file_logging(path: &str) -> Result<(), Box<dyn Error>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "skema".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.schema {
            init_stderr_logging();
            let schema = skema::format::document_schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
            return Ok(());
        }

        let rows_per_hour = options.rows_per_hour.unwrap_or(DEFAULT_ROWS_PER_HOUR);
        let source = document_source(&options);

        if options.print {
            init_stderr_logging();
            let geometry = BoardGeometry::new(options.width.unwrap_or(DEFAULT_PRINT_WIDTH))
                .with_rows_per_hour(rows_per_hour);
            let pass_options = PassOptions { date: options.date, geometry };
            let rendered = run_pass(source.as_ref(), &pass_options, WallClock::now())?;
            let limit = options.height.map_or(usize::MAX, usize::from);
            for line in rendered.board.text.lines().take(limit) {
                println!("{line}");
            }
            return Ok(());
        }

        if let Some(path) = &options.log {
            init_file_logging(path)?;
        }
        tracing::info!(source = %source.describe(), "starting kiosk");

        let kiosk = KioskOptions {
            date: options.date,
            rows_per_hour,
            refresh_interval: options
                .refresh_secs
                .map_or(DEFAULT_REFRESH_INTERVAL, Duration::from_secs),
            autoscroll: !options.no_autoscroll,
        };
        skema::tui::run(source, kiosk)
    })();

    if let Err(err) = result {
        eprintln!("skema: {err}");
        std::process::exit(1);
    }
}
