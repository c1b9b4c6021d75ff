use std::io::{self, Write};

use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

pub fn init(verbose: u8, quiet: u8) {
    env_logger::Builder::new()
        .format(format)
        .filter_level(level_from_args(verbose, quiet))
        .init();
}

fn level_from_args(verbose: u8, quiet: u8) -> LevelFilter {
    match i16::from(verbose) - i16::from(quiet) {
        ..=-2 => LevelFilter::Error,
        -1 => LevelFilter::Warn,
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn format(f: &mut Formatter, record: &Record) -> io::Result<()> {
    let level = record.level();
    let style = f.default_level_style(level);
    let prefix = level_prefix(level);
    writeln!(f, "{style}{prefix}{style:#}{}", record.args())
}

fn level_prefix(level: Level) -> &'static str {
    match level {
        Level::Info => "",
        Level::Debug => "debug: ",
        Level::Trace => "trace: ",
        Level::Warn => "warning: ",
        Level::Error => "error: ",
    }
}
