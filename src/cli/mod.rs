mod output;

use std::{path::PathBuf, process, time::Instant};

use clap::{
    builder::{styling::AnsiColor, Styles},
    ArgAction, Args, Parser, Subcommand,
};
use humantime::format_duration;
use log::{error, info};

use crate::{
    env::{self, DICTIONARY_VAR},
    error::Result,
    logger,
    phrases::Phrases,
};

use self::output::{print_list, print_stat, print_value};

const DEFAULT_TOP_COUNT: isize = 10;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, propagate_version = true, styles = cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the first phrase starting with a prefix
    First { prefix: String },

    /// Print the first phrases starting with a prefix, in dictionary order
    Top {
        prefix: String,

        /// Maximum number of phrases to print
        #[arg(
            short = 'n',
            long,
            value_name = "NUM",
            default_value_t = DEFAULT_TOP_COUNT,
            allow_negative_numbers = true,
        )]
        count: isize,
    },

    /// Print the number of phrases starting with a prefix
    Count {
        #[arg(default_value = "")]
        prefix: String,
    },

    /// Print the only phrase starting with a prefix, failing if there are several
    Unique { prefix: String },

    /// Print the longest completion shared by every phrase starting with a prefix
    Complete { prefix: String },

    /// Check that the dictionary is sorted
    Check,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Dictionary file, one phrase per line [env: AUTOCOMPLETE_DICTIONARY]
    #[arg(short, long, global = true, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Sort the dictionary after loading instead of requiring it to be sorted
    #[arg(long, global = true, default_value_t = false)]
    pub sort: bool,

    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Print timing information
    #[arg(long, global = true, default_value_t = false)]
    pub stats: bool,

    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

pub fn main() {
    let cli = Cli::parse();
    logger::init(cli.global.verbose, cli.global.quiet);

    if let Err(err) = run(cli) {
        error!("{err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let global = cli.global;
    let path = match global.dictionary {
        Some(path) => path,
        None => env::var(DICTIONARY_VAR)?.into(),
    };

    let load_start = Instant::now();
    let phrases = Phrases::load(&path, global.sort)?;
    let load_time = load_start.elapsed();

    let query_start = Instant::now();
    match cli.command {
        Command::First { prefix } => {
            print_value(global.json, &prefix, phrases.find_first(&prefix))?;
        }
        Command::Top { prefix, count } => {
            print_list(global.json, &prefix, &phrases.top(&prefix, count))?;
        }
        Command::Count { prefix } => {
            print_value(global.json, &prefix, Some(phrases.count(&prefix)))?;
        }
        Command::Unique { prefix } => {
            print_value(global.json, &prefix, Some(phrases.find_one(&prefix)?))?;
        }
        Command::Complete { prefix } => {
            print_value(global.json, &prefix, phrases.common_completion(&prefix))?;
        }
        Command::Check => {
            let style = AnsiColor::Green.on_default();
            info!("{style}sorted{style:#} {} phrases", phrases.len());
        }
    }
    let query_time = query_start.elapsed();

    if global.stats {
        print_stat("phrases", phrases.len());
        print_stat("load time", format_duration(load_time));
        print_stat("query time", format_duration(query_time));
    }

    Ok(())
}

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::BrightMagenta.on_default())
        .usage(AnsiColor::BrightMagenta.on_default())
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightCyan.on_default())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Command};

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_negative_count() {
        let cli = Cli::try_parse_from(["autocomplete", "top", "ca", "-n", "-3"]).unwrap();
        assert!(matches!(cli.command, Command::Top { count: -3, .. }));
    }

    #[test]
    fn parse_count_default_prefix() {
        let cli = Cli::try_parse_from(["autocomplete", "count", "-d", "words.txt"]).unwrap();
        assert!(matches!(cli.command, Command::Count { ref prefix } if prefix.is_empty()));
        assert!(cli.global.dictionary.is_some());
    }
}
