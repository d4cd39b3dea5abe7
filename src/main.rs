//! Wordle Suggest - CLI
//!
//! Filters a word list by Wordle clues and prints the candidates ranked by positional
//! letter frequency, one `<score> <word>` per line.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use wordle_suggest::{
    commands::{SuggestConfig, frequency_table, suggest_words},
    core::Lexicon,
    output::{print_suggestions, print_summary, print_table},
    wordlists::{DEFAULT_WORDLIST, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_suggest",
    about = "Suggest Wordle guesses from known clues, ranked by positional letter frequency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one word per line
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "WORDLE_WORDLIST",
        default_value = DEFAULT_WORDLIST
    )]
    wordlist: PathBuf,

    /// Print at most this many suggestions
    #[arg(short = 'n', long, global = true)]
    limit: Option<usize>,

    /// Print a summary of the clues and candidate count to stderr
    #[arg(long, global = true)]
    summary: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank candidate words (default when no command is given)
    Suggest(Clues),

    /// Show per-position letter frequencies of the candidates
    Table(Clues),
}

#[derive(Args)]
struct Clues {
    /// Known positions, e.g. "g.ea." ('.' or '_' for unknown)
    pattern: String,

    /// Letters known to be absent, e.g. "rt"
    excluded: Option<String>,

    /// One pattern per misplaced letter, e.g. ".r..." for an 'r' not in position 2
    misplaced: Vec<String>,
}

impl Clues {
    fn into_config(self, limit: Option<usize>) -> SuggestConfig {
        SuggestConfig::new(self.pattern, self.excluded.unwrap_or_default())
            .with_misplaced(self.misplaced)
            .with_limit(limit)
    }
}

/// Subcommand names, plus clap's own `help`
const COMMAND_NAMES: &[&str] = &["suggest", "table", "help"];

/// Global options that consume the following argument as their value
const VALUE_OPTIONS: &[&str] = &["-w", "--wordlist", "-n", "--limit"];

/// Insert `suggest` before the first positional argument unless it already names a command
///
/// Options and their values are skipped, so `-w words.txt table ..ea.` keeps `table` as the
/// command while `-w words.txt g.ea. rt` becomes `-w words.txt suggest g.ea. rt`. With no
/// positional at all the arguments are left for clap to report.
fn with_default_command<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let mut index = 1;
    while index < args.len() {
        let lossy = args[index].to_string_lossy();
        let arg: &str = &lossy;
        if arg == "--" || !arg.starts_with('-') || arg == "-" {
            break;
        }
        index += if takes_value(arg) { 2 } else { 1 };
    }

    let names_command = args
        .get(index)
        .map(|arg| COMMAND_NAMES.contains(&&*arg.to_string_lossy()));
    if names_command == Some(false) {
        args.insert(index, OsString::from("suggest"));
    }
    args
}

/// True for a value option on its own, or a short cluster like `-vvw` ending in one
fn takes_value(arg: &str) -> bool {
    if VALUE_OPTIONS.contains(&arg) {
        return true;
    }
    match arg.strip_prefix('-') {
        Some(cluster) if !cluster.starts_with('-') && cluster.len() > 1 => {
            let (flags, last) = cluster.split_at(cluster.len() - 1);
            (last == "w" || last == "n") && flags.chars().all(|c| c == 'v')
        }
        _ => false,
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn load_lexicon(path: &Path) -> Result<Lexicon> {
    load_from_file(path).with_context(|| {
        format!(
            "could not load word list (set --wordlist or WORDLE_WORDLIST): {}",
            path.display()
        )
    })
}

/// Treat a reader closing the pipe early as a normal exit
fn finish_output(result: io::Result<()>) -> Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("failed to write output"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse_from(with_default_command(std::env::args_os()));
    init_logging(cli.verbose);

    let lexicon = load_lexicon(&cli.wordlist)?;

    match cli.command {
        Commands::Suggest(clues) => run_suggest_command(clues, cli.limit, cli.summary, &lexicon),
        Commands::Table(clues) => run_table_command(clues, &lexicon),
    }
}

fn run_suggest_command(
    clues: Clues,
    limit: Option<usize>,
    summary: bool,
    lexicon: &Lexicon,
) -> Result<()> {
    let config = clues.into_config(limit);
    let result = suggest_words(&config, lexicon).context("invalid clues")?;

    if summary {
        print_summary(&result);
    }
    let mut out = io::stdout().lock();
    finish_output(print_suggestions(&mut out, &result))
}

fn run_table_command(clues: Clues, lexicon: &Lexicon) -> Result<()> {
    let config = clues.into_config(None);
    let result = frequency_table(&config, lexicon).context("invalid clues")?;

    let mut out = io::stdout().lock();
    finish_output(print_table(&mut out, &result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(with_default_command(args.iter().copied())).unwrap()
    }

    fn clues(command: &Commands) -> (&str, Option<&str>, Vec<&str>) {
        let (Commands::Suggest(c) | Commands::Table(c)) = command;
        (
            c.pattern.as_str(),
            c.excluded.as_deref(),
            c.misplaced.iter().map(String::as_str).collect(),
        )
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flag_before_table_command() {
        let cli = parse(&["x", "-w", "f", "table", "..ea."]);
        assert!(matches!(cli.command, Commands::Table(_)));
        assert_eq!(clues(&cli.command), ("..ea.", None, vec![]));
        assert_eq!(cli.wordlist, PathBuf::from("f"));
    }

    #[test]
    fn global_flag_before_suggest_command() {
        let cli = parse(&["x", "-w", "f", "suggest", "glean"]);
        assert!(matches!(cli.command, Commands::Suggest(_)));
        assert_eq!(clues(&cli.command), ("glean", None, vec![]));
    }

    #[test]
    fn bare_clues_default_to_suggest() {
        let cli = parse(&["x", "g.ea.", "rt", ".r...", "....t"]);
        assert!(matches!(cli.command, Commands::Suggest(_)));
        assert_eq!(
            clues(&cli.command),
            ("g.ea.", Some("rt"), vec![".r...", "....t"])
        );
    }

    #[test]
    fn flags_before_bare_clues() {
        let cli = parse(&["x", "-v", "--summary", "-n", "3", "--wordlist=f", "g.ea.", "rt"]);
        assert!(matches!(cli.command, Commands::Suggest(_)));
        assert_eq!(cli.limit, Some(3));
        assert!(cli.summary);
        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.wordlist, PathBuf::from("f"));
        assert_eq!(clues(&cli.command), ("g.ea.", Some("rt"), vec![]));
    }

    #[test]
    fn clustered_short_flags_take_value() {
        let cli = parse(&["x", "-vvw", "f", "table", "....."]);
        assert!(matches!(cli.command, Commands::Table(_)));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.wordlist, PathBuf::from("f"));
    }

    #[test]
    fn flags_after_command() {
        let cli = parse(&["x", "table", "..ea.", "-w", "f"]);
        assert!(matches!(cli.command, Commands::Table(_)));
        assert_eq!(cli.wordlist, PathBuf::from("f"));
    }

    #[test]
    fn double_dash_still_defaults_to_suggest() {
        let cli = parse(&["x", "-w", "f", "--", "g.ea."]);
        assert!(matches!(cli.command, Commands::Suggest(_)));
        assert_eq!(clues(&cli.command), ("g.ea.", None, vec![]));
    }

    #[test]
    fn value_options_are_recognized() {
        assert!(takes_value("-w"));
        assert!(takes_value("--limit"));
        assert!(takes_value("-vn"));
        assert!(!takes_value("-wf"));
        assert!(!takes_value("--wordlist=f"));
        assert!(!takes_value("-v"));
        assert!(!takes_value("--summary"));
    }

    #[test]
    fn no_clues_is_an_error() {
        assert!(Cli::try_parse_from(with_default_command(["x", "-w", "f"])).is_err());
    }

    #[test]
    fn broken_pipe_is_a_normal_exit() {
        assert!(finish_output(Err(io::Error::from(io::ErrorKind::BrokenPipe))).is_ok());
        assert!(finish_output(Err(io::Error::other("disk full"))).is_err());
        assert!(finish_output(Ok(())).is_ok());
    }
}
