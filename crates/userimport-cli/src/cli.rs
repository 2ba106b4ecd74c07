//! CLI argument definitions for the user import tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use userimport_mapping::{DEFAULT_LOCALE, MappingSources, resolve_mapping_dir};

#[derive(Parser)]
#[command(
    name = "userimport",
    version,
    about = "Prepare users for database importation",
    long_about = "Convert a delimited user file into a JSON document ready for bulk \
                  database importation.\n\n\
                  Emails and filter values are resolved to identifiers through the \
                  emails.json and filters.json reference mappings.\n\n\
                  Example usage:\n  \
                  userimport prepare /path/to/users.csv /path/to/prepared_users.json"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow emails and source values to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a user file into an importable JSON document.
    Prepare(PrepareArgs),

    /// List the filters known to the reference mapping.
    Filters(MappingArgs),
}

#[derive(Parser)]
pub struct PrepareArgs {
    /// Delimited user file with an `email` column.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Destination of the JSON document.
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Overwrite an existing target without asking.
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Field delimiter of the source file.
    #[arg(long = "delimiter", default_value = ";", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Ignore surrounding whitespace and letter case when matching emails,
    /// filter names and values.
    ///
    /// By default lookups are exact and case-sensitive.
    #[arg(long = "lenient")]
    pub lenient: bool,

    #[command(flatten)]
    pub mapping: MappingArgs,
}

#[derive(Args)]
pub struct MappingArgs {
    /// Directory holding emails.json and filters.json
    /// (default: $USERIMPORT_MAPPING_DIR, then storage/app/mapping).
    #[arg(long = "mapping-dir", value_name = "DIR")]
    pub mapping_dir: Option<PathBuf>,

    /// Email mapping file (overrides <DIR>/emails.json).
    #[arg(long = "emails", value_name = "PATH")]
    pub emails: Option<PathBuf>,

    /// Filter mapping file (overrides <DIR>/filters.json).
    #[arg(long = "filters", value_name = "PATH")]
    pub filters: Option<PathBuf>,

    /// Language key of filter names and value labels.
    #[arg(long = "locale", default_value = DEFAULT_LOCALE)]
    pub locale: String,
}

impl MappingArgs {
    /// Mapping locations after applying directory resolution and overrides.
    pub fn sources(&self) -> MappingSources {
        let dir = resolve_mapping_dir(self.mapping_dir.as_deref());
        let mut sources = MappingSources::from_dir(dir).with_locale(self.locale.as_str());
        if let Some(path) = &self.emails {
            sources.email_path = path.clone();
        }
        if let Some(path) = &self.filters {
            sources.filter_path = path.clone();
        }
        sources
    }
}

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    match raw.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!("delimiter must be a single ASCII character, got {raw:?}")),
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn prepare(args: &[&str]) -> PrepareArgs {
        let cli = Cli::try_parse_from(
            ["userimport", "prepare", "users.csv", "out.json"]
                .iter()
                .chain(args)
                .copied(),
        )
        .expect("parse args");
        match cli.command {
            Command::Prepare(args) => args,
            Command::Filters(_) => panic!("expected prepare"),
        }
    }

    #[test]
    fn prepare_defaults() {
        let args = prepare(&["--mapping-dir", "/srv/mapping"]);
        assert_eq!(args.source, Path::new("users.csv"));
        assert_eq!(args.target, Path::new("out.json"));
        assert_eq!(args.delimiter, b';');
        assert!(!args.yes);
        assert!(!args.lenient);
        let sources = args.mapping.sources();
        assert_eq!(sources.email_path, Path::new("/srv/mapping/emails.json"));
        assert_eq!(sources.locale, "fr");
    }

    #[test]
    fn mapping_file_overrides() {
        let args = prepare(&[
            "--mapping-dir",
            "/srv/mapping",
            "--filters",
            "/tmp/f.json",
            "--locale",
            "en",
            "--delimiter",
            ",",
            "-y",
        ]);
        let sources = args.mapping.sources();
        assert_eq!(sources.email_path, Path::new("/srv/mapping/emails.json"));
        assert_eq!(sources.filter_path, Path::new("/tmp/f.json"));
        assert_eq!(sources.locale, "en");
        assert_eq!(args.delimiter, b',');
        assert!(args.yes);
    }

    #[test]
    fn rejects_multi_character_delimiter() {
        let result = Cli::try_parse_from([
            "userimport",
            "prepare",
            "users.csv",
            "out.json",
            "--delimiter",
            ";;",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn prepare_requires_source_and_target() {
        assert!(Cli::try_parse_from(["userimport", "prepare", "users.csv"]).is_err());
    }
}
