//! # Assignment checker CLI
//!
//! Reads one line, prints its token list and the verdict of the grammar
//! check.

use assign_compiler::config::{ConfigError, RuntimePreferences};
use assign_compiler::logging::{self, LogLevel};
use assign_compiler::lexical::AutomatonTable;
use assign_compiler::pipeline::{self, PipelineOutput, PipelineResult};
use clap::{Parser, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Accepted, or rejected by the grammar
pub const EXIT_OK: i32 = 0;
/// Input contained characters outside the alphabet
pub const EXIT_INVALID_INPUT: i32 = 1;
/// I/O or configuration failure
pub const EXIT_FAILURE: i32 = 2;

/// Printed before reading the line from stdin
pub const PROMPT: &str = "Enter input text: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "assign", version, about = "Tokenize and check an `id = expression` statement")]
pub struct Cli {
    /// Statement to check instead of reading a line from stdin
    #[arg(short, long)]
    pub input: Option<String>,

    /// TOML file with runtime preferences
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Remove every space before tokenizing
    #[arg(long)]
    pub strip_all_spaces: bool,

    /// Let identifiers continue through digits
    #[arg(long)]
    pub alphanumeric_identifiers: bool,

    /// Print the automaton transition table first
    #[arg(long)]
    pub show_transitions: bool,

    /// Do not print the input prompt
    #[arg(long)]
    pub no_prompt: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl Cli {
    /// `env_logger` filter for the requested verbosity
    pub fn log_filter(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Off,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    /// Preferences from the config file (or environment defaults) with flags applied
    pub fn resolve_preferences(&self) -> Result<RuntimePreferences, ConfigError> {
        let mut preferences = match &self.config {
            Some(path) => RuntimePreferences::load(path).map_err(|e| {
                assign_compiler::log_error!(e.error_code(), "Failed to load preferences",
                    "path" => path.display(),
                    "error" => &e
                );
                e
            })?,
            None => RuntimePreferences::default(),
        };

        self.apply_overrides(&mut preferences);
        Ok(preferences)
    }

    /// Apply command line flags on top of `preferences`
    pub fn apply_overrides(&self, preferences: &mut RuntimePreferences) {
        if self.strip_all_spaces {
            preferences.lexical.strip_all_spaces = true;
        }
        if self.alphanumeric_identifiers {
            preferences.lexical.alphanumeric_identifiers = true;
        }
        match self.verbose {
            0 => {}
            1 => preferences.logging.min_log_level = LogLevel::Info,
            _ => preferences.logging.min_log_level = LogLevel::Debug,
        }
    }

    fn should_prompt(&self) -> bool {
        self.input.is_none() && !self.no_prompt && self.format == OutputFormat::Text
    }
}

/// Read a single line, without its line terminator
pub fn read_line<R: BufRead>(mut reader: R) -> std::io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed_len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
    line.truncate(trimmed_len);
    Ok(line)
}

/// Exit code for a processed line
pub fn exit_code(result: &PipelineResult) -> i32 {
    if result.is_lexical_rejection() {
        EXIT_INVALID_INPUT
    } else {
        EXIT_OK
    }
}

/// Resolve preferences, install the global logger, then process one line from stdin
pub fn execute(cli: &Cli) -> Result<i32, CliError> {
    let preferences = cli.resolve_preferences()?;
    logging::init_global_logging(&preferences.logging).map_err(CliError::Logging)?;
    assign_compiler::log_info!("Assignment checker starting", "version" => env!("CARGO_PKG_VERSION"));

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run(cli, &preferences, stdin.lock(), &mut stdout)
}

/// Process one line and write the report
pub fn run<R: BufRead, W: Write>(
    cli: &Cli,
    preferences: &RuntimePreferences,
    input: R,
    out: &mut W,
) -> Result<i32, CliError> {
    if cli.show_transitions {
        let table = AutomatonTable::for_preferences(&preferences.lexical);
        writeln!(out, "{}", table.render())?;
    }

    let line = match &cli.input {
        Some(text) => text.clone(),
        None => {
            if cli.should_prompt() {
                write!(out, "{}", PROMPT)?;
                out.flush()?;
            }
            read_line(input)?
        }
    };

    let result = pipeline::process_line(&line, &preferences.lexical);

    match cli.format {
        OutputFormat::Text => writeln!(out, "{}", pipeline::render_text(&result))?,
        OutputFormat::Json => writeln!(out, "{}", PipelineOutput::from(&result).to_json()?)?,
    }

    Ok(exit_code(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assign_compiler::logging::codes;
    use std::io::Cursor;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["assign"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    /// Flags on top of built-in defaults, independent of `ASSIGN_*` variables
    fn preferences_for(cli: &Cli) -> RuntimePreferences {
        let mut preferences = RuntimePreferences::baseline();
        cli.apply_overrides(&mut preferences);
        preferences
    }

    fn run_to_string(cli: &Cli, stdin: &str) -> (i32, String) {
        let preferences = preferences_for(cli);
        let mut out = Vec::new();
        let code = run(cli, &preferences, Cursor::new(stdin.as_bytes()), &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_accepted_line_from_stdin() {
        let (code, out) = run_to_string(&cli(&[]), "x = 1 + 2\n");
        assert_eq!(code, EXIT_OK);
        assert_eq!(
            out,
            "Enter input text: Tokens: ['id', '=', 'num', '+', 'num']\nAceptado\n"
        );
    }

    #[test]
    fn test_syntax_error_exits_zero() {
        let (code, out) = run_to_string(&cli(&["--input", "x=(1+2"]), "");
        assert_eq!(code, EXIT_OK);
        assert!(out.ends_with("sintax error: Expected ')', found end of input\n"));
    }

    #[test]
    fn test_invalid_character_exits_nonzero() {
        let (code, out) = run_to_string(&cli(&["--no-prompt"]), "x=5#3\n");
        assert_eq!(code, EXIT_INVALID_INPUT);
        assert!(out.contains("'#'"));
        assert!(!out.contains("Tokens:"));
    }

    #[test]
    fn test_flags_override_preferences() {
        let (_, out) = run_to_string(&cli(&["-i", "x = - 5", "--strip-all-spaces"]), "");
        assert!(out.starts_with("Tokens: ['id', '=', 'num']"));

        let (_, out) = run_to_string(&cli(&["-i", "x1=2", "--alphanumeric-identifiers"]), "");
        assert!(out.ends_with("Aceptado\n"));
    }

    #[test]
    fn test_show_transitions() {
        let (_, out) = run_to_string(&cli(&["--show-transitions", "-i", "x=1"]), "");
        assert!(out.starts_with("transitions = [\n    (0, 5, 'char'),\n"));
        assert!(out.contains("accept_states = {5, 6, 7}\n\nTokens:"));
    }

    #[test]
    fn test_json_format() {
        let (code, out) = run_to_string(&cli(&["--format", "json", "-i", "x=1"]), "");
        assert_eq!(code, EXIT_OK);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["accepted"], serde_json::json!(true));
        assert_eq!(json["tokens"], serde_json::json!(["id", "=", "num"]));
    }

    #[test]
    fn test_read_line_strips_terminator() {
        assert_eq!(read_line(Cursor::new("a=1\r\nb=2\n")).unwrap(), "a=1");
        assert_eq!(read_line(Cursor::new("")).unwrap(), "");
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(cli(&[]).log_filter(), log::LevelFilter::Off);
        assert_eq!(cli(&["-vv"]).log_filter(), log::LevelFilter::Debug);
        assert_eq!(preferences_for(&cli(&["-vv"])).logging.min_log_level, LogLevel::Debug);
        assert_eq!(preferences_for(&cli(&["-v"])).logging.min_log_level, LogLevel::Info);
        assert_eq!(preferences_for(&cli(&[])).logging.min_log_level, LogLevel::Info);
    }

    #[test]
    fn test_missing_config_file() {
        let cli = cli(&["--config", "/nonexistent/assign.toml"]);
        let err = cli.resolve_preferences().unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert_eq!(err.error_code(), codes::system::CONFIGURATION_ERROR);
        assert!(CliError::from(err)
            .to_string()
            .starts_with("Failed to read configuration file /nonexistent/assign.toml"));
    }

    #[test]
    fn test_config_file_then_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[lexical]\nstrip_all_spaces = false\nalphanumeric_identifiers = true").unwrap();

        let preferences = cli(&["--config", file.path().to_str().unwrap(), "--strip-all-spaces"])
            .resolve_preferences()
            .unwrap();
        assert!(preferences.lexical.strip_all_spaces);
        assert!(preferences.lexical.alphanumeric_identifiers);
    }
}
