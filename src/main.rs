// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use canto_typeset::app_config::{self, Config, OutputFormat};
use canto_typeset::app_controller::Controller;
use canto_typeset::file_utils::FileManager;
use canto_typeset::log_sink::{self, LogCategory};

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Pdf,
    Text,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Pdf => OutputFormat::Pdf,
            CliOutputFormat::Text => OutputFormat::Text,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Align and render every lyric file of a directory (default command)
    Render(RenderArgs),

    /// Generate shell completions for canto-typeset
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
struct RenderArgs {
    /// Directory containing the lyric text files
    #[arg(value_name = "INPUT_DIR")]
    input_dir: Option<PathBuf>,

    /// Directory receiving the rendered documents
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Re-render files whose output already exists
    #[arg(short, long)]
    regenerate: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<CliOutputFormat>,

    /// TrueType font covering CJK ideographs (PDF output)
    #[arg(long)]
    font: Option<PathBuf>,

    /// Bold face for the title and emphasised initials (PDF output)
    #[arg(long)]
    bold_font: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// canto-typeset - Cantonese lyric typesetting
///
/// Aligns romanized phonetic lines with Chinese lyric lines, character for
/// character, and renders each lyric file as a paginated document.
#[derive(Parser, Debug)]
#[command(name = "canto-typeset")]
#[command(version)]
#[command(about = "Align Cantonese phonetics with lyrics and typeset them")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "canto-typeset reads lyric files in which each line of romanized phonetics
(tone digits included) is followed by the matching line of Chinese characters,
and renders one document per file with every syllable above its character.

EXAMPLES:
    canto-typeset                          # Render ./txt into ./lyrics
    canto-typeset songs/ -o out/           # Custom input and output directories
    canto-typeset -r songs/                # Re-render files that already have output
    canto-typeset -f text songs/           # Plain-text preview instead of PDF
    canto-typeset --font NotoSansSC.ttf    # Use another CJK font
    canto-typeset completions bash > canto-typeset.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.

INPUT FORMAT:
    ngo5 dei6        # phonetic line, each syllable ends with its tone digit
    我地              # lyric line, one character per syllable
    Doubled initials (dd, gg, mm, bb) are emphasised; e` e^ u: become é ê ü.
    Emphasis is drawn in color unless a bold face is set with --bold-font.

    Category lines (PROCESS_SKIP, PROCESS_ERROR, ...) are always printed;
    --log-level only filters diagnostics.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    render: RenderArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        log_sink::is_visible(metadata, log::max_level().min(self.level))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let now = chrono::Local::now().format("%H:%M:%S.%3f");
        let color = Self::get_color_for_level(record.level());

        let mut stdout = std::io::stdout().lock();
        let _ = match LogCategory::from_target(record.target()) {
            Some(category) => writeln!(
                stdout,
                "\x1B[{}m{} {}: {}\x1B[0m",
                color, now, category, record.args()
            ),
            None => writeln!(
                stdout,
                "\x1B[{}m{} {}\x1B[0m",
                color, now, record.args()
            ),
        };
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "canto-typeset", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Render(args)) => run_render(args),
        None => run_render(cli.render),
    }
}

/// Load the configuration file, writing a default one when it is missing
fn load_config(config_path: &str) -> Result<Config> {
    if Path::new(config_path).exists() {
        let content = FileManager::read_to_string(config_path)?;
        serde_json::from_str(&content)
            .context(format!("Failed to parse config file: {}", config_path))
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        FileManager::write_to_file(config_path, &config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        Ok(config)
    }
}

/// Override config values with the ones given on the command line
fn apply_overrides(config: &mut Config, options: &RenderArgs) {
    if let Some(input_dir) = &options.input_dir {
        config.input_dir = input_dir.clone();
    }

    if let Some(output_dir) = &options.output_dir {
        config.output_dir = output_dir.clone();
    }

    if options.regenerate {
        config.regeneration = true;
    }

    if let Some(format) = &options.format {
        config.output_format = format.clone().into();
    }

    if let Some(font) = &options.font {
        config.font.path = font.clone();
    }

    if let Some(bold_font) = &options.bold_font {
        config.font.bold_path = Some(bold_font.clone());
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
}

fn run_render(options: RenderArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    let mut config = load_config(&options.config_path)?;
    apply_overrides(&mut config, &options);

    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;
    let summary = controller.run()?;

    if summary.failed > 0 {
        return Err(anyhow!("{} of {} files failed", summary.failed, summary.total()));
    }

    Ok(())
}
