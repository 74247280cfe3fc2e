use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the lyric text files
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Directory receiving the rendered documents
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Re-render files whose output already exists
    #[serde(default)]
    pub regeneration: bool,

    /// Extension of the input files to process, empty for every file
    #[serde(default = "default_input_extension")]
    pub input_extension: String,

    /// Output document format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Font settings
    #[serde(default)]
    pub font: FontConfig,

    /// Page and table layout
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Output document format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    // @format: Paginated PDF
    #[default]
    Pdf,
    // @format: Plain-text preview
    Text,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Text => write!(f, "text"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(anyhow!("Invalid output format: {}", s)),
        }
    }
}

/// Font configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FontConfig {
    /// TrueType font used for every glyph, it must cover CJK ideographs
    #[serde(default = "default_font_path")]
    pub path: PathBuf,

    /// Optional bold face for the title and emphasised initials.
    /// Without it emphasis is drawn in color with the regular face.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold_path: Option<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: default_font_path(),
            bold_path: None,
        }
    }
}

/// Paper size of rendered pages
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
    Legal,
}

/// Page and table layout settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LayoutConfig {
    // @field: Paper size
    #[serde(default)]
    pub paper_size: PaperSize,

    // @field: Page margins in millimetres
    #[serde(default = "default_margins_mm")]
    pub margins_mm: u8,

    // @field: Title font size in points
    #[serde(default = "default_title_font_size")]
    pub title_font_size: u8,

    // @field: Table cell font size in points
    #[serde(default = "default_cell_font_size")]
    pub cell_font_size: u8,

    // @field: Tone digit font size in points
    #[serde(default = "default_superscript_font_size")]
    pub superscript_font_size: u8,

    // @field: Draw cell borders
    #[serde(default)]
    pub cell_borders: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::default(),
            margins_mm: default_margins_mm(),
            title_font_size: default_title_font_size(),
            cell_font_size: default_cell_font_size(),
            superscript_font_size: default_superscript_font_size(),
            cell_borders: false,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("./txt")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./lyrics")
}

fn default_input_extension() -> String {
    "txt".to_string()
}

fn default_font_path() -> PathBuf {
    PathBuf::from("SourceHanSansSC-VF.ttf")
}

fn default_margins_mm() -> u8 {
    10
}

fn default_title_font_size() -> u8 {
    20
}

fn default_cell_font_size() -> u8 {
    12
}

fn default_superscript_font_size() -> u8 {
    7
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(anyhow!("Input directory must not be empty"));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(anyhow!("Output directory must not be empty"));
        }

        if self.input_dir == self.output_dir {
            return Err(anyhow!(
                "Input and output directories must differ: {:?}",
                self.input_dir
            ));
        }

        if self.input_extension.starts_with('.') {
            return Err(anyhow!(
                "Input extension must be given without a leading dot: {}",
                self.input_extension
            ));
        }

        if self.output_format == OutputFormat::Pdf && self.font.path.as_os_str().is_empty() {
            return Err(anyhow!("A font path is required for PDF output"));
        }

        if self.font.bold_path.as_ref().is_some_and(|path| path.as_os_str().is_empty()) {
            return Err(anyhow!("Bold font path must not be empty when set"));
        }

        let layout = &self.layout;
        if layout.title_font_size == 0 || layout.cell_font_size == 0 || layout.superscript_font_size == 0 {
            return Err(anyhow!("Font sizes must be greater than zero"));
        }

        if layout.superscript_font_size > layout.cell_font_size {
            return Err(anyhow!(
                "Superscript font size ({}) must not exceed cell font size ({})",
                layout.superscript_font_size,
                layout.cell_font_size
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            regeneration: false,
            input_extension: default_input_extension(),
            output_format: OutputFormat::default(),
            font: FontConfig::default(),
            layout: LayoutConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
