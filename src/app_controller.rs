use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::Builder;

use crate::alignment::Document;
use crate::app_config::Config;
use crate::errors::{AlignError, AppError};
use crate::file_utils::FileManager;
use crate::log_sink::{self, LogCategory};
use crate::renderer::{self, DocumentRenderer};

// @module: Application controller for lyric typesetting

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Documents written
    pub processed: usize,
    /// Inputs skipped because their output already existed
    pub skipped: usize,
    /// Inputs rejected by an error
    pub failed: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.processed + self.skipped + self.failed
    }
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Output format implementation
    renderer: Box<dyn DocumentRenderer>,
}

impl Controller {
    // @method: Create a new controller with the renderer the configuration selects
    pub fn with_config(config: Config) -> anyhow::Result<Self> {
        config.validate().context("Configuration validation failed")?;
        let renderer = renderer::from_config(&config);
        Ok(Self::with_renderer(config, renderer))
    }

    // @method: Create a new controller with an explicit renderer
    pub fn with_renderer(config: Config, renderer: Box<dyn DocumentRenderer>) -> Self {
        Self { config, renderer }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Output path for an input file
    pub fn output_path_for(&self, input_file: &Path) -> PathBuf {
        FileManager::generate_output_path(input_file, &self.config.output_dir, self.renderer.extension())
    }

    /// Check the input directory and create the output directory
    fn prepare_directories(&self) -> Result<(), AppError> {
        if !FileManager::dir_exists(&self.config.input_dir) {
            return Err(AppError::Configuration(format!(
                "The lyrics source directory does not exist: {:?}",
                self.config.input_dir
            )));
        }

        FileManager::ensure_dir(&self.config.output_dir)?;

        // Aliases such as `txt/../txt` pass the textual check in `Config::validate`
        let input_dir = FileManager::canonical_dir(&self.config.input_dir)?;
        let output_dir = FileManager::canonical_dir(&self.config.output_dir)?;
        if input_dir == output_dir {
            return Err(AppError::Configuration(format!(
                "The output directory {:?} is the lyrics source directory {:?}",
                self.config.output_dir, self.config.input_dir
            )));
        }

        Ok(())
    }

    /// Run the batch: every listed input is attempted once.
    ///
    /// Only a configuration problem ends the run early; errors on single
    /// files are logged and counted.
    pub fn run(&self) -> Result<RunSummary, AppError> {
        let start_time = Instant::now();

        if let Err(e) = self.prepare_directories() {
            log_sink::emit(e.log_category(), &e);
            return Err(e);
        }

        let input_files = FileManager::list_files(&self.config.input_dir, &self.config.input_extension)?;
        debug!("Found {} input files in {:?}", input_files.len(), self.config.input_dir);

        let progress_bar = ProgressBar::new(input_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));

        let mut summary = RunSummary::default();

        for input_file in &input_files {
            let file_name = input_file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            progress_bar.set_message(file_name.clone());

            let output_path = self.output_path_for(input_file);
            let output_name = output_path
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_default();

            if output_path.exists() && !self.config.regeneration {
                progress_bar.suspend(|| {
                    log_sink::emit(
                        LogCategory::ProcessSkip,
                        format!("[{}] already exists, skipping it.", output_name),
                    )
                });
                summary.skipped += 1;
                progress_bar.inc(1);
                continue;
            }

            match self.process_file(input_file) {
                Ok(_) => {
                    progress_bar.suspend(|| {
                        log_sink::emit(
                            LogCategory::ProcessSuccess,
                            format!("[{}] has been successfully generated.", output_name),
                        )
                    });
                    summary.processed += 1;
                }
                Err(e) => {
                    progress_bar.suspend(|| Self::report_failure(&file_name, &e));
                    summary.failed += 1;
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();

        log_sink::emit(
            LogCategory::Success,
            format!(
                "All files processed: {} generated, {} skipped, {} failed.",
                summary.processed, summary.skipped, summary.failed
            ),
        );
        info!("Finished in {:.3}s", start_time.elapsed().as_secs_f64());

        Ok(summary)
    }

    // @logs: One error line plus diagnostics for mismatches
    fn report_failure(file_name: &str, error: &AppError) {
        log_sink::emit(
            error.log_category(),
            format!("Error processing [{}]: {}", file_name, error),
        );

        if let AppError::Alignment(AlignError::Mismatch { symbols, words, .. }) = error {
            log_sink::emit(LogCategory::ErrorInfo, format!("Symbols: {}.", symbols));
            log_sink::emit(LogCategory::ErrorInfo, format!("Words: {}.", words));
        }
    }

    /// Read and align one input file
    pub fn build_document(input_file: &Path) -> Result<Document, AppError> {
        let lines = FileManager::read_lines(input_file).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AppError::FileNotFound(input_file.to_path_buf()),
            _ => AppError::File(format!("Failed to read {:?}: {}", input_file, e)),
        })?;

        let title = FileManager::document_stem(input_file);
        Ok(Document::from_lines(title, &lines)?)
    }

    /// Align one input file and write its document.
    ///
    /// The document is rendered into a temporary file next to the final
    /// output and only renamed into place once rendering succeeded.
    pub fn process_file(&self, input_file: &Path) -> Result<PathBuf, AppError> {
        let document = Self::build_document(input_file)?;
        let output_path = self.output_path_for(input_file);

        let mut staging = Builder::new()
            .prefix(".canto-")
            .suffix(".part")
            .tempfile_in(&self.config.output_dir)?;

        self.renderer.render(&document, staging.as_file_mut())?;

        staging
            .persist(&output_path)
            .map_err(|e| AppError::File(format!("Failed to write {:?}: {}", output_path, e.error)))?;

        debug!("Wrote {:?}", output_path);
        Ok(output_path)
    }
}
