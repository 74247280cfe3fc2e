/*!
 * Common test utilities for the canto-typeset test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

use canto_typeset::app_config::{Config, OutputFormat};


/// Lyric file whose two pairs align
pub const ALIGNED_LYRICS: &str = "ngo5 dei6 jat1 cai4\n我地一齊\n\nou3 ou3\n嗷嗷\n";

/// Lyric file whose second pair has one token too many
pub const MISMATCHED_LYRICS: &str = "ou3 ou3\n嗷嗷\ngam3 ng5 sam1\n岩心\n";

/// Route library logs to the test harness, ignoring repeated initialisation
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates `txt/` inside `root` and returns a text-output config pointing at it
pub fn create_workspace(root: &Path) -> Result<Config> {
    let input_dir = root.join("txt");
    fs::create_dir_all(&input_dir)?;

    Ok(Config {
        input_dir,
        output_dir: root.join("lyrics"),
        output_format: OutputFormat::Text,
        ..Config::default()
    })
}

/// Names of the files in a directory, sorted
pub fn file_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().to_string());
    }
    names.sort();
    Ok(names)
}
