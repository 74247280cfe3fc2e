use anyhow::{Result, Context};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    // @returns: Absolute path of an existing directory with links resolved
    pub fn canonical_dir<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
        fs::canonicalize(path.as_ref())
    }

    /// Name of an input file up to its first dot.
    ///
    /// `song.v2.txt` yields `song`; a name without a dot is kept whole.
    pub fn document_stem<P: AsRef<Path>>(input_file: P) -> String {
        let name = input_file
            .as_ref()
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        match name.find('.') {
            Some(idx) => name[..idx].to_string(),
            None => name,
        }
    }

    // @generates: Output path for a rendered document
    // @params: input_file, output_dir, extension
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
        extension: &str,
    ) -> PathBuf {
        let mut output_filename = Self::document_stem(input_file);
        output_filename.push('.');
        output_filename.push_str(extension);

        output_dir.as_ref().join(output_filename)
    }

    /// List the regular files directly inside `dir`, sorted by name.
    ///
    /// An empty `extension` accepts every file, otherwise the extension is
    /// compared case-insensitively.
    pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref())
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let matches = extension.is_empty()
                || path
                    .extension()
                    .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension));

            if matches {
                result.push(path.to_path_buf());
            }
        }

        Ok(result)
    }

    /// Read a text file as normalized lines.
    ///
    /// Each line is trimmed and stripped of internal spaces; lines left empty
    /// are dropped. The raw `io::Error` is returned so callers can tell a
    /// vanished file from other failures.
    pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
        let content = fs::read_to_string(path)?;

        Ok(content
            .lines()
            .map(|line| line.trim().replace(' ', ""))
            .filter(|line| !line.is_empty())
            .collect())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
