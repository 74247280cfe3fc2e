/*!
 * Tests for file utility functions
 */

use std::fs;
use std::path::Path;
use anyhow::Result;
use canto_typeset::file_utils::FileManager;
use crate::common;

/// Test that dir_exists rejects regular files
#[test]
fn test_dir_exists_withRegularFile_shouldReturnFalse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "song.txt", "ou3\n嗷嗷\n")?;

    assert!(!FileManager::dir_exists(&test_file));
    assert!(FileManager::dir_exists(temp_dir.path()));

    Ok(())
}

/// Test that aliases of one directory resolve to the same canonical path
#[test]
fn test_canonical_dir_withDotDotAlias_shouldMatchDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let txt_dir = temp_dir.path().join("txt");
    fs::create_dir_all(&txt_dir)?;

    let alias = txt_dir.join("..").join("txt");

    assert_eq!(FileManager::canonical_dir(&alias)?, FileManager::canonical_dir(&txt_dir)?);
    assert!(FileManager::canonical_dir(temp_dir.path().join("missing")).is_err());

    Ok(())
}

/// Test that dir_exists returns false for non-existent directories
#[test]
fn test_dir_exists_withNonExistentDir_shouldReturnFalse() {
    assert!(!FileManager::dir_exists("./non_existent_directory_12345"));
}

/// Test that the document stem stops at the first dot
#[test]
fn test_document_stem_withSeveralDots_shouldCutAtFirstDot() {
    assert_eq!(FileManager::document_stem("/tmp/txt/song.txt"), "song");
    assert_eq!(FileManager::document_stem("song.v2.txt"), "song");
    assert_eq!(FileManager::document_stem("海阔天空.txt"), "海阔天空");
    assert_eq!(FileManager::document_stem("README"), "README");
}

/// Test that generate_output_path creates the correct path
#[test]
fn test_generate_output_path_withValidInputs_shouldCreateCorrectPath() {
    let output_path = FileManager::generate_output_path(
        Path::new("/tmp/txt/song.v2.txt"),
        Path::new("/tmp/lyrics"),
        "pdf",
    );

    assert_eq!(output_path, Path::new("/tmp/lyrics/song.pdf"));
}

/// Test that ensure_dir creates nested directories
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&nested)?;
    assert!(nested.is_dir());

    // Calling it again is harmless
    FileManager::ensure_dir(&nested)?;

    Ok(())
}

/// Test that listing is sorted, flat and filtered by extension
#[test]
fn test_list_files_withMixedEntries_shouldReturnSortedMatches() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_test_file(dir, "b.txt", "")?;
    common::create_test_file(dir, "a.TXT", "")?;
    common::create_test_file(dir, "notes.md", "")?;
    fs::create_dir(dir.join("nested.txt"))?;
    fs::create_dir(dir.join("sub"))?;
    common::create_test_file(&dir.join("sub"), "c.txt", "")?;

    let files = FileManager::list_files(dir, "txt")?;
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.TXT", "b.txt"]);

    let all = FileManager::list_files(dir, "")?;
    assert_eq!(all.len(), 3);

    Ok(())
}

/// Test that lines are trimmed, de-spaced and blank lines dropped
#[test]
fn test_read_lines_withSpacedInput_shouldNormalizeLines() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(
        temp_dir.path(),
        "song.txt",
        "  ngo5 dei6  \r\n\n我 地\n   \n",
    )?;

    let lines = FileManager::read_lines(&file)?;
    assert_eq!(lines, vec!["ngo5dei6".to_string(), "我地".to_string()]);

    Ok(())
}

/// Test that reading a missing file reports NotFound
#[test]
fn test_read_lines_withMissingFile_shouldReturnNotFound() {
    let error = FileManager::read_lines("non_existent_file.txt").unwrap_err();
    assert_eq!(error.kind(), std::io::ErrorKind::NotFound);
}

/// Test that write_to_file creates parents and content
#[test]
fn test_write_to_file_withNestedPath_shouldCreateFileWithContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = temp_dir.path().join("nested").join("conf.json");

    FileManager::write_to_file(&test_file, "{}")?;

    assert_eq!(FileManager::read_to_string(&test_file)?, "{}");

    Ok(())
}
