/*!
 * Integration tests for directory batch processing
 */

use std::fs;
use anyhow::Result;

use canto_typeset::app_config::OutputFormat;
use canto_typeset::app_controller::{Controller, RunSummary};
use canto_typeset::errors::AppError;
use crate::common;

/// Test a full run over good and bad files
#[test]
fn test_run_withMixedFiles_shouldRenderGoodFilesAndContinuePastBadOnes() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let config = common::create_workspace(temp_dir.path())?;
    common::create_test_file(&config.input_dir, "a_good.txt", common::ALIGNED_LYRICS)?;
    common::create_test_file(&config.input_dir, "b_bad.txt", common::MISMATCHED_LYRICS)?;
    common::create_test_file(&config.input_dir, "c_good.v2.txt", common::ALIGNED_LYRICS)?;
    common::create_test_file(&config.input_dir, "notes.md", "not lyrics")?;

    let output_dir = config.output_dir.clone();
    let controller = Controller::with_config(config)?;
    let summary = controller.run()?;

    assert_eq!(summary, RunSummary { processed: 2, skipped: 0, failed: 1 });
    assert_eq!(common::file_names(&output_dir)?, vec!["a_good.txt", "c_good.txt"]);

    let rendered = fs::read_to_string(output_dir.join("a_good.txt"))?;
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "a_good");
    assert!(lines[2].contains("ngo⁵") && lines[2].contains("cai⁴"));
    assert!(lines[3].contains('齊'));
    assert_eq!(lines.len(), 2 + 4);

    Ok(())
}

/// Test that a second run without regeneration rewrites nothing
#[test]
fn test_run_twiceWithoutRegeneration_shouldSkipEverything() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let config = common::create_workspace(temp_dir.path())?;
    common::create_test_file(&config.input_dir, "song.txt", common::ALIGNED_LYRICS)?;
    common::create_test_file(&config.input_dir, "other.txt", common::ALIGNED_LYRICS)?;

    let output_dir = config.output_dir.clone();
    let controller = Controller::with_config(config)?;

    let first = controller.run()?;
    assert_eq!(first.processed, 2);

    // Mark the outputs so a rewrite would be visible
    for name in ["song.txt", "other.txt"] {
        fs::write(output_dir.join(name), "marker")?;
    }

    let second = controller.run()?;
    assert_eq!(second, RunSummary { processed: 0, skipped: 2, failed: 0 });
    for name in ["song.txt", "other.txt"] {
        assert_eq!(fs::read_to_string(output_dir.join(name))?, "marker");
    }
    assert_eq!(common::file_names(&output_dir)?, vec!["other.txt", "song.txt"]);

    Ok(())
}

/// Test that regeneration re-renders existing outputs
#[test]
fn test_run_withRegeneration_shouldOverwriteExistingOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::create_workspace(temp_dir.path())?;
    common::create_test_file(&config.input_dir, "song.txt", common::ALIGNED_LYRICS)?;
    fs::create_dir_all(&config.output_dir)?;
    fs::write(config.output_dir.join("song.txt"), "stale")?;

    config.regeneration = true;
    let output_dir = config.output_dir.clone();
    let summary = Controller::with_config(config)?.run()?;

    assert_eq!(summary.processed, 1);
    assert!(fs::read_to_string(output_dir.join("song.txt"))?.starts_with("song\n"));

    Ok(())
}

/// Test that a missing input directory is fatal and creates nothing
#[test]
fn test_run_withMissingInputDir_shouldFailWithConfigurationError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::create_workspace(temp_dir.path())?;
    config.input_dir = temp_dir.path().join("missing");
    let output_dir = config.output_dir.clone();

    let result = Controller::with_config(config)?.run();

    assert!(matches!(result, Err(AppError::Configuration(_))));
    assert!(!output_dir.exists());

    Ok(())
}

/// Test that the output directory is created on demand
#[test]
fn test_run_withMissingOutputDir_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::create_workspace(temp_dir.path())?;
    config.output_dir = temp_dir.path().join("deep").join("lyrics");
    let output_dir = config.output_dir.clone();

    let summary = Controller::with_config(config)?.run()?;

    assert_eq!(summary.total(), 0);
    assert!(output_dir.is_dir());

    Ok(())
}

/// Test that a missing font fails each PDF without leaving partial files
#[test]
fn test_run_withMissingFont_shouldFailFilesAndLeaveNoOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::create_workspace(temp_dir.path())?;
    config.output_format = OutputFormat::Pdf;
    config.font.path = temp_dir.path().join("no-such-font.ttf");
    common::create_test_file(&config.input_dir, "song.txt", common::ALIGNED_LYRICS)?;
    common::create_test_file(&config.input_dir, "other.txt", common::ALIGNED_LYRICS)?;

    let output_dir = config.output_dir.clone();
    let summary = Controller::with_config(config)?.run()?;

    assert_eq!(summary, RunSummary { processed: 0, skipped: 0, failed: 2 });
    assert!(common::file_names(&output_dir)?.is_empty());

    Ok(())
}
