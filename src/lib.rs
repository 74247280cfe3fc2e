/*!
 * # canto-typeset - Cantonese lyric typesetting
 *
 * A Rust library that aligns romanized Cantonese phonetics with Chinese
 * lyric text, character for character, and renders the result as a
 * paginated document.
 *
 * ## Features
 *
 * - Greedy classification of phonetic and lyric lines into block pairs
 * - Tone-digit tokenization with superscript markup
 * - Fixed substitution table for diacritics and emphasised initials
 * - Strict token/character count check per pair
 * - PDF output through genpdf, plus a plain-text preview format
 * - Skip-if-exists batch processing of a whole directory
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `alignment`: the alignment engine:
 *   - `alignment::classifier`: line classification and pairing
 *   - `alignment::symbols`: substitution table and tokenizer
 *   - `alignment::document`: aligned pairs and the per-file document
 * - `markup`: inline cell markup parsing
 * - `renderer`: output formats (`renderer::pdf`, `renderer::text`)
 * - `app_config`: Configuration management
 * - `app_controller`: Batch controller
 * - `file_utils`: File system operations
 * - `log_sink`: Categorised log messages
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod alignment;
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod log_sink;
pub mod markup;
pub mod renderer;

// Re-export main types for easier usage
pub use alignment::{AlignedPair, Document};
pub use app_config::Config;
pub use app_controller::{Controller, RunSummary};
pub use errors::{AlignError, AppError, RenderError};
pub use renderer::{DocumentRenderer, PdfRenderer, TextRenderer};
