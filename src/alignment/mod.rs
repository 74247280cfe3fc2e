/*!
 * Alignment engine.
 *
 * This module pairs phonetic symbol lines with lyric lines and checks that
 * each pair lines up character for character:
 * - `classifier`: groups raw lines into symbol/word block pairs
 * - `symbols`: substitution table and tone-digit tokenizer
 * - `document`: validated aligned pairs and the per-file document
 */

pub mod classifier;
pub mod document;
pub mod symbols;

pub use classifier::{BlockPair, LinePairer, is_phonetic_block, is_word_block};
pub use document::{AlignedPair, Document};
pub use symbols::{SUBSTITUTIONS, split_words, substitute, tokenize};
