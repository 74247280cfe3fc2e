use log::{debug, trace};

use crate::alignment::classifier::{BlockPair, LinePairer};
use crate::alignment::symbols;
use crate::errors::AlignError;

// @module: Aligned pairs and the per-file document

// @struct: Equal-length phonetic token row and character row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair {
    tokens: Vec<String>,
    chars: Vec<String>,
}

impl AlignedPair {
    // @creates: Validated pair from one symbol block and one word block
    // @validates: Token count equals character count
    pub fn from_blocks(symbols: &str, words: &str) -> Result<Self, AlignError> {
        let substituted = symbols::substitute(symbols);
        let tokens = symbols::tokenize(&substituted);
        let chars = symbols::split_words(words);

        if tokens.len() != chars.len() {
            return Err(AlignError::Mismatch {
                token_count: tokens.len(),
                char_count: chars.len(),
                symbols: substituted,
                words: words.to_string(),
            });
        }

        Ok(Self { tokens, chars })
    }

    /// Phonetic tokens, one per character
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Lyric characters
    pub fn chars(&self) -> &[String] {
        &self.chars
    }

    /// Number of columns the pair occupies
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl TryFrom<&BlockPair> for AlignedPair {
    type Error = AlignError;

    fn try_from(pair: &BlockPair) -> Result<Self, Self::Error> {
        Self::from_blocks(&pair.symbols, &pair.words)
    }
}

/// Aligned content of one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
    pairs: Vec<AlignedPair>,
    max_cols: usize,
}

impl Document {
    /// Align every block pair found in `lines`.
    ///
    /// The first mismatching pair rejects the whole document. Pairs with
    /// neither tokens nor characters (trailing residue) are left out.
    pub fn from_lines<S: AsRef<str>>(title: impl Into<String>, lines: &[S]) -> Result<Self, AlignError> {
        let title = title.into();
        let mut pairs = Vec::new();
        let mut max_cols = 0;

        for block in LinePairer::new(lines) {
            trace!("Block pair: {:?} / {:?}", block.symbols, block.words);
            let pair = AlignedPair::try_from(&block)?;
            if pair.is_empty() {
                continue;
            }
            max_cols = max_cols.max(pair.len());
            pairs.push(pair);
        }

        debug!("Aligned {} pairs for '{}' ({} columns)", pairs.len(), title, max_cols);

        Ok(Self { title, pairs, max_cols })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pairs(&self) -> &[AlignedPair] {
        &self.pairs
    }

    /// Width of the widest row
    pub fn max_cols(&self) -> usize {
        self.max_cols
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Rows in render order: tokens above characters, pair after pair
    pub fn rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.pairs
            .iter()
            .flat_map(|pair| [pair.tokens(), pair.chars()])
    }

    /// Rows padded on the right with empty cells up to `max_cols`
    pub fn padded_rows(&self) -> Vec<Vec<&str>> {
        self.rows()
            .map(|row| {
                let mut cells: Vec<&str> = row.iter().map(String::as_str).collect();
                cells.resize(self.max_cols, "");
                cells
            })
            .collect()
    }
}
