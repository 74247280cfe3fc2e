/*!
 * Line classification and pairing.
 *
 * Scans the normalized lines of one input file and groups them into
 * alternating symbol/word blocks. The scan is greedy: a line that does not
 * qualify for the block currently being collected is replaced by the next
 * line, with no look-ahead and no backtracking. Badly interleaved input is
 * therefore not rejected here; it shows up later as a length mismatch.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// CJK ideographs accepted in a word block
static CJK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\u{4e00}-\u{9fa5}]").unwrap()
});

/// Returns true when a line looks like romanized phonetics with tone digits
pub fn is_phonetic_block(line: &str) -> bool {
    line.chars().count() > 1 && line.chars().any(|c| c.is_ascii_digit())
}

/// Returns true when a line contains Chinese characters
pub fn is_word_block(line: &str) -> bool {
    line.chars().count() > 1 && CJK_REGEX.is_match(line)
}

/// One symbol block and the word block that follows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPair {
    /// Phonetic notation, before substitution
    pub symbols: String,
    /// Lyric characters
    pub words: String,
}

#[derive(Debug)]
enum ScanState {
    AwaitingSymbol,
    AwaitingWord { symbols: String },
}

/// Iterator over the block pairs of a sequence of lines
#[derive(Debug)]
pub struct LinePairer<'a, S: AsRef<str>> {
    lines: &'a [S],
    cursor: usize,
}

impl<'a, S: AsRef<str>> LinePairer<'a, S> {
    pub fn new(lines: &'a [S]) -> Self {
        Self { lines, cursor: 0 }
    }

    // @returns: Next qualifying line, or the last line read if input ran out
    fn take_block(&mut self, qualifies: fn(&str) -> bool) -> String {
        let lines = self.lines;
        let Some(first) = lines.get(self.cursor) else {
            return String::new();
        };
        self.cursor += 1;

        let mut candidate = first.as_ref();
        while self.cursor < lines.len() && !qualifies(candidate) {
            candidate = lines[self.cursor].as_ref();
            self.cursor += 1;
        }

        candidate.to_string()
    }
}

impl<S: AsRef<str>> Iterator for LinePairer<'_, S> {
    type Item = BlockPair;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.lines.len() {
            return None;
        }

        let mut state = ScanState::AwaitingSymbol;
        loop {
            state = match state {
                ScanState::AwaitingSymbol => ScanState::AwaitingWord {
                    symbols: self.take_block(is_phonetic_block),
                },
                ScanState::AwaitingWord { symbols } => {
                    let words = self.take_block(is_word_block);
                    return Some(BlockPair { symbols, words });
                }
            };
        }
    }
}
