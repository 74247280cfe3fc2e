/*!
 * Tests for symbol substitution and tokenization
 */

use canto_typeset::alignment::{SUBSTITUTIONS, split_words, substitute, tokenize};

/// Test the single-syllable example
#[test]
fn test_tokenize_withSingleSyllable_shouldEmitOneSuperscriptToken() {
    assert_eq!(tokenize("ou3"), vec!["ou<super>3</super>".to_string()]);
}

/// Test that each digit closes one token
#[test]
fn test_tokenize_withTwoDigits_shouldEmitTwoTokens() {
    assert_eq!(
        tokenize("gam3ng5"),
        vec!["gam<super>3</super>".to_string(), "ng<super>5</super>".to_string()]
    );
}

/// Test that characters after the last digit are dropped
#[test]
fn test_tokenize_withTrailingLetters_shouldDropThem() {
    assert_eq!(tokenize("ou3ab"), vec!["ou<super>3</super>".to_string()]);
    assert!(tokenize("abc").is_empty());
    assert!(tokenize("").is_empty());
}

/// Test that back-to-back digits give a token with no letters
#[test]
fn test_tokenize_withAdjacentDigits_shouldEmitBareDigitToken() {
    assert_eq!(
        tokenize("si12"),
        vec!["si<super>1</super>".to_string(), "<super>2</super>".to_string()]
    );
}

/// Test that multi-byte characters stay intact inside tokens
#[test]
fn test_tokenize_withMultiByteLetters_shouldKeepThem() {
    assert_eq!(tokenize("héng4"), vec!["héng<super>4</super>".to_string()]);
}

/// Test the umlaut substitution before tokenizing
#[test]
fn test_substitute_withUmlautMarker_shouldProduceSingleCharacter() {
    let substituted = substitute("u:ng5");
    assert_eq!(substituted, "üng5");
    assert_eq!(tokenize(&substituted), vec!["üng<super>5</super>".to_string()]);
}

/// Test the accent substitutions
#[test]
fn test_substitute_withAccentMarkers_shouldProduceAccentedVowels() {
    assert_eq!(substitute("he`1"), "hé1");
    assert_eq!(substitute("le^4"), "lê4");
}

/// Test that doubled initials are wrapped in emphasis markup
#[test]
fn test_substitute_withDoubledInitials_shouldEmphasise() {
    assert_eq!(substitute("dda1"), "<u><b>d</b></u>a1");
    assert_eq!(substitute("ggo2"), "<u><b>g</b></u>o2");
    assert_eq!(substitute("mmou5"), "<u><b>m</b></u>ou5");
    assert_eq!(substitute("bbaa6"), "<u><b>b</b></u>aa6");

    assert_eq!(
        tokenize(&substitute("dda1")),
        vec!["<u><b>d</b></u>a<super>1</super>".to_string()]
    );
}

/// Test that text without markers is unchanged
#[test]
fn test_substitute_withPlainSymbols_shouldBeIdentity() {
    assert_eq!(substitute("ngo5dei6"), "ngo5dei6");
}

/// Test that replacements introduce no digits, so token counts are unaffected
#[test]
fn test_substitutions_table_shouldNotContainDigits() {
    assert_eq!(SUBSTITUTIONS.len(), 7);
    for (pattern, replacement) in SUBSTITUTIONS {
        assert!(!pattern.chars().any(|c| c.is_ascii_digit()));
        assert!(!replacement.chars().any(|c| c.is_ascii_digit()));
    }
}

/// Test that every character becomes its own cell
#[test]
fn test_split_words_withChineseText_shouldSplitPerCharacter() {
    assert_eq!(
        split_words("我地一齊"),
        vec!["我".to_string(), "地".to_string(), "一".to_string(), "齊".to_string()]
    );
    assert!(split_words("").is_empty());
}
