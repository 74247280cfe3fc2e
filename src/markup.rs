/*!
 * Inline cell markup.
 *
 * Cells produced by the tokenizer carry a tiny tag vocabulary: `<u>`, `<b>`
 * and `<super>`. Renderers work on styled spans rather than raw tags.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Opening and closing tags understood in cell text
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(/?)(u|b|super)>").unwrap()
});

/// A run of cell text sharing one style
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub text: String,
    pub bold: bool,
    pub underline: bool,
    pub superscript: bool,
}

impl Span {
    /// Plain, unstyled run
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    pub fn is_emphasis(&self) -> bool {
        self.bold || self.underline
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct TagDepth {
    bold: usize,
    underline: usize,
    superscript: usize,
}

impl TagDepth {
    fn counter(&mut self, tag: &str) -> &mut usize {
        match tag {
            "b" => &mut self.bold,
            "u" => &mut self.underline,
            _ => &mut self.superscript,
        }
    }

    fn span(&self, text: &str) -> Span {
        Span {
            text: text.to_string(),
            bold: self.bold > 0,
            underline: self.underline > 0,
            superscript: self.superscript > 0,
        }
    }
}

fn push_span(spans: &mut Vec<Span>, span: Span) {
    if span.text.is_empty() {
        return;
    }
    match spans.last_mut() {
        Some(prev)
            if prev.bold == span.bold
                && prev.underline == span.underline
                && prev.superscript == span.superscript =>
        {
            prev.text.push_str(&span.text);
        }
        _ => spans.push(span),
    }
}

/// Split cell text into styled spans.
///
/// A closing tag with no matching opener is kept as literal text.
pub fn parse(cell: &str) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    let mut depth = TagDepth::default();
    let mut last = 0;

    for caps in TAG_REGEX.captures_iter(cell) {
        let (Some(whole), Some(tag)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        push_span(&mut spans, depth.span(&cell[last..whole.start()]));
        last = whole.end();

        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let counter = depth.counter(tag.as_str());
        let unmatched = if closing {
            let unmatched = *counter == 0;
            *counter = counter.saturating_sub(1);
            unmatched
        } else {
            *counter += 1;
            false
        };

        if unmatched {
            push_span(&mut spans, depth.span(whole.as_str()));
        }
    }
    push_span(&mut spans, depth.span(&cell[last..]));

    spans
}

/// Cell text with all recognised tags removed
pub fn plain_text(cell: &str) -> String {
    parse(cell).into_iter().map(|span| span.text).collect()
}
