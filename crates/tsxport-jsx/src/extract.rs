//! Locating the returned markup inside a component source file.

use regex::Regex;
use std::sync::LazyLock;

/// Fragment used when no `return` statement with markup can be found.
pub const FALLBACK_FRAGMENT: &str = "<div>컨텐츠를 불러올 수 없습니다.</div>";

/// Which pattern produced an extracted body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySource {
    /// `return ( ... );`
    Parenthesized,
    /// `return <...>;` on a single line
    SingleTag,
    /// Nothing matched; the fallback fragment was used
    Fallback,
}

/// An extracted body fragment and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedBody {
    pub fragment: String,
    pub source: BodySource,
}

// Non-greedy up to the first `);` - nested calls inside the markup end the capture early.
static PAREN_RETURN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"return\s*\(([\s\S]*?)\);").expect("Invalid parenthesized return regex")
});

static TAG_RETURN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"return\s*<([^\n]*?)>;").expect("Invalid single-tag return regex")
});

/// Extract the renderable body from source text.
///
/// Never fails: unmatched input yields [`FALLBACK_FRAGMENT`].
pub fn extract_body(source: &str) -> String {
    locate_body(source).fragment
}

/// Extract the renderable body and report which rule matched.
pub fn locate_body(source: &str) -> ExtractedBody {
    if let Some(caps) = PAREN_RETURN_RE.captures(source) {
        let inner = caps.get(1).map_or("", |m| m.as_str());

        // `return ();` - keep the degenerate wrapper rather than the fallback
        let fragment = if inner.is_empty() {
            format!("<{inner}>")
        } else {
            inner.to_string()
        };

        return ExtractedBody {
            fragment,
            source: BodySource::Parenthesized,
        };
    }

    if let Some(caps) = TAG_RETURN_RE.captures(source) {
        let inner = caps.get(1).map_or("", |m| m.as_str());
        return ExtractedBody {
            fragment: format!("<{inner}>"),
            source: BodySource::SingleTag,
        };
    }

    ExtractedBody {
        fragment: FALLBACK_FRAGMENT.to_string(),
        source: BodySource::Fallback,
    }
}
