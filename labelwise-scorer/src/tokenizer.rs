//! Split a printed ingredient list into top-level ingredients.
//!
//! Commas separate ingredients only outside parentheses, so sub-ingredient
//! breakdowns such as `Palm Oil (contains: soy, antioxidant)` stay inside
//! their parent token. Anything after the final `)` is treated as trailing
//! commentary and dropped.

#![forbid(unsafe_code)]

const ESCAPED_QUOTE: &str = "&quot;";

/// Tokens produced from one ingredient list plus data-quality flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokenization {
    /// Trimmed top-level ingredients in source order.
    pub tokens: Vec<String>,
    /// The parenthesis depth was non-zero once the scan finished.
    pub unbalanced: bool,
}

/// Split `text` into trimmed top-level ingredient tokens.
///
/// # Examples
/// ```
/// use labelwise_scorer::tokenize;
///
/// let tokens = tokenize("Wheat Flour, Sugar, Palm Oil (contains: soy, antioxidant)");
/// assert_eq!(
///     tokens,
///     ["Wheat Flour", "Sugar", "Palm Oil (contains: soy, antioxidant)"]
/// );
/// assert!(tokenize("").is_empty());
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_report(text).tokens
}

/// Split `text` like [`tokenize`] and report whether parentheses balanced.
///
/// Unbalanced input still flushes its remaining buffer as a final token.
#[must_use]
pub fn tokenize_report(text: &str) -> Tokenization {
    let cleaned = strip_trailing_commentary(text).replace(ESCAPED_QUOTE, "\"");

    let mut tokens = Vec::new();
    let mut buffer = String::new();
    let mut depth = 0_i32;
    for ch in cleaned.chars() {
        match ch {
            '(' => depth = depth.saturating_add(1),
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if ch == ',' && depth == 0 {
            tokens.push(buffer.trim().to_owned());
            buffer.clear();
        } else {
            buffer.push(ch);
        }
    }
    if !buffer.is_empty() {
        tokens.push(buffer.trim().to_owned());
    }

    let unbalanced = depth != 0;
    if unbalanced {
        log::debug!("ingredient list ended at parenthesis depth {depth}; flushed remainder");
    }
    if tokens.is_empty() && !text.trim().is_empty() {
        log::warn!("non-empty ingredient list produced no tokens");
    }
    Tokenization { tokens, unbalanced }
}

/// Drop everything after the last closing parenthesis, if there is one.
fn strip_trailing_commentary(text: &str) -> &str {
    text.rfind(')')
        .and_then(|idx| text.get(..=idx))
        .unwrap_or(text)
}
