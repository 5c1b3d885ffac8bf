//! Argument tokenizer
//!
//! Splits a single chain link on spaces while keeping quoted regions as one
//! token. Quotes are kept in the token text and the space inside a quoted
//! region is dropped when its pieces are joined (`"b c"` becomes `"bc"`),
//! which existing command lines rely on.

use crate::error::{WatchmanError, WatchmanResult};

const QUOTES: &[char] = &['"', '\''];

/// Split one command link into argument tokens.
///
/// Splitting `""` yields a single empty token; rejecting an empty program is
/// left to the command builder.
pub fn tokenize(command: &str) -> WatchmanResult<Vec<String>> {
    let fragments: Vec<&str> = command.split(' ').collect();

    if let Some(stray) = fragments
        .iter()
        .find(|fragment| fragment.contains(QUOTES) && !is_quoted(fragment))
    {
        return Err(WatchmanError::StrayQuote {
            fragment: (*stray).to_string(),
            command: command.to_string(),
        });
    }

    let mut tokens: Vec<String> = Vec::with_capacity(fragments.len());
    let mut rest = fragments.into_iter();

    while let Some(fragment) = rest.next() {
        let mut token = fragment.to_string();

        while is_non_terminated_quote(&token) {
            match rest.next() {
                Some(next) => token.push_str(next),
                None => break,
            }
        }

        tokens.push(token);
    }

    // Merging stops early only when input runs out, so only the last token
    // can still be open.
    if let Some(last) = tokens.last().filter(|t| is_non_terminated_quote(t)) {
        return Err(WatchmanError::UnterminatedQuote {
            fragment: last.clone(),
            command: command.to_string(),
        });
    }

    Ok(tokens)
}

/// True if the fragment begins OR ends with a quote character.
fn is_quoted(fragment: &str) -> bool {
    fragment.starts_with(QUOTES) || fragment.ends_with(QUOTES)
}

/// True if the fragment opens a quote that it does not close.
///
/// A lone quote character opens a region but cannot also close it.
fn is_non_terminated_quote(fragment: &str) -> bool {
    match fragment.chars().next() {
        Some(open) if QUOTES.contains(&open) => fragment.len() == 1 || !fragment.ends_with(open),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_quoted_edges() {
        assert!(is_quoted("\"abc"));
        assert!(is_quoted("abc'"));
        assert!(!is_quoted("a\"bc"));
        assert!(!is_quoted(""));
    }

    #[test]
    fn test_non_terminated_quote() {
        assert!(is_non_terminated_quote("\"abc"));
        assert!(is_non_terminated_quote("'abc\""));
        assert!(is_non_terminated_quote("'"));
        assert!(!is_non_terminated_quote("'abc'"));
        assert!(!is_non_terminated_quote("''"));
        assert!(!is_non_terminated_quote("abc\""));
        assert!(!is_non_terminated_quote(""));
    }
}
