//! Command line tokenizer
//!
//! Splits on single spaces, one token per call. The dispatcher only
//! consults the first token; the rest of the line is ignored.

/// Extract the next space-delimited token, advancing `remaining` past it.
///
/// With no space left the whole remainder is the token and `remaining`
/// becomes empty. Empty input yields an empty token.
pub fn next_token<'a>(remaining: &mut &'a str) -> &'a str {
    match remaining.split_once(' ') {
        Some((token, rest)) => {
            *remaining = rest;
            token
        }
        None => {
            let token = *remaining;
            *remaining = "";
            token
        }
    }
}
