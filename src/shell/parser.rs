//! Line tokenizer.
//!
//! Splits a submitted line into space-delimited tokens borrowed from the line
//! itself. Only `b' '` separates tokens; runs of spaces collapse.

/// Split `line` on spaces into at most `N` tokens.
///
/// Empty tokens never appear. Text past the `N`th token is dropped.
pub fn tokenize<const N: usize>(line: &[u8]) -> heapless::Vec<&[u8], N> {
    let mut tokens = heapless::Vec::new();
    for token in line.split(|&b| b == b' ').filter(|t| !t.is_empty()) {
        if tokens.push(token).is_err() {
            break;
        }
    }
    tokens
}
