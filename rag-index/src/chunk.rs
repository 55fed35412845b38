//! Separator-based chunking with a size policy.
//!
//! Documents short enough to fit the policy pass through whole; longer
//! documents are split at separator boundaries and greedily re-joined into
//! fragments that fit. Splitting never reorders fields, never drops a
//! piece, and is deterministic for identical input.

use tracing::trace;

/// Splits one document text into fragments.
///
/// - `text` fits `max_chars` → one fragment, the text itself.
/// - Otherwise the text is cut at `sep` occurrences and pieces are packed
///   back together (separator restored) into the fewest fragments that fit.
/// - A single piece longer than `max_chars` is kept whole rather than cut
///   mid-field.
pub fn split_with_policy(text: &str, sep: &str, max_chars: usize) -> Vec<String> {
    if text.len() <= max_chars || sep.is_empty() {
        return vec![text.to_string()];
    }

    let mut out = Vec::new();
    let mut current = String::new();

    for piece in text.split(sep) {
        let candidate_len = if current.is_empty() {
            piece.len()
        } else {
            current.len() + sep.len() + piece.len()
        };

        if !current.is_empty() && candidate_len > max_chars {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push_str(sep);
        }
        current.push_str(piece);
    }
    if !current.is_empty() {
        out.push(current);
    }

    trace!("split_with_policy: {} fragments", out.len());
    out
}

/// Splits a sequence of documents, preserving document order.
pub fn split_documents(texts: &[String], sep: &str, max_chars: usize) -> Vec<String> {
    texts
        .iter()
        .flat_map(|t| split_with_policy(t, sep, max_chars))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_stays_whole() {
        let text = "측정소명: 강남구, 날짜: 2024-01-01 12:00";
        assert_eq!(split_with_policy(text, ",", 1000), vec![text.to_string()]);
    }

    #[test]
    fn long_text_splits_at_separator() {
        let text = "aaaa,bbbb,cccc,dddd";
        let parts = split_with_policy(text, ",", 9);
        assert_eq!(parts, vec!["aaaa,bbbb", "cccc,dddd"]);
    }

    #[test]
    fn never_drops_or_reorders() {
        let text = "a,bb,ccc,dddd,eeeee";
        let parts = split_with_policy(text, ",", 6);
        assert_eq!(parts.join(","), text);
    }

    #[test]
    fn oversized_piece_kept_whole() {
        let text = "short,averyverylongpiece";
        let parts = split_with_policy(text, ",", 8);
        assert_eq!(parts, vec!["short", "averyverylongpiece"]);
    }

    #[test]
    fn deterministic_for_identical_input() {
        let text = "x,y,z".repeat(100);
        assert_eq!(
            split_with_policy(&text, ",", 50),
            split_with_policy(&text, ",", 50)
        );
    }

    #[test]
    fn document_order_preserved() {
        let docs = vec!["one".to_string(), "two".to_string()];
        assert_eq!(split_documents(&docs, ",", 1000), vec!["one", "two"]);
    }
}
