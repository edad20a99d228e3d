//! Tokenizer for the `detected_objects` field.
//!
//! The field is a `;`-separated list of entries shaped like `label(confidence)`.
//! Only the label part is kept, lowercased and split into alphabetic words.

/// Extracts word tokens from a detected-objects value.
///
/// ```
/// use haunted_wordcloud::tokenizer::extract_words;
///
/// let words = extract_words(Some("ghost(0.9); chair(0.1); ghost(0.8)"));
/// assert_eq!(words, vec!["ghost", "chair", "ghost"]);
/// ```
pub fn extract_words(detected_objects: Option<&str>) -> Vec<String> {
    let Some(value) = detected_objects else {
        return Vec::new();
    };

    value
        .split(';')
        .filter_map(|entry| entry.split_once('(').map(|(label, _)| label))
        .flat_map(|label| label_words(&label.to_lowercase()))
        .filter(|word| word.len() > 1)
        .collect()
}

/// Maximal runs of `a`-`z` in an already lowercased label.
fn label_words(label: &str) -> Vec<String> {
    label
        .split(|c: char| !c.is_ascii_lowercase())
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_yields_no_tokens() {
        assert!(extract_words(None).is_empty());
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let words = extract_words(Some("ghost(0.9); chair(0.1); ghost(0.8)"));
        assert_eq!(words, vec!["ghost", "chair", "ghost"]);
    }

    #[test]
    fn test_segments_without_paren_are_ignored() {
        let words = extract_words(Some("ghost; chair(0.4);lamp"));
        assert_eq!(words, vec!["chair"]);
    }

    #[test]
    fn test_multi_word_labels_split() {
        let words = extract_words(Some("Dining Table(0.7); teddy-bear(0.5)"));
        assert_eq!(words, vec!["dining", "table", "teddy", "bear"]);
    }

    #[test]
    fn test_only_text_before_first_paren() {
        let words = extract_words(Some("window(frame(0.3))"));
        assert_eq!(words, vec!["window"]);
    }

    #[test]
    fn test_digits_and_single_letters_dropped() {
        let words = extract_words(Some("tv2 monitor(0.8); a b(0.1); x(0.2)"));
        assert_eq!(words, vec!["tv", "monitor"]);
    }

    #[test]
    fn test_non_ascii_letters_break_words() {
        let words = extract_words(Some("café table(0.5)"));
        assert_eq!(words, vec!["caf", "table"]);
    }

    #[test]
    fn test_empty_and_malformed_values() {
        assert!(extract_words(Some("")).is_empty());
        assert!(extract_words(Some(";;;")).is_empty());
        assert!(extract_words(Some("(0.9)")).is_empty());
        assert!(extract_words(Some("123(0.1)")).is_empty());
    }
}
