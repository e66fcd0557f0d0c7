use std::collections::HashMap;

/// Number of characters (Unicode scalar values) in `text`.
pub fn character_count(text: &str) -> usize {
    text.chars().count()
}

/// Shannon entropy of the character distribution, in bits.
///
/// Every character contributes to the frequency table, whitespace and
/// punctuation included. Empty text has zero entropy.
pub fn shannon_entropy(text: &str) -> f64 {
    let mut frequencies: HashMap<char, usize> = HashMap::new();
    let mut total = 0_usize;
    for character in text.chars() {
        *frequencies.entry(character).or_default() += 1;
        total += 1;
    }

    if total == 0 {
        return 0.0;
    }

    let length = total as f64;
    let mut counts: Vec<usize> = frequencies.into_values().collect();
    // Fixed summation order keeps results bit-identical across calls.
    counts.sort_unstable();

    counts.into_iter().fold(0.0, |entropy, count| {
        let probability = count as f64 / length;
        let term = probability * probability.log2();
        entropy - term
    })
}

/// Fraction of characters that are not ASCII letters, ASCII digits or whitespace.
pub fn non_alphanumeric_ratio(text: &str) -> f64 {
    let mut total = 0_usize;
    let mut symbols = 0_usize;
    for character in text.chars() {
        total += 1;
        if !character.is_ascii_alphanumeric() && !character.is_whitespace() {
            symbols += 1;
        }
    }

    if total == 0 {
        return 0.0;
    }

    symbols as f64 / total as f64
}

#[cfg(test)]
#[allow(clippy::float_cmp, reason = "Exact values are representable")]
mod tests {
    use super::*;

    #[test]
    fn test_character_count_is_unicode_aware() {
        assert_eq!(character_count("naïve"), 5);
        assert_eq!(character_count(""), 0);
    }

    #[test]
    fn test_entropy_of_uniform_text() {
        assert_eq!(shannon_entropy("aaaa"), 0.0);
        assert_eq!(shannon_entropy("ab"), 1.0);
        assert_eq!(shannon_entropy("abcd"), 2.0);
    }

    #[test]
    fn test_entropy_counts_whitespace() {
        assert_eq!(shannon_entropy("a a "), 1.0);
    }

    #[test]
    fn test_entropy_empty() {
        assert_eq!(shannon_entropy(""), 0.0);
    }

    #[test]
    fn test_non_alphanumeric_ratio() {
        assert_eq!(non_alphanumeric_ratio("a+b="), 0.5);
        assert_eq!(non_alphanumeric_ratio("abc 123"), 0.0);
        assert_eq!(non_alphanumeric_ratio(""), 0.0);
    }

    #[test]
    fn test_non_ascii_letters_count_as_symbols() {
        assert_eq!(non_alphanumeric_ratio("éa"), 0.5);
    }
}
