/// Sentence terminators; a run of them ends one sentence.
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Tokens between runs of whitespace.
///
/// Leading or trailing whitespace yields an empty token at that edge, so
/// `" a "` is `["", "a", ""]`. Empty tokens count towards the word total and
/// lower the average word length.
pub fn words(text: &str) -> Vec<&str> {
    let trimmed = text.trim();
    let mut tokens = Vec::new();
    if text.starts_with(char::is_whitespace) {
        tokens.push("");
    }
    tokens.extend(trimmed.split_whitespace());
    if text.ends_with(char::is_whitespace) {
        tokens.push("");
    }
    tokens
}

/// Sentence fragments between runs of `.`, `!` and `?`.
///
/// Fragments that are empty after trimming are discarded, so `"Wait... what?"`
/// yields two sentences.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(SENTENCE_TERMINATORS)
        .filter(|fragment| !fragment.trim().is_empty())
}

/// Mean character length of `tokens`, or 0 when there are none.
pub fn average_word_length(tokens: &[&str]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }

    let total: usize = tokens.iter().map(|token| token.chars().count()).sum();
    total as f64 / tokens.len() as f64
}

/// Words per sentence, or 0 when there are no sentences.
pub fn average_sentence_length(word_count: usize, sentence_count: usize) -> f64 {
    if sentence_count == 0 {
        return 0.0;
    }

    word_count as f64 / sentence_count as f64
}
