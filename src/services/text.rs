/// Normalizes free-text post titles before vectorization.
///
/// Drops every character that is not a word character or whitespace, which
/// removes punctuation, emoji, and symbols (hashtag markers included), then
/// collapses whitespace runs to a single space and trims the ends.
///
/// Total over all inputs. Callers substitute an empty string for missing
/// titles before calling, so this never sees a null value.
pub fn clean(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}
