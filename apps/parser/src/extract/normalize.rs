/// Splits raw document text into trimmed, non-empty lines, preserving the
/// original relative order. Mixed line endings, form-feed page breaks, and
/// runs of inconsistent whitespace inside a line are all normalized away.
///
/// Pure transform: empty input yields an empty sequence.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.split(['\n', '\u{0c}'])
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}
