/// Splits `input` into owned, non-empty tokens on any of `delimiters`.
///
/// Runs of consecutive delimiters count as a single split point, and
/// leading or trailing delimiters produce no empty tokens. An input that is
/// empty or consists solely of delimiters yields an empty vector; callers
/// must skip such results without dispatching anything.
pub fn tokenize(input: &str, delimiters: &[char]) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut buf = String::new();

    for ch in input.chars() {
        if delimiters.contains(&ch) {
            if !buf.is_empty() {
                tokens.push(std::mem::take(&mut buf));
            }
        } else {
            buf.push(ch);
        }
    }
    if !buf.is_empty() {
        tokens.push(buf);
    }

    tokens
}

/// Truncates `line` at the first occurrence of the comment marker.
pub fn strip_comment(line: &str, marker: char) -> &str {
    match line.find(marker) {
        Some(idx) => &line[..idx],
        None => line,
    }
}
