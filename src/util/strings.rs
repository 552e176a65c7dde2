/// Returns `s` with the byte range `start..end` cut out. Out of range or non char boundary indices
/// leave `s` untouched.
pub fn excise(
    s: &str,
    start: usize,
    end: usize,
) -> String {
    let (Some(head), Some(tail)) = (s.get(..start), s.get(end..)) else {
        return s.to_owned();
    };

    if start > end {
        return s.to_owned();
    }

    [head, tail].concat()
}

/// Splits `s` on whitespace into owned tokens.
pub fn split_tokens(s: &str) -> Vec<String> {
    s.split_whitespace().map(ToOwned::to_owned).collect()
}
