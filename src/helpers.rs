/// Characters stripped by [`trim`]: space, tab, LF, CR, NUL and vertical tab.
#[inline]
fn is_trimmable(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

/// Trim leading and trailing whitespace and NUL bytes.
///
/// Narrower than [`str::trim`]: Unicode spaces are kept verbatim.
pub fn trim(input: &str) -> &str {
    input.trim_matches(is_trimmable)
}

/// Split a URL at the first `?` into `(path, query)`.
/// Later `?` characters stay inside the query part.
pub fn split_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes())
        .map_or((input, None), |pos| (&input[..pos], Some(&input[pos + 1..])))
}

/// Split a query token at the first `=` into `(key, value)`.
pub fn split_pair(token: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'=', token.as_bytes())
        .map_or((token, None), |pos| (&token[..pos], Some(&token[pos + 1..])))
}
