pub(crate) fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    a.to_lowercase() == b.to_lowercase()
}

/// Path portion of a request URI, without its query component.
pub(crate) fn strip_query(uri: &str) -> &str {
    match uri.find('?') {
        Some(idx) => &uri[..idx],
        None => uri,
    }
}

pub(crate) fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
