/// Find `name` in a `document.cookie`-style string (`a=1; b=2`).
///
/// This is a plain split, not a full cookie parser: if the name shows up more
/// than once the result is `None`, and an empty value counts as missing.
/// Percent-encoded values are decoded; values that don't decode to UTF-8 are
/// returned as-is.
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    let padded = format!("; {cookies}");
    let needle = format!("; {name}=");

    let mut parts = padded.split(needle.as_str());
    parts.next();
    let rest = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let raw = rest.split(';').next()?;
    if raw.is_empty() {
        return None;
    }

    Some(
        urlencoding::decode(raw)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| raw.to_string()),
    )
}
