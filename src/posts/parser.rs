use crate::Result;

/// Turns raw model output into post drafts.
///
/// Text framed by `[` and `]` must decode as a JSON array of strings, and a
/// decoding failure is returned as an error rather than recovered. Anything
/// else is split into blank-line separated paragraphs.
pub fn parse_posts(raw: &str) -> Result<Vec<String>> {
    let text = raw.trim();

    if text.starts_with('[') && text.ends_with(']') {
        let posts: Vec<String> = serde_json::from_str(text)?;
        return Ok(posts);
    }

    Ok(text
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect())
}
