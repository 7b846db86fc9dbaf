//! Comment Formatter: turn a raw doc comment into markdown prose.

use crate::annotation::MARKDOWN_MARKER;

/// Inline tags and their labels. `@param[in]`/`@param[out]` are listed
/// before `@param` so the bracketed forms are never split.
const TAGS: &[(&str, &str)] = &[
    ("@brief", "brief"),
    ("@param[in]", "param[in]"),
    ("@param[out]", "param[out]"),
    ("@param", "param"),
    ("@tparam", "tparam"),
    ("@return", "return"),
];

/// Format the body of a comment token.
///
/// Each line loses everything up to its first `*` and surrounding
/// whitespace, tags become bold list labels, empty lines vanish, and the
/// first and last surviving lines (the `/**` and `*/` remnants) are dropped.
/// Lines carrying the markdown marker are removed up front.
pub fn format_comment(raw_text: &str) -> String {
    let lines: Vec<String> = raw_text
        .lines()
        .filter(|line| !line.contains(MARKDOWN_MARKER))
        .map(|line| substitute_tags(strip_delimiter(line)))
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() <= 2 {
        return String::new();
    }
    lines[1..lines.len() - 1].join("\n")
}

fn strip_delimiter(line: &str) -> &str {
    match line.find('*') {
        Some(pos) => line[pos + 1..].trim(),
        None => line.trim(),
    }
}

fn substitute_tags(text: &str) -> String {
    TAGS.iter().fold(text.to_string(), |acc, (tag, label)| {
        if acc.contains(tag) {
            acc.replace(tag, &format!("- **{label}:**"))
        } else {
            acc
        }
    })
}
