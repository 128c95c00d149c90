//! Extract color values from stylesheet text.

use std::sync::LazyLock;

use regex::Regex;
use styledom::Color;

/// Declarations whose values may carry colors.
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[{;\s])(color|background|background-color|border|border-color|border-top-color|border-right-color|border-bottom-color|border-left-color|outline-color|fill|stroke)\s*:\s*([^;}]+)",
    )
    .expect("declaration pattern is valid")
});

/// Candidate color tokens inside a declaration value.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#[0-9a-fA-F]{3,8}\b|(?i:rgba?|hsla?)\([^)]*\)|[A-Za-z]+")
        .expect("token pattern is valid")
});

/// Every color occurrence in `css`, in source order, as written.
///
/// Hex and functional notations are kept even if they fail to parse; bare
/// words are kept only when they name a known color, so keywords such as
/// `solid` or `inherit` are skipped.
pub fn scan_colors(css: &str) -> Vec<String> {
    let css = strip_comments(css);
    DECLARATION
        .captures_iter(&css)
        .filter_map(|caps| caps.get(2))
        .flat_map(|value| {
            TOKEN
                .find_iter(value.as_str())
                .map(|m| m.as_str())
                .filter(|token| is_color_token(token))
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

fn is_color_token(token: &str) -> bool {
    if token.starts_with('#') || token.contains('(') {
        return true;
    }
    Color::parse(token).is_ok()
}

fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}
