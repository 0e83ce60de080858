//! The string pipeline applied to each resource path declaration: join it
//! to the base URL, collapse the separator artifact at the join, and fill
//! in `{name}` placeholders.

use crate::config::Config;

/// Replace the `n`th occurrence (1-based) of `needle` in `s` with
/// `replacement`. Occurrences are counted left to right and the scan
/// resumes directly after each match, so `a///b` holds a single `//`.
/// Fewer than `n` occurrences leave the string unchanged.
pub fn replace_nth(s: &str, needle: &str, replacement: &str, n: usize) -> String {
    if needle.is_empty() || n == 0 {
        return s.to_string();
    }

    let mut i = 0;
    for m in 1..=n {
        match s[i..].find(needle) {
            Some(offset) => {
                i += offset;
                if m == n {
                    let mut out = String::with_capacity(s.len() + replacement.len());
                    out.push_str(&s[..i]);
                    out.push_str(replacement);
                    out.push_str(&s[i + needle.len()..]);
                    return out;
                }
                i += needle.len();
            }
            None => break,
        }
    }

    s.to_string()
}

#[test]
fn test_replace_nth() {
    assert_eq!(replace_nth("a//b//c", "//", "/", 2), "a//b/c");
    assert_eq!(replace_nth("a//b//c", "//", "/", 1), "a/b//c");
    assert_eq!(replace_nth("a//b", "//", "/", 2), "a//b");
    assert_eq!(replace_nth("abc", "//", "/", 2), "abc");
    assert_eq!(replace_nth("", "//", "/", 2), "");
}

#[test]
fn test_replace_nth_counts_sequentially() {
    // The scan resumes after each match; overlapping slashes do not count
    // twice.
    assert_eq!(replace_nth("a///b", "//", "/", 2), "a///b");
    assert_eq!(replace_nth("a////b", "//", "/", 2), "a///b");
}

#[test]
fn test_replace_nth_degenerate_arguments() {
    assert_eq!(replace_nth("a//b", "//", "/", 0), "a//b");
    assert_eq!(replace_nth("a//b", "", "/", 1), "a//b");
}

/// Join a base URL and a resource path by plain concatenation. With a
/// non-empty base, the second `//` in the result is collapsed to `/`: the
/// first is the scheme separator, the second is the usual artifact of a
/// base ending in `/` meeting a path starting with `/`. With an empty base
/// the path is returned as-is, never collapsed.
pub fn compose(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }

    replace_nth(&format!("{}{}", base, path), "//", "/", 2)
}

#[test]
fn test_compose_collapses_join() {
    assert_eq!(
        compose("http://h.tld/", "/res/{id}"),
        "http://h.tld/res/{id}"
    );
}

#[test]
fn test_compose_clean_join_untouched() {
    assert_eq!(compose("http://h.tld", "/res"), "http://h.tld/res");
    assert_eq!(compose("http://h.tld/", "res"), "http://h.tld/res");
}

#[test]
fn test_compose_empty_base() {
    assert_eq!(compose("", "/a"), "/a");
    // No base means no collapse, even for a doubled separator in the path.
    assert_eq!(compose("", "//a//b"), "//a//b");
}

/// Value a `{name}` placeholder renders to: an explicit mapping wins, then
/// the default replacement when it is non-empty, then the token itself with
/// its braces kept.
pub fn resolve_placeholder(config: &Config, name: &str) -> String {
    if let Some(value) = config.placeholders.get(name) {
        return value.clone();
    }

    match &config.replace {
        Some(replace) if !replace.is_empty() => replace.clone(),
        _ => format!("{{{}}}", name),
    }
}

/// Substitute every `{name}` token in `path`. Tokens are non-overlapping,
/// scanned left to right, with names of one or more characters containing
/// neither brace. Replacement text is never rescanned, and a token that
/// resolves to nothing stays in the output verbatim.
pub fn render(path: &str, config: &Config) -> String {
    let mut out = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find(|c| c == '{' || c == '}') {
            Some(end) if end > 0 && after.as_bytes()[end] == b'}' => {
                out.push_str(&resolve_placeholder(config, &after[..end]));
                rest = &after[end + 1..];
            }
            // An empty, unterminated or restarted token is not a
            // placeholder; emit the brace and keep scanning after it.
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[test]
fn test_render_no_placeholders() {
    let config = Config::default();
    assert_eq!(render("/users/all", &config), "/users/all");
    assert_eq!(render("", &config), "");
}

#[test]
fn test_render_unresolved_kept_verbatim() {
    let config = Config::default();
    assert_eq!(render("/users/{id}", &config), "/users/{id}");
}

#[test]
fn test_render_default_replacement() {
    let config = Config {
        replace: Some("XXX".to_string()),
        ..Config::default()
    };
    assert_eq!(
        render("/users/{id}/orders/{oid}", &config),
        "/users/XXX/orders/XXX"
    );
}

#[test]
fn test_render_malformed_tokens() {
    let config = Config {
        replace: Some("X".to_string()),
        ..Config::default()
    };
    assert_eq!(render("/a/{}", &config), "/a/{}");
    assert_eq!(render("/a/{open", &config), "/a/{open");
    assert_eq!(render("/a/}b{", &config), "/a/}b{");
    // The token restarts at the inner brace.
    assert_eq!(render("/a/{x{y}", &config), "/a/{xX");
}
