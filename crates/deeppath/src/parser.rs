//! Path string compiler.
//!
//! Turns a slash-delimited path like `users[0]/name` or `a/*/b` into a
//! sequence of [`PathCommand`]s, and recognizes the `name[int]`
//! repetition segments shared by the strict reader and the writer.

use std::borrow::Cow;

use crate::types::{PathCommand, Repetition};

/// Compile a path string into traversal commands.
///
/// A single leading `/` is ignored. A bracket group (`[*]` or a signed
/// integer) attached directly to a key splits into its own command, so
/// `users[0]/name` compiles the same as `users/[0]/name`. A `*` key with
/// an attached index becomes a fan-out followed by the index.
///
/// Compilation never fails: a token with malformed bracket syntax is
/// kept verbatim as a literal [`PathCommand::DictKey`].
///
/// # Example
///
/// ```
/// use deeppath::{parse_path, PathCommand};
///
/// assert_eq!(
///     parse_path("/users[0]/name"),
///     vec![
///         PathCommand::DictKey("users".to_string()),
///         PathCommand::ListIndex(0),
///         PathCommand::DictKey("name".to_string()),
///     ]
/// );
/// ```
pub fn parse_path(path: &str) -> Vec<PathCommand> {
    let path = path.strip_prefix('/').unwrap_or(path);
    separate_brackets(path).split('/').map(make_command).collect()
}

/// Recognize a repetition segment of the form `name[3]` or `*[0]`.
///
/// The key must be one or more word characters or `*`, and the bracket
/// group must close the segment. Anything else, including a malformed
/// index, is `None`; callers then treat the segment as a literal key.
pub fn repetition_index(segment: &str) -> Option<Repetition<'_>> {
    let open = segment.find('[')?;
    if open == 0 || !segment.ends_with(']') {
        return None;
    }
    let key = &segment[..open];
    if !key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '*') {
        return None;
    }
    let index = segment[open + 1..segment.len() - 1].parse().ok()?;
    Some(Repetition { key, index })
}

/// Insert a `/` before every `[*]` or `[<int>]` group that directly
/// follows a non-`/` character, so attached groups split into their own
/// tokens. Applies to every occurrence: `a[0][1]` becomes `a/[0]/[1]`.
fn separate_brackets(path: &str) -> Cow<'_, str> {
    if !path.contains('[') {
        return Cow::Borrowed(path);
    }
    let bytes = path.as_bytes();
    let mut out = String::with_capacity(path.len() + 8);
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'[' && i > 0 && bytes[i - 1] != b'/' {
            if let Some(end) = bracket_group_end(bytes, i) {
                out.push_str(&path[copied..i]);
                out.push('/');
                out.push_str(&path[i..end]);
                copied = end;
                i = end;
                continue;
            }
        }
        i += 1;
    }
    if copied == 0 {
        return Cow::Borrowed(path);
    }
    out.push_str(&path[copied..]);
    Cow::Owned(out)
}

/// Byte index one past the closing `]` when `bytes[start]` opens a
/// `[*]` or `[<signed-int>]` group, `None` for anything else.
fn bracket_group_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;
    if bytes.get(i) == Some(&b'*') {
        i += 1;
    } else {
        if bytes.get(i) == Some(&b'-') {
            i += 1;
        }
        let digits = i;
        while bytes.get(i).is_some_and(|b| b.is_ascii_digit()) {
            i += 1;
        }
        if i == digits {
            return None;
        }
    }
    (bytes.get(i) == Some(&b']')).then_some(i + 1)
}

fn make_command(token: &str) -> PathCommand {
    match token {
        "*" => PathCommand::DictFlat,
        "[*]" => PathCommand::ListFlat,
        _ => match index_token(token) {
            Some(index) => PathCommand::ListIndex(index),
            None => PathCommand::DictKey(token.to_string()),
        },
    }
}

/// Parse a whole token of the form `[<signed-int>]`.
fn index_token(token: &str) -> Option<isize> {
    let body = token.strip_prefix('[')?.strip_suffix(']')?;
    let digits = body.strip_prefix('-').unwrap_or(body);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    body.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PathCommand::*;

    fn key(name: &str) -> PathCommand {
        DictKey(name.to_string())
    }

    #[test]
    fn test_parse_plain_keys() {
        assert_eq!(
            parse_path("deeply/nested/path"),
            vec![key("deeply"), key("nested"), key("path")]
        );
    }

    #[test]
    fn test_parse_leading_slash_stripped() {
        assert_eq!(parse_path("/a/b"), vec![key("a"), key("b")]);
    }

    #[test]
    fn test_parse_attached_index_splits() {
        assert_eq!(
            parse_path("users[0]/name"),
            vec![key("users"), ListIndex(0), key("name")]
        );
        assert_eq!(parse_path("a[-1]"), vec![key("a"), ListIndex(-1)]);
    }

    #[test]
    fn test_parse_chained_indexes_split() {
        assert_eq!(
            parse_path("a[0][1]"),
            vec![key("a"), ListIndex(0), ListIndex(1)]
        );
        assert_eq!(
            parse_path("[1][0]"),
            vec![ListIndex(1), ListIndex(0)]
        );
    }

    #[test]
    fn test_parse_wildcards() {
        assert_eq!(parse_path("a/*/b"), vec![key("a"), DictFlat, key("b")]);
        assert_eq!(parse_path("a[*]"), vec![key("a"), ListFlat]);
        assert_eq!(parse_path("*[0]"), vec![DictFlat, ListIndex(0)]);
    }

    #[test]
    fn test_parse_bare_index() {
        assert_eq!(parse_path("[-1]"), vec![ListIndex(-1)]);
    }

    #[test]
    fn test_parse_malformed_bracket_is_literal_key() {
        assert_eq!(parse_path("a[x]"), vec![key("a[x]")]);
        assert_eq!(parse_path("[12"), vec![key("[12")]);
        assert_eq!(parse_path("a[--1]"), vec![key("a[--1]")]);
    }

    #[test]
    fn test_repetition_index() {
        assert_eq!(
            repetition_index("name[3]"),
            Some(Repetition { key: "name", index: 3 })
        );
        assert_eq!(
            repetition_index("*[0]"),
            Some(Repetition { key: "*", index: 0 })
        );
        assert_eq!(
            repetition_index("name[-1]"),
            Some(Repetition { key: "name", index: -1 })
        );
    }

    #[test]
    fn test_repetition_index_rejects_non_repetitions() {
        assert_eq!(repetition_index("name"), None);
        assert_eq!(repetition_index("[3]"), None);
        assert_eq!(repetition_index("name[x]"), None);
        assert_eq!(repetition_index("a.b[3]"), None);
    }
}
