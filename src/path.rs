//! Splitting of the slash-delimited paths printed by `git ls-tree`.

use std::borrow::Cow;

const SEPARATOR: char = '/';

/// Undoes git's C-style quoting of a path (`core.quotePath`).
///
/// Paths that are not wrapped in double quotes come back unchanged. Octal
/// escapes are decoded as raw bytes, so `"d\303\251"` becomes `dé`.
pub fn unquote_path(path: &str) -> Cow<'_, str> {
    let inner = match path
        .strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
    {
        Some(inner) if path.len() >= 2 => inner,
        _ => return Cow::Borrowed(path),
    };
    let mut bytes = Vec::with_capacity(inner.len());
    let mut iter = inner.bytes().peekable();
    while let Some(b) = iter.next() {
        if b != b'\\' {
            bytes.push(b);
            continue;
        }
        match iter.next() {
            Some(b'a') => bytes.push(0x07),
            Some(b'b') => bytes.push(0x08),
            Some(b't') => bytes.push(b'\t'),
            Some(b'n') => bytes.push(b'\n'),
            Some(b'v') => bytes.push(0x0b),
            Some(b'f') => bytes.push(0x0c),
            Some(b'r') => bytes.push(b'\r'),
            Some(d @ b'0'..=b'7') => {
                let mut value = u32::from(d - b'0');
                for _ in 0..2 {
                    match iter.peek() {
                        Some(&(n @ b'0'..=b'7')) => {
                            value = value * 8 + u32::from(n - b'0');
                            iter.next();
                        }
                        _ => break,
                    }
                }
                bytes.push((value & 0xff) as u8);
            }
            Some(other) => bytes.push(other),
            None => bytes.push(b'\\'),
        }
    }
    Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
}

/// Splits `path` into its segments, outermost directory first.
///
/// Only `/` separates segments. A leading `/` is dropped, and paths using any
/// other separator come back as a single segment.
pub fn split_path(path: &str) -> Vec<String> {
    let (dirname, name) = split_last(path);
    if dirname.is_empty() || dirname == "/" {
        vec![name.to_string()]
    } else {
        let mut segments = split_path(dirname);
        segments.push(name.to_string());
        segments
    }
}

/// The last component of `path`, as `basename(1)` would print it for git paths.
pub fn basename(path: &str) -> &str {
    split_last(path).1
}

// Splits at the final separator. Repeated separators in front of the final
// component are trimmed off the directory part unless it is all separators.
fn split_last(path: &str) -> (&str, &str) {
    match path.rfind(SEPARATOR) {
        Some(idx) => {
            let head = &path[..=idx];
            let tail = &path[idx + 1..];
            let trimmed = head.trim_end_matches(SEPARATOR);
            if trimmed.is_empty() {
                (head, tail)
            } else {
                (trimmed, tail)
            }
        }
        None => ("", path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_segment() {
        assert_eq!(split_path("file.ext"), vec!["file.ext"]);
        assert_eq!(split_path("/file.ext"), vec!["file.ext"]);
    }

    #[test]
    fn nested_directory() {
        assert_eq!(split_path("path/to/directory"), vec!["path", "to", "directory"]);
        assert_eq!(split_path("/path/to/directory"), vec!["path", "to", "directory"]);
    }

    #[test]
    fn backslashes_are_not_separators() {
        assert_eq!(
            split_path(r"C:\WINDOWS\system32"),
            vec![r"C:\WINDOWS\system32"]
        );
    }

    #[test]
    fn rejoining_segments_restores_the_path() {
        for path in ["a", "a/b", "src/bin/tool.rs", "docs/api/v1/index.html"] {
            let segments = split_path(path);
            assert_eq!(segments.len(), path.matches('/').count() + 1);
            assert_eq!(segments.join("/"), path);
        }
    }

    #[test]
    fn unquotes_octal_escapes() {
        assert_eq!(unquote_path(r#""d\303\251/x""#), "dé/x");
        assert_eq!(unquote_path(r#""tab\there""#), "tab\there");
        assert_eq!(unquote_path(r#""say \"hi\"""#), "say \"hi\"");
        assert_eq!(unquote_path(r#""back\\slash""#), "back\\slash");
    }

    #[test]
    fn unquoted_paths_are_borrowed() {
        assert!(matches!(unquote_path("plain/path"), Cow::Borrowed("plain/path")));
        assert_eq!(unquote_path("\""), "\"");
        assert_eq!(unquote_path(r#""""#), "");
    }

    #[test]
    fn basename_is_last_component() {
        assert_eq!(basename("README.rst"), "README.rst");
        assert_eq!(basename("git_ls_anytree/VERSION"), "VERSION");
        assert_eq!(basename("a/b/c d.txt"), "c d.txt");
    }
}
