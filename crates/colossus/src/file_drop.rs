// Chunk: docs/chunks/dragdrop_file_paste - Drag-and-drop file path pasting
//!
//! Text inserted when files are dropped on the terminal.
//!
//! Each dropped item is a `file://` URI or a plain path. Items that do not
//! decode, or name nothing on disk, are logged and skipped; the rest are
//! shell-quoted and joined by spaces, with one trailing space so the user can
//! keep typing.
//!
//! A hosting terminal delivers a drop from a file manager as a paste, so
//! [`paste_as_drop`] decides whether pasted text is a list of files.

use std::path::PathBuf;

use colossus_launch::{resolve_path, shell_quote_all, FILE_SCHEME};

/// Decodes dropped items to existing paths, skipping the rest.
pub fn dropped_paths<S: AsRef<str>>(items: &[S]) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for item in items {
        let item = item.as_ref().trim_end_matches(['\r', '\n']);
        if item.is_empty() {
            continue;
        }
        let Some(path) = resolve_path(item) else {
            log::warn!("drop: could not decode {:?}", item);
            continue;
        };
        if !path.exists() {
            log::warn!("drop: {} does not exist", path.display());
            continue;
        }
        paths.push(path);
    }
    paths
}

/// The text fed to the child for a drop, or `None` if nothing survived.
pub fn drop_text<S: AsRef<str>>(items: &[S]) -> Option<String> {
    let paths: Vec<String> = dropped_paths(items)
        .iter()
        .map(|path| path.to_string_lossy().into_owned())
        .collect();
    if paths.is_empty() {
        return None;
    }
    let mut text = shell_quote_all(&paths);
    text.push(' ');
    Some(text)
}

/// Splits pasted text into drop items if every line names an existing file.
///
/// A line counts when it is an absolute path or a `file://` URI, optionally
/// wrapped in single quotes. Anything else means the paste is ordinary text.
pub fn paste_as_drop(text: &str) -> Option<Vec<String>> {
    let items: Vec<String> = text
        .lines()
        .map(strip_quotes)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    if items.is_empty() {
        return None;
    }
    let all_files = items.iter().all(|item| {
        (item.starts_with('/') || item.starts_with(FILE_SCHEME))
            && resolve_path(item).is_some_and(|path| path.exists())
    });
    all_files.then_some(items)
}

fn strip_quotes(line: &str) -> &str {
    let line = line.trim();
    line.strip_prefix('\'')
        .and_then(|inner| inner.strip_suffix('\''))
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn single_path_is_quoted_with_trailing_space() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "x").unwrap();

        let text = drop_text(&[file.to_str().unwrap()]).unwrap();
        assert_eq!(text, format!("'{}' ", file.display()));
    }

    #[test]
    fn uris_are_decoded() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("my file.txt");
        fs::write(&file, "x").unwrap();
        let uri = format!("file://{}", file.display()).replace(' ', "%20");

        let text = drop_text(&[uri]).unwrap();
        assert_eq!(text, format!("'{}' ", file.display()));
    }

    #[test]
    fn multiple_items_are_space_joined() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("it's");
        fs::write(&a, "").unwrap();
        fs::create_dir(&b).unwrap();

        let text = drop_text(&[a.to_str().unwrap(), b.to_str().unwrap()]).unwrap();
        assert_eq!(
            text,
            format!("'{}' '{}'\"'\"'s' ", a.display(), dir.path().join("it").display())
        );
    }

    #[test]
    fn missing_and_undecodable_items_are_skipped() {
        let dir = TempDir::new().unwrap();
        let kept = dir.path().join("kept");
        fs::write(&kept, "").unwrap();
        let missing = dir.path().join("missing");

        let items = vec![
            "file://remote-host/etc/hosts".to_string(),
            missing.to_string_lossy().into_owned(),
            kept.to_string_lossy().into_owned(),
        ];
        assert_eq!(dropped_paths(&items), vec![kept.clone()]);
        assert_eq!(drop_text(&items).unwrap(), format!("'{}' ", kept.display()));
    }

    #[test]
    fn nothing_surviving_feeds_nothing() {
        assert_eq!(drop_text(&["/definitely/not/here"]), None);
        assert_eq!(drop_text::<&str>(&[]), None);
    }

    #[test]
    fn uri_list_line_endings_are_stripped() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, "").unwrap();
        let item = format!("file://{}\r\n", file.display());
        assert_eq!(dropped_paths(&[item]), vec![file]);
    }

    #[test]
    fn pasted_uri_list_is_a_drop() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b c");
        fs::write(&a, "").unwrap();
        fs::write(&b, "").unwrap();
        let text = format!("file://{}\r\n'{}'\n", a.display(), b.display());

        let items = paste_as_drop(&text).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(dropped_paths(&items), vec![a, b]);
    }

    #[test]
    fn ordinary_paste_is_not_a_drop() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, "").unwrap();

        assert_eq!(paste_as_drop("echo hello\n"), None);
        assert_eq!(paste_as_drop(""), None);
        assert_eq!(paste_as_drop("/definitely/not/here"), None);
        // One stray line makes the whole paste text
        assert_eq!(paste_as_drop(&format!("{}\nls\n", file.display())), None);
    }
}
