// Chunk: docs/chunks/dragdrop_file_paste - Shell quoting for dropped paths
//! Shell quoting for strings spliced into a command line.
//!
//! Dropped paths and pasted file names can contain spaces, quotes, newlines or
//! any other shell metacharacter. Single-quote quoting is the one POSIX form
//! with no special characters inside, so the only thing to handle is the
//! single quote itself.

/// Quotes a string so a POSIX shell reads it back as exactly that string.
///
/// The string is wrapped in single quotes. Each embedded single quote closes
/// the quoting, emits a double-quoted `'`, and reopens: `'` becomes `'"'"'`.
///
/// # Examples
///
/// ```
/// use colossus_launch::shell_quote;
///
/// assert_eq!(shell_quote("/home/me/file.txt"), "'/home/me/file.txt'");
/// assert_eq!(shell_quote("it's"), "'it'\"'\"'s'");
/// assert_eq!(shell_quote(""), "''");
/// ```
pub fn shell_quote(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    result.push('\'');
    for c in text.chars() {
        if c == '\'' {
            result.push_str("'\"'\"'");
        } else {
            result.push(c);
        }
    }
    result.push('\'');
    result
}

/// Quotes each item and joins them with single spaces.
pub fn shell_quote_all<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| shell_quote(item.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_path() {
        assert_eq!(shell_quote("/home/test/file.txt"), "'/home/test/file.txt'");
    }

    #[test]
    fn test_path_with_space() {
        assert_eq!(
            shell_quote("/home/test/my file.txt"),
            "'/home/test/my file.txt'"
        );
    }

    #[test]
    fn test_path_with_single_quote() {
        assert_eq!(
            shell_quote("/home/test/foo's.txt"),
            "'/home/test/foo'\"'\"'s.txt'"
        );
    }

    #[test]
    fn test_only_quotes() {
        assert_eq!(shell_quote("''"), "''\"'\"''\"'\"''");
    }

    #[test]
    fn test_empty() {
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn test_metacharacters_are_left_alone() {
        assert_eq!(shell_quote("$HOME"), "'$HOME'");
        assert_eq!(shell_quote("a`b`"), "'a`b`'");
        assert_eq!(shell_quote("back\\slash"), "'back\\slash'");
        assert_eq!(shell_quote("line\nbreak\t"), "'line\nbreak\t'");
    }

    #[test]
    fn test_quote_all() {
        let items = vec!["/a b".to_string(), "/c'd".to_string()];
        assert_eq!(shell_quote_all(&items), "'/a b' '/c'\"'\"'d'");
    }

    #[test]
    fn test_quote_all_empty() {
        let items: Vec<String> = vec![];
        assert_eq!(shell_quote_all(&items), "");
    }
}
