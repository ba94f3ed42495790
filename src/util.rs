//! Shared utility functions.

/// Encode a Rust string as a null-terminated wide (UTF-16) string.
pub fn encode_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// File name part of a path, the way the shell finds it: text after the
/// last `\`, `/` or `:` that is followed by something other than another
/// separator. A trailing separator stays on the last component.
pub fn file_name(path: &str) -> &str {
    let mut start = 0;
    let mut chars = path.char_indices().peekable();
    while let Some((_, c)) = chars.next() {
        if matches!(c, '\\' | '/' | ':') {
            if let Some(&(next, n)) = chars.peek() {
                if n != '\\' && n != '/' {
                    start = next;
                }
            }
        }
    }
    &path[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_wide_appends_terminator() {
        assert_eq!(encode_wide("ab"), vec![b'a' as u16, b'b' as u16, 0]);
        assert_eq!(encode_wide(""), vec![0]);
    }

    #[test]
    fn file_name_takes_last_component() {
        assert_eq!(file_name(r"C:\Tools\exec-in-explorer.exe"), "exec-in-explorer.exe");
        assert_eq!(file_name("/usr/bin/thing"), "thing");
        assert_eq!(file_name("bare.exe"), "bare.exe");
        assert_eq!(file_name(""), "");
    }

    #[test]
    fn file_name_splits_on_drive_colon() {
        assert_eq!(file_name("C:launch.exe"), "launch.exe");
        assert_eq!(file_name(r"\\?\C:\x\y.exe"), "y.exe");
    }

    #[test]
    fn file_name_keeps_trailing_separator() {
        assert_eq!(file_name(r"C:\Tools\"), r"Tools\");
        assert_eq!(file_name(r"C:\Tools\\"), r"Tools\\");
        assert_eq!(file_name("/usr/bin/"), "bin/");
        assert_eq!(file_name(r"C:\"), r"C:\");
    }
}
