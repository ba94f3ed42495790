//! Command-line splitting.
//!
//! The raw command line is split the way the shell's path helpers do it:
//! the first space outside a double-quoted run ends the path, and everything
//! after that single space is the argument string, kept verbatim.

/// Executable to launch and the argument string to hand it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub exe: String,
    pub args: String,
}

/// Byte offset of the first space not inside quotes.
fn delimiter(command_line: &str) -> Option<usize> {
    let mut quoted = false;
    for (i, b) in command_line.bytes().enumerate() {
        match b {
            b' ' if !quoted => return Some(i),
            b'"' => quoted = !quoted,
            _ => {}
        }
    }
    None
}

/// Everything after the leading path, or "" when there are no arguments.
pub fn args_of(command_line: &str) -> &str {
    match delimiter(command_line) {
        Some(i) => &command_line[i + 1..],
        None => "",
    }
}

/// The leading path with its arguments removed.
pub fn remove_args(command_line: &str) -> &str {
    match delimiter(command_line) {
        Some(i) => &command_line[..i],
        None => command_line,
    }
}

pub fn split(command_line: &str) -> (&str, &str) {
    (remove_args(command_line), args_of(command_line))
}

/// Drop this program's own token from the full command line and split the
/// remainder into a [`Target`]. Returns `None` when no executable is named.
pub fn target_from_command_line(command_line: &str) -> Option<Target> {
    let (exe, args) = split(args_of(command_line));
    if exe.is_empty() {
        return None;
    }
    Some(Target {
        exe: exe.to_string(),
        args: args.to_string(),
    })
}
