/// Return the argument portion of a `git add` command, or `None` if the
/// command is something else.
///
/// Matches case-insensitively: optional leading whitespace, `git`,
/// whitespace, `add`, whitespace, then everything that follows. `git add`
/// with nothing after it, `git addx` and `git commit` all yield `None`.
pub fn add_arguments(command: &str) -> Option<&str> {
    let rest = strip_word(command.trim_start(), "git")?;
    let rest = strip_word(rest.trim_start(), "add")?;
    Some(rest)
}

/// Strip a case-insensitive leading `word` that is followed by whitespace.
fn strip_word<'a>(s: &'a str, word: &str) -> Option<&'a str> {
    let head = s.get(..word.len())?;
    if !head.eq_ignore_ascii_case(word) {
        return None;
    }
    let rest = &s[word.len()..];
    rest.starts_with(char::is_whitespace).then_some(rest)
}
