use super::Token;

/// Split the argument portion of a `git add` command into tokens.
///
/// Tokens are maximal runs of `(non-space-non-quote text | "quoted span")`.
/// A double-quoted span stays inside its token even when it contains
/// whitespace. A `"` without a closing partner belongs to no token and acts
/// as a separator.
pub fn tokenize(args: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < args.len() {
        let end = token_end(args, i);
        if end > i {
            tokens.push(Token::new(&args[i..end]));
            i = end;
        } else {
            // Whitespace or an unmatched quote: skip one char
            i += args[i..].chars().next().map_or(1, char::len_utf8);
        }
    }

    tokens
}

/// Byte offset just past the token starting at `start` (== `start` if none).
fn token_end(args: &str, start: usize) -> usize {
    let mut i = start;
    while let Some(c) = args[i..].chars().next() {
        if c == '"' {
            match args[i + 1..].find('"') {
                Some(close) => i += close + 2,
                None => break,
            }
        } else if c.is_whitespace() {
            break;
        } else {
            i += c.len_utf8();
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(args: &str) -> Vec<String> {
        tokenize(args).into_iter().map(|t| t.raw).collect()
    }

    #[test]
    fn tokenize_simple() {
        assert_eq!(raw("a.py b.py"), vec!["a.py", "b.py"]);
    }

    #[test]
    fn tokenize_extra_whitespace() {
        assert_eq!(raw("  a.py \t\n b.py  "), vec!["a.py", "b.py"]);
    }

    #[test]
    fn tokenize_double_quoted() {
        assert_eq!(raw("\"my file.txt\" other"), vec!["\"my file.txt\"", "other"]);
    }

    #[test]
    fn tokenize_quote_inside_word() {
        assert_eq!(raw("dir/\"a b\".txt"), vec!["dir/\"a b\".txt"]);
    }

    #[test]
    fn tokenize_empty_quotes() {
        assert_eq!(raw("\"\" a"), vec!["\"\"", "a"]);
    }

    #[test]
    fn tokenize_unmatched_quote_separates() {
        assert_eq!(raw("a\"b c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn tokenize_single_quotes_not_grouped() {
        assert_eq!(raw("'my file.txt'"), vec!["'my", "file.txt'"]);
    }

    #[test]
    fn tokenize_non_ascii() {
        assert_eq!(raw("résumé.md \"naïve x\""), vec!["résumé.md", "\"naïve x\""]);
    }

    #[test]
    fn tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}
