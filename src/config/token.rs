pub use logos::Logos;

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token<'i> {
    #[regex(r"#[^\n]*")]
    Comment,

    #[token("\n")]
    Newline,

    #[token(";")]
    Semicolon,

    #[token("=")]
    Eq,

    #[regex(r#""[^"\n]*""#, |lex| lex.slice().trim_matches('"'))]
    #[regex(r#"'[^'\n]*'"#, |lex| lex.slice().trim_matches('\''))]
    String(&'i str),

    #[regex("[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident(&'i str),
}

impl Token<'_> {
    /// Whether the token ends a `key = value` statement
    pub fn is_separator(&self) -> bool {
        matches!(self, Token::Newline | Token::Semicolon)
    }
}

/// Line and column, both starting at 1, of byte `offset` in `inp`
pub fn line_col(inp: &str, offset: usize) -> (usize, usize) {
    let before = &inp[..offset.min(inp.len())];
    let line = before.matches('\n').count() + 1;
    let col = before.rfind('\n').map_or(before.len(), |nl| before.len() - nl - 1) + 1;
    (line, col)
}

pub fn get_line(inp: &str, line: usize) -> &str {
    inp.lines().nth(line.saturating_sub(1)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{line_col, Logos, Token};

    #[test]
    fn tokenize() {
        use Token::*;

        let inp = "# commands\ninstall_command = \"pnpm install\"; dev_command='pnpm dev'\n";

        let tokens = Token::lexer(inp)
            .map(std::result::Result::unwrap)
            .collect::<Vec<_>>();

        assert_eq!(
            tokens.as_slice(),
            &[
                Comment,
                Newline,
                Ident("install_command"),
                Eq,
                String("pnpm install"),
                Semicolon,
                Ident("dev_command"),
                Eq,
                String("pnpm dev"),
                Newline,
            ]
        );
    }

    #[test]
    fn locations() {
        let inp = "a = \"b\"\n  c";
        assert_eq!(line_col(inp, 0), (1, 1));
        assert_eq!(line_col(inp, 4), (1, 5));
        assert_eq!(line_col(inp, 10), (2, 3));
    }
}
