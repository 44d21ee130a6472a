use logos::Logos;

/// Lexical classes of the stepper configuration language.
///
/// The language has exactly three: the two parenthesis delimiters and
/// identifier runs, which cover type names and numeric literals alike.
/// Whitespace separates tokens and is skipped.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[regex(r"[^()\s]+")]
    Ident,
}

/// A token together with its source text and the 0-based character index of
/// its first character, which parse errors report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub index: usize,
}

/// Tokenizes `source`.
///
/// Lexing is total: every non-whitespace character belongs to a parenthesis
/// or an identifier run, so there is no error case. The same text always
/// produces the same token stream, indices included.
#[must_use]
pub fn lex(source: &str) -> Vec<Token<'_>> {
    TokenKind::lexer(source)
        .spanned()
        .filter_map(|(kind, span)| {
            kind.ok().map(|kind| Token {
                kind,
                text: &source[span.clone()],
                index: span.start,
            })
        })
        .collect()
}
