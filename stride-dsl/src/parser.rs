use crate::{
    Node, ParseError,
    token::{Token, TokenKind, lex},
};

/// Parses `source` into a single expression.
///
/// The grammar is plain S-expressions: an expression is an identifier or a
/// parenthesized sequence of expressions. Parsing threads an explicit token
/// cursor; each step returns the parsed node together with the position of
/// the next unconsumed token, so delimiter handling needs no non-local
/// control flow.
///
/// # Errors
///
/// Returns a [`ParseError`] for empty input, an unmatched parenthesis, or
/// trailing tokens after the first complete expression. Errors carry the
/// 0-based source index of the offending token.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    let tokens = lex(source);
    let (node, next) = parse_at(&tokens, 0)?;
    match tokens.get(next) {
        None => Ok(node),
        Some(token) if token.kind == TokenKind::RightParen => {
            Err(ParseError::UnmatchedRightParen { index: token.index })
        }
        Some(token) => Err(ParseError::TrailingInput { index: token.index }),
    }
}

/// Parses one expression starting at `pos`, returning it and the position of
/// the next unconsumed token.
fn parse_at(tokens: &[Token<'_>], pos: usize) -> Result<(Node, usize), ParseError> {
    let Some(token) = tokens.get(pos) else {
        return Err(ParseError::UnexpectedEnd);
    };

    match token.kind {
        TokenKind::Ident => Ok((
            Node::Leaf {
                text: token.text.to_string(),
                index: token.index,
            },
            pos + 1,
        )),
        TokenKind::RightParen => Err(ParseError::UnmatchedRightParen { index: token.index }),
        TokenKind::LeftParen => {
            let open_index = token.index;
            let mut items = Vec::new();
            let mut cursor = pos + 1;
            loop {
                match tokens.get(cursor) {
                    None => return Err(ParseError::UnmatchedLeftParen { index: open_index }),
                    Some(token) if token.kind == TokenKind::RightParen => {
                        return Ok((
                            Node::List {
                                items,
                                index: open_index,
                            },
                            cursor + 1,
                        ));
                    }
                    Some(_) => {
                        let (item, next) = parse_at(tokens, cursor)?;
                        items.push(item);
                        cursor = next;
                    }
                }
            }
        }
    }
}
