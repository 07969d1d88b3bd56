//! Query lexer (C5), grounded in `get_tokens` in
//! `examples/original_source/apsw/fts5query.py`: scans the query string
//! left-to-right over Unicode codepoints, skipping ASCII whitespace,
//! absorbing quoted strings (`""` -> one `"`) and barewords, and demoting a
//! trailing `NEAR` not followed by `(` back to a plain string.

use crate::error::LexError;

use super::token::{Token, TokenKind};

fn single_char_token(c: char) -> Option<TokenKind> {
    Some(match c {
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        ':' => TokenKind::Colon,
        ',' => TokenKind::Comma,
        '+' => TokenKind::Plus,
        '*' => TokenKind::Star,
        '-' => TokenKind::Minus,
        '^' => TokenKind::Caret,
        _ => return None,
    })
}

fn keyword(word: &str) -> Option<TokenKind> {
    Some(match word {
        "OR" => TokenKind::Or,
        "AND" => TokenKind::And,
        "NOT" => TokenKind::Not,
        "NEAR" => TokenKind::Near,
        _ => return None,
    })
}

fn is_bareword_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '\u{1A}' || (c as u32) >= 0x80
}

/// Lexes `query` into a token stream terminated by an explicit `Eof` token.
///
/// # Errors
/// Returns [`LexError`] at the position of the first character that is
/// neither whitespace, single-char punctuation, a quoted string, nor a
/// bareword character.
pub fn tokenize(query: &str) -> Result<Vec<Token>, LexError> {
    let chars: Vec<(usize, char)> = query.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0usize;

    while i < chars.len() {
        let (pos, c) = chars[i];

        if c == ' ' || c == '\t' || c == '\n' || c == '\r' {
            i += 1;
            continue;
        }

        if let Some(kind) = single_char_token(c) {
            tokens.push(Token::new(kind, pos));
            i += 1;
            continue;
        }

        if c == '"' {
            let start = pos + 1;
            let mut value = String::new();
            let mut j = i + 1;
            loop {
                if j >= chars.len() {
                    log::debug!("unterminated quoted string starting at byte {pos}");
                    return Err(LexError { position: pos, character: c });
                }
                let (_, cj) = chars[j];
                if cj == '"' {
                    if j + 1 < chars.len() && chars[j + 1].1 == '"' {
                        value.push('"');
                        j += 2;
                        continue;
                    }
                    j += 1;
                    break;
                }
                value.push(cj);
                j += 1;
            }
            tokens.push(Token::with_value(TokenKind::String, start, value));
            i = j;
            continue;
        }

        if is_bareword_char(c) {
            let start = pos;
            let mut j = i;
            while j < chars.len() && is_bareword_char(chars[j].1) {
                j += 1;
            }
            let lexeme: String = chars[i..j].iter().map(|&(_, ch)| ch).collect();
            let kind = keyword(&lexeme).unwrap_or(TokenKind::String);
            tokens.push(match kind {
                TokenKind::String => Token::with_value(TokenKind::String, start, lexeme),
                other => Token::new(other, start),
            });
            i = j;
            continue;
        }

        log::debug!("unexpected character {c:?} at byte {pos}");
        return Err(LexError { position: pos, character: c });
    }

    let eof_pos = query.len();
    tokens.push(Token::new(TokenKind::Eof, eof_pos));

    // FTS5 promotes STRING "NEAR" to the NEAR token only if followed by
    // "(" — we instead lex NEAR eagerly and demote it back to STRING when
    // not followed by "(".
    for idx in 0..tokens.len().saturating_sub(1) {
        if tokens[idx].kind == TokenKind::Near && tokens[idx + 1].kind != TokenKind::LParen {
            let pos = tokens[idx].position;
            tokens[idx] = Token::with_value(TokenKind::String, pos, "NEAR".to_string());
        }
    }

    Ok(tokens)
}
