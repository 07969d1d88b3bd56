//! Query parser (C6): recursive-descent with a small infix precedence
//! table, grounded directly in the `Parser` class of
//! `examples/original_source/apsw/fts5query.py`.

use crate::error::ParseError;

use super::ast::{ColumnFilterKind, Phrase, Phrases, Query, DEFAULT_NEAR_DISTANCE};
use super::lexer::tokenize;
use super::token::{Token, TokenKind};

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

fn infix_precedence(kind: TokenKind) -> Option<i32> {
    match kind {
        TokenKind::Or => Some(10),
        TokenKind::And => Some(20),
        TokenKind::Not => Some(30),
        _ => None,
    }
}

impl Parser {
    fn lookahead(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek2(&self) -> Option<&Token> {
        self.tokens.get(self.pos + 1)
    }

    fn take(&mut self) -> Token {
        let t = self.tokens[self.pos].clone();
        self.pos += 1;
        t
    }

    fn error(&self, message: impl Into<String>, token: &Token) -> ParseError {
        let message = message.into();
        log::debug!("parse error at byte {}: {message}", token.position);
        ParseError { position: token.position, message }
    }

    fn parse_query(&mut self, rbp: i32) -> Result<Query, ParseError> {
        let mut left = self.parse_part()?;

        while let Some(prec) = infix_precedence(self.lookahead().kind) {
            if rbp >= prec {
                break;
            }
            let op = self.take();
            let right = self.parse_query(prec)?;
            left = self.infix(op.kind, left, right);
        }

        Ok(left)
    }

    fn infix(&self, op: TokenKind, left: Query, right: Query) -> Query {
        if op == TokenKind::Not {
            return Query::Not { r#match: Box::new(left), no_match: Box::new(right) };
        }
        match (op, left) {
            (TokenKind::And, Query::And(mut children)) => {
                children.push(right);
                Query::And(children)
            }
            (TokenKind::Or, Query::Or(mut children)) => {
                children.push(right);
                Query::Or(children)
            }
            (TokenKind::And, left) => Query::And(vec![left, right]),
            (TokenKind::Or, left) => Query::Or(vec![left, right]),
            _ => unreachable!("infix_precedence only yields Or/And/Not"),
        }
    }

    fn parse_part(&mut self) -> Result<Query, ParseError> {
        let look = self.lookahead().kind;

        let is_colspec_start = matches!(look, TokenKind::Minus | TokenKind::LBrace)
            || (look == TokenKind::String
                && self.peek2().map(|t| t.kind) == Some(TokenKind::Colon));
        if is_colspec_start {
            return self.parse_colspec();
        }

        if look == TokenKind::LParen {
            let open = self.take();
            let query = self.parse_query(0)?;
            if self.lookahead().kind != TokenKind::RParen {
                if self.lookahead().kind == TokenKind::Eof {
                    return Err(self.error("unclosed (", &open));
                }
                let tok = self.lookahead().clone();
                return Err(self.error(format!("expected ) to close ( at position {}", open.position), &tok));
            }
            self.take();
            return Ok(query);
        }

        if look == TokenKind::Near {
            let mut nears = Vec::new();
            while self.lookahead().kind == TokenKind::Near {
                nears.push(self.parse_near()?);
            }
            return Ok(if nears.len() == 1 { nears.into_iter().next().unwrap() } else { Query::And(nears) });
        }

        Ok(Query::Phrases(self.parse_phrases()?))
    }

    fn parse_phrase(&mut self, first: bool) -> Result<Phrase, ParseError> {
        let mut initial = false;
        let mut sequence = false;

        if self.lookahead().kind == TokenKind::Caret {
            initial = true;
            self.take();
        }
        if !first && !initial && self.lookahead().kind == TokenKind::Plus {
            sequence = true;
            self.take();
        }

        let token = self.take();
        if token.kind != TokenKind::String {
            return Err(self.error("expected a search term", &token));
        }
        let mut phrase = Phrase::new(token.value.unwrap_or_default());
        phrase.initial = initial;
        phrase.sequence = sequence;

        if self.lookahead().kind == TokenKind::Star {
            self.take();
            phrase.prefix = true;
        }

        Ok(phrase)
    }

    fn parse_phrases(&mut self) -> Result<Phrases, ParseError> {
        let mut phrases = vec![self.parse_phrase(true)?];
        while matches!(self.lookahead().kind, TokenKind::Plus | TokenKind::String | TokenKind::Caret) {
            phrases.push(self.parse_phrase(false)?);
        }
        Ok(Phrases { phrases })
    }

    fn parse_near(&mut self) -> Result<Query, ParseError> {
        self.take(); // NEAR

        let open = self.take();
        if open.kind != TokenKind::LParen {
            return Err(self.error("expected '('", &open));
        }

        let phrases = self.parse_phrases()?;
        if phrases.phrases.len() < 2 {
            let tok = self.lookahead().clone();
            return Err(self.error("at least two phrases must be present for NEAR", &tok));
        }

        let mut distance = DEFAULT_NEAR_DISTANCE;
        if self.lookahead().kind == TokenKind::Comma {
            self.take();
            let number = self.take();
            let is_digits = matches!(&number.value, Some(v) if !v.is_empty() && v.chars().all(|c| c.is_ascii_digit()));
            if number.kind != TokenKind::String || !is_digits {
                return Err(self.error("expected number", &number));
            }
            distance = number.value.unwrap().parse().unwrap_or(DEFAULT_NEAR_DISTANCE);
        }

        if self.lookahead().kind != TokenKind::RParen {
            let tok = self.lookahead().clone();
            return Err(self.error("expected ')'", &tok));
        }
        self.take();

        Ok(Query::Near { phrases, distance })
    }

    fn parse_colspec(&mut self) -> Result<Query, ParseError> {
        let mut filter = ColumnFilterKind::Include;
        let mut columns = Vec::new();

        if self.lookahead().kind == TokenKind::Minus {
            filter = ColumnFilterKind::Exclude;
            self.take();
        }

        if self.lookahead().kind == TokenKind::LBrace {
            self.take();
            while self.lookahead().kind == TokenKind::String {
                columns.push(self.take().value.unwrap_or_default());
            }
            if columns.is_empty() {
                let tok = self.lookahead().clone();
                return Err(self.error("expected column name", &tok));
            }
            if self.lookahead().kind != TokenKind::RBrace {
                let tok = self.lookahead().clone();
                return Err(self.error("expected '}'", &tok));
            }
            self.take();
        } else {
            if self.lookahead().kind != TokenKind::String {
                let tok = self.lookahead().clone();
                return Err(self.error("expected column name", &tok));
            }
            columns.push(self.take().value.unwrap_or_default());
        }

        if self.lookahead().kind != TokenKind::Colon {
            let tok = self.lookahead().clone();
            return Err(self.error("expected ':'", &tok));
        }
        self.take();

        let query = match self.lookahead().kind {
            TokenKind::LParen => self.parse_query(0)?,
            TokenKind::Near => self.parse_part()?,
            _ => Query::Phrases(self.parse_phrases()?),
        };

        Ok(Query::ColumnFilter { columns, filter, query: Box::new(query) })
    }
}

/// Parses `query` into a [`Query`] AST, requiring the entire input to be
/// consumed (`spec` §4.6: "Entry point parses a query and then requires
/// EOF"). Never partially commits: on error, no partial AST is returned.
pub fn parse(query: &str) -> Result<Query, ParseError> {
    let tokens = tokenize(query).map_err(|e| ParseError { position: e.position, message: format!("unexpected character {:?}", e.character) })?;
    let mut parser = Parser { tokens, pos: 0 };
    let result = parser.parse_query(0)?;
    if parser.lookahead().kind != TokenKind::Eof {
        let tok = parser.lookahead().clone();
        return Err(parser.error("unexpected trailing input", &tok));
    }
    Ok(result)
}

#[cfg(test)]
mod tests;
