//! Lexer and parser for the textual selector form

use super::requirement::{Operator, Requirement};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Identifier(String),
    Comma,
    Equals,
    DoubleEquals,
    NotEquals,
    Not,
    GreaterThan,
    LessThan,
    OpenParen,
    CloseParen,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Self::Identifier(s) => format!("identifier {:?}", s),
            Self::Comma => "','".to_string(),
            Self::Equals => "'='".to_string(),
            Self::DoubleEquals => "'=='".to_string(),
            Self::NotEquals => "'!='".to_string(),
            Self::Not => "'!'".to_string(),
            Self::GreaterThan => "'>'".to_string(),
            Self::LessThan => "'<'".to_string(),
            Self::OpenParen => "'('".to_string(),
            Self::CloseParen => "')'".to_string(),
        }
    }
}

fn is_special(c: char) -> bool {
    matches!(c, ',' | '=' | '!' | '(' | ')' | '>' | '<')
}

fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        chars.next();
        let token = match c {
            ',' => Token::Comma,
            '(' => Token::OpenParen,
            ')' => Token::CloseParen,
            '>' => Token::GreaterThan,
            '<' => Token::LessThan,
            '=' if chars.peek() == Some(&'=') => {
                chars.next();
                Token::DoubleEquals
            }
            '=' => Token::Equals,
            '!' if chars.peek() == Some(&'=') => {
                chars.next();
                Token::NotEquals
            }
            '!' => Token::Not,
            _ => {
                let mut ident = String::from(c);
                while let Some(&next) = chars.peek() {
                    if next.is_whitespace() || is_special(next) {
                        break;
                    }
                    ident.push(next);
                    chars.next();
                }
                Token::Identifier(ident)
            }
        };
        tokens.push(token);
    }

    tokens
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn at_boundary(&self) -> bool {
        matches!(self.peek(), None | Some(Token::Comma))
    }

    fn identifier(&mut self, what: &str) -> Result<String, String> {
        match self.next() {
            Some(Token::Identifier(s)) => Ok(s),
            Some(other) => Err(format!("expected {}, found {}", what, other.describe())),
            None => Err(format!("expected {}, found end of input", what)),
        }
    }

    fn requirements(&mut self) -> Result<Vec<Requirement>, String> {
        let mut requirements = Vec::new();

        loop {
            requirements.push(self.requirement()?);
            match self.next() {
                None => return Ok(requirements),
                Some(Token::Comma) if self.peek().is_some() => {}
                Some(Token::Comma) => return Err("trailing ','".to_string()),
                Some(other) => {
                    return Err(format!("expected ',' or end of input, found {}", other.describe()))
                }
            }
        }
    }

    fn requirement(&mut self) -> Result<Requirement, String> {
        if self.peek() == Some(&Token::Not) {
            self.next();
            let key = self.identifier("key")?;
            return Requirement::try_new(key, Operator::DoesNotExist, BTreeSet::new());
        }

        let key = self.identifier("key")?;
        if self.at_boundary() {
            return Requirement::try_new(key, Operator::Exists, BTreeSet::new());
        }

        let operator = self.operator()?;
        let values = match operator {
            Operator::In | Operator::NotIn => self.value_set()?,
            _ => self.exact_value()?,
        };
        Requirement::try_new(key, operator, values)
    }

    fn operator(&mut self) -> Result<Operator, String> {
        match self.next() {
            Some(Token::Equals) | Some(Token::DoubleEquals) => Ok(Operator::Equals),
            Some(Token::NotEquals) => Ok(Operator::NotEquals),
            Some(Token::GreaterThan) => Ok(Operator::GreaterThan),
            Some(Token::LessThan) => Ok(Operator::LessThan),
            Some(Token::Identifier(word)) if word == "in" => Ok(Operator::In),
            Some(Token::Identifier(word)) if word == "notin" => Ok(Operator::NotIn),
            Some(other) => Err(format!("expected operator, found {}", other.describe())),
            None => Err("expected operator, found end of input".to_string()),
        }
    }

    /// `key=` with nothing after it selects the empty value
    fn exact_value(&mut self) -> Result<BTreeSet<String>, String> {
        if self.at_boundary() {
            return Ok(BTreeSet::from([String::new()]));
        }
        let value = self.identifier("value")?;
        Ok(BTreeSet::from([value]))
    }

    fn value_set(&mut self) -> Result<BTreeSet<String>, String> {
        match self.next() {
            Some(Token::OpenParen) => {}
            Some(other) => return Err(format!("expected '(', found {}", other.describe())),
            None => return Err("expected '(', found end of input".to_string()),
        }

        let mut values = BTreeSet::new();
        if self.peek() == Some(&Token::CloseParen) {
            self.next();
            return Ok(values);
        }

        loop {
            match self.peek() {
                Some(Token::Comma) | Some(Token::CloseParen) => {
                    values.insert(String::new());
                }
                _ => {
                    values.insert(self.identifier("value")?);
                }
            }
            match self.next() {
                Some(Token::Comma) => {}
                Some(Token::CloseParen) => return Ok(values),
                Some(other) => {
                    return Err(format!("expected ',' or ')', found {}", other.describe()))
                }
                None => return Err("unterminated value set".to_string()),
            }
        }
    }
}

/// Parse a selector string into requirements
///
/// Blank input yields no requirements.
pub(super) fn parse(input: &str) -> Result<Vec<Requirement>, String> {
    let tokens = tokenize(input);
    if tokens.is_empty() {
        return Ok(Vec::new());
    }
    Parser { tokens, pos: 0 }.requirements()
}
