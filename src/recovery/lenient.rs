//! JSON5-flavoured decoder used by the recovery pipeline.
//!
//! Accepts everything strict JSON accepts, plus trailing commas, unquoted
//! object keys, single-quoted strings, `//` and `/* */` comments, hexadecimal
//! integers, a leading `+` and a bare leading or trailing decimal point.
//!
//! String escapes stay strict: only the JSON escapes (and `\'`) are accepted
//! and raw control characters inside strings are rejected. Numbers are handed
//! to `serde_json` in normalized form, so a strictly valid document decodes to
//! exactly the value `serde_json::from_str` would produce.

use serde_json::{Map, Number, Value};
use thiserror::Error;

const MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line} column {column}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// Decodes a single top-level value. Anything but whitespace or comments
/// after that value is an error.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let mut parser = Parser::new(text);
    parser.skip_insignificant()?;
    let value = parser.parse_value()?;
    parser.skip_insignificant()?;

    if parser.peek().is_some() {
        return Err(parser.error("trailing characters after top-level value"));
    }

    Ok(value)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0, depth: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        let consumed = &self.src[..self.pos];
        let line = consumed.matches('\n').count() + 1;
        let column = consumed
            .rsplit('\n')
            .next()
            .map_or(0, |tail| tail.chars().count())
            + 1;

        ParseError {
            message: message.into(),
            line,
            column,
        }
    }

    fn skip_insignificant(&mut self) -> Result<(), ParseError> {
        loop {
            match self.peek() {
                Some(c) if is_whitespace(c) => {
                    self.bump();
                }
                Some('/') => {
                    let rest = self.rest();
                    if rest.starts_with("//") {
                        match rest.find('\n') {
                            Some(end) => self.pos += end + 1,
                            None => self.pos = self.src.len(),
                        }
                    } else if rest.starts_with("/*") {
                        match rest[2..].find("*/") {
                            Some(end) => self.pos += end + 4,
                            None => return Err(self.error("unterminated block comment")),
                        }
                    } else {
                        return Ok(());
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some(quote @ ('"' | '\'')) => self.parse_string(quote).map(Value::String),
            Some('t') => self.parse_keyword("true", Value::Bool(true)),
            Some('f') => self.parse_keyword("false", Value::Bool(false)),
            Some('n') => self.parse_keyword("null", Value::Null),
            Some(c) if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() => {
                self.parse_number()
            }
            Some(c) => Err(self.error(format!("unexpected character '{}'", c.escape_debug()))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        Ok(())
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.bump();

        let mut map = Map::new();
        loop {
            self.skip_insignificant()?;
            if self.eat('}') {
                break;
            }

            let key = self.parse_key()?;
            self.skip_insignificant()?;
            if !self.eat(':') {
                return Err(self.error("expected ':' after object key"));
            }
            self.skip_insignificant()?;
            let value = self.parse_value()?;
            map.insert(key, value);

            self.skip_insignificant()?;
            if self.eat(',') {
                continue;
            }
            if self.eat('}') {
                break;
            }
            return Err(self.error("expected ',' or '}' in object"));
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.bump();

        let mut items = Vec::new();
        loop {
            self.skip_insignificant()?;
            if self.eat(']') {
                break;
            }

            items.push(self.parse_value()?);

            self.skip_insignificant()?;
            if self.eat(',') {
                continue;
            }
            if self.eat(']') {
                break;
            }
            return Err(self.error("expected ',' or ']' in array"));
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }

    fn parse_key(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => self.parse_string(quote),
            Some(c) if is_identifier_start(c) => {
                let start = self.pos;
                while self.peek().is_some_and(is_identifier_continue) {
                    self.bump();
                }
                Ok(self.src[start..self.pos].to_string())
            }
            _ => Err(self.error("expected object key")),
        }
    }

    fn parse_keyword(&mut self, word: &str, value: Value) -> Result<Value, ParseError> {
        let terminated = self
            .rest()
            .strip_prefix(word)
            .is_some_and(|tail| !tail.chars().next().is_some_and(is_identifier_continue));

        if terminated {
            self.pos += word.len();
            Ok(value)
        } else {
            Err(self.error("invalid literal"))
        }
    }

    fn parse_string(&mut self, quote: char) -> Result<String, ParseError> {
        self.bump();

        let mut out = String::new();
        loop {
            let Some(c) = self.bump() else {
                return Err(self.error("unterminated string"));
            };

            match c {
                c if c == quote => return Ok(out),
                '\\' => self.parse_escape(&mut out)?,
                c if (c as u32) < 0x20 => {
                    self.pos -= c.len_utf8();
                    return Err(self.error(format!(
                        "control character '{}' in string",
                        c.escape_debug()
                    )));
                }
                c => out.push(c),
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<(), ParseError> {
        let Some(c) = self.bump() else {
            return Err(self.error("unterminated escape sequence"));
        };

        match c {
            '"' | '\'' | '\\' | '/' => out.push(c),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'u' => out.push(self.parse_unicode_escape()?),
            other => {
                return Err(self.error(format!(
                    "invalid escape sequence '\\{}'",
                    other.escape_debug()
                )))
            }
        }
        Ok(())
    }

    fn parse_hex4(&mut self) -> Result<u16, ParseError> {
        let digits = self
            .rest()
            .get(..4)
            .filter(|digits| digits.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| self.error("invalid unicode escape"))?;
        let unit =
            u16::from_str_radix(digits, 16).map_err(|_| self.error("invalid unicode escape"))?;
        self.pos += 4;
        Ok(unit)
    }

    fn parse_unicode_escape(&mut self) -> Result<char, ParseError> {
        let first = self.parse_hex4()?;

        let code = match first {
            0xD800..=0xDBFF => {
                if !self.rest().starts_with("\\u") {
                    return Err(self.error("lone leading surrogate in unicode escape"));
                }
                self.pos += 2;
                let second = self.parse_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&second) {
                    return Err(self.error("invalid trailing surrogate in unicode escape"));
                }
                0x10000 + ((u32::from(first) - 0xD800) << 10) + (u32::from(second) - 0xDC00)
            }
            0xDC00..=0xDFFF => {
                return Err(self.error("lone trailing surrogate in unicode escape"));
            }
            _ => u32::from(first),
        };

        char::from_u32(code).ok_or_else(|| self.error("invalid unicode escape"))
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        let negative = match self.peek() {
            Some('-') => {
                self.bump();
                true
            }
            Some('+') => {
                self.bump();
                false
            }
            _ => false,
        };

        if self.rest().starts_with("0x") || self.rest().starts_with("0X") {
            self.pos += 2;
            return self.parse_hex_integer(negative);
        }

        let int_start = self.pos;
        self.consume_digits();
        let int_digits = &self.src[int_start..self.pos];

        let has_point = self.eat('.');
        let frac_start = self.pos;
        if has_point {
            self.consume_digits();
        }
        let frac_digits = &self.src[frac_start..self.pos];

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(self.error("invalid number"));
        }

        let exp_start = self.pos;
        if matches!(self.peek(), Some('e' | 'E')) {
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            let digits_start = self.pos;
            self.consume_digits();
            if self.pos == digits_start {
                return Err(self.error("invalid number exponent"));
            }
        }
        let exponent = &self.src[exp_start..self.pos];

        let mut normalized = String::with_capacity(self.pos - start + 2);
        if negative {
            normalized.push('-');
        }
        normalized.push_str(if int_digits.is_empty() { "0" } else { int_digits });
        if has_point {
            normalized.push('.');
            normalized.push_str(if frac_digits.is_empty() { "0" } else { frac_digits });
        }
        normalized.push_str(exponent);

        let number: Number = serde_json::from_str(&normalized).map_err(|_| {
            self.error(format!("invalid number '{}'", &self.src[start..self.pos]))
        })?;
        Ok(Value::Number(number))
    }

    fn parse_hex_integer(&mut self, negative: bool) -> Result<Value, ParseError> {
        let digits_start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
            self.bump();
        }

        let magnitude = u64::from_str_radix(&self.src[digits_start..self.pos], 16)
            .map_err(|_| self.error("invalid hexadecimal number"))?;

        if !negative {
            return Ok(Value::from(magnitude));
        }
        i64::try_from(magnitude)
            .map(|m| Value::from(-m))
            .map_err(|_| self.error("hexadecimal number out of range"))
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t' | '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{A0}' | '\u{FEFF}' | '\u{2028}' | '\u{2029}'
    )
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
