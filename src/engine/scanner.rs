//! Character scanner.
//!
//! Turns the input into a flat list of [`Token`]s in a single pass with one
//! character of lookahead. Letters and digits are grouped into runs, `-` and
//! `/` become separators, and every other character (whitespace, commas,
//! periods, anything non-ASCII) is skipped between tokens.
//!
//! ```text
//! "Feb 25th, 1759/60"
//!   -> month(Feb) day(25) year(1759) separator(/) noise(60) eof
//! ```
//!
//! The scanner assumes ASCII input; callers wanting accented text recognized
//! must fold it to ASCII first.

use super::lexicon;
use super::token::{Token, TokenKind};

const MIN_YEAR: u64 = 200;
const MAX_YEAR: u64 = 2200;

pub(crate) struct Scanner<'a> {
    input: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Scanner { input, pos: 0 }
    }

    fn read(&mut self) -> Option<char> {
        let ch = self.input[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn unread(&mut self, ch: char) {
        self.pos -= ch.len_utf8();
    }

    /// Next token, or [`TokenKind::Eof`] once the input is exhausted.
    pub(crate) fn scan(&mut self) -> Token<'a> {
        loop {
            let Some(ch) = self.read() else {
                return Token::eof();
            };

            if is_letter(ch) {
                self.unread(ch);
                let token = self.scan_word();
                if token.kind != TokenKind::Ordinal {
                    return token;
                }
            } else if is_digit(ch) {
                self.unread(ch);
                return self.scan_number();
            } else if is_separator(ch) {
                let start = self.pos - ch.len_utf8();
                return Token::new(TokenKind::Separator, &self.input[start..self.pos]);
            }
        }
    }

    fn scan_while(&mut self, accept: fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(ch) = self.read() {
            if !accept(ch) {
                self.unread(ch);
                break;
            }
        }
        &self.input[start..self.pos]
    }

    fn scan_word(&mut self) -> Token<'a> {
        let lexeme = self.scan_while(is_letter);
        Token::new(classify_word(lexeme), lexeme)
    }

    fn scan_number(&mut self) -> Token<'a> {
        let lexeme = self.scan_while(is_digit);
        // Runs too long for u64 are noise, same as any other out-of-range value.
        Token::new(classify_number(lexeme.parse().unwrap_or(0)), lexeme)
    }
}

/// Scan `input` completely. The returned list always ends with an `Eof` token.
pub(crate) fn scan_all(input: &str) -> Vec<Token<'_>> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan();
        tokens.push(token);
        if token.kind == TokenKind::Eof {
            return tokens;
        }
    }
}

fn classify_word(lexeme: &str) -> TokenKind {
    let upper = lexeme.to_ascii_uppercase();
    if let Some(kind) = lexicon::keyword(&upper) {
        return kind;
    }
    if lexicon::month_number(&upper) > 0 {
        return TokenKind::MonthAlpha;
    }
    TokenKind::Noise
}

fn classify_number(n: u64) -> TokenKind {
    match n {
        1..=12 => TokenKind::MonthDay,
        13..=31 => TokenKind::Day,
        MIN_YEAR..=MAX_YEAR => TokenKind::Year,
        _ => TokenKind::Noise,
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

fn is_separator(ch: char) -> bool {
    ch == '-' || ch == '/'
}
