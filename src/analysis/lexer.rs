//! Tokenizer for the subset of C that struct extraction understands.
//!
//! Comments and preprocessor lines are dropped here, so the parser only ever
//! sees identifiers, numbers and single-character punctuation.

#[cfg(test)]
#[path = "lexer_test.rs"]
mod lexer_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind<'a> {
	Ident(&'a str),
	/// A digit followed by any identifier characters, so `0x10` and `4u` stay one token.
	Number(&'a str),
	Punct(char),
	Eof,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
	pub kind: TokenKind<'a>,
	/// 1-based source line the token starts on.
	pub line: usize,
}

pub struct Lexer<'a> {
	input: &'a str,
	bytes: &'a [u8],
	idx: usize,
	line: usize,
	at_line_start: bool,
}

impl<'a> Lexer<'a> {
	pub fn new(input: &'a str) -> Self {
		Self {
			input,
			bytes: input.as_bytes(),
			idx: 0,
			line: 1,
			at_line_start: true,
		}
	}

	/// Consume the input; the returned vector always ends with [`TokenKind::Eof`].
	pub fn tokenize(mut self) -> Vec<Token<'a>> {
		let mut out = Vec::new();
		loop {
			let token = self.next_token();
			let is_eof = token.kind == TokenKind::Eof;
			out.push(token);
			if is_eof {
				break;
			}
		}
		out
	}

	fn next_token(&mut self) -> Token<'a> {
		self.skip_trivia();
		let line = self.line;
		let Some(b) = self.peek(0) else {
			return Token {
				kind: TokenKind::Eof,
				line,
			};
		};
		self.at_line_start = false;

		if b.is_ascii_digit() {
			let text = self.take_word();
			return Token {
				kind: TokenKind::Number(text),
				line,
			};
		}
		if is_ident_start(b) {
			let text = self.take_word();
			return Token {
				kind: TokenKind::Ident(text),
				line,
			};
		}

		let ch = self.input[self.idx..].chars().next().unwrap_or('\0');
		self.idx += ch.len_utf8();
		Token {
			kind: TokenKind::Punct(ch),
			line,
		}
	}

	fn take_word(&mut self) -> &'a str {
		let start = self.idx;
		while self.peek(0).is_some_and(is_ident_continue) {
			self.idx += 1;
		}
		&self.input[start..self.idx]
	}

	fn skip_trivia(&mut self) {
		loop {
			match (self.peek(0), self.peek(1)) {
				(Some(b'\n'), _) => {
					self.idx += 1;
					self.line += 1;
					self.at_line_start = true;
				}
				(Some(b), _) if b.is_ascii_whitespace() => self.idx += 1,
				(Some(b'/'), Some(b'/')) => self.skip_to_line_end(),
				(Some(b'/'), Some(b'*')) => self.skip_block_comment(),
				(Some(b'#'), _) if self.at_line_start => self.skip_directive(),
				_ => break,
			}
		}
	}

	fn skip_to_line_end(&mut self) {
		while self.peek(0).is_some_and(|b| b != b'\n') {
			self.idx += 1;
		}
	}

	fn skip_block_comment(&mut self) {
		self.idx += 2;
		while let Some(b) = self.peek(0) {
			if b == b'*' && self.peek(1) == Some(b'/') {
				self.idx += 2;
				return;
			}
			if b == b'\n' {
				self.line += 1;
			}
			self.idx += 1;
		}
	}

	// Backslash-newline continues a directive onto the next line.
	fn skip_directive(&mut self) {
		while let Some(b) = self.peek(0) {
			match (b, self.peek(1), self.peek(2)) {
				(b'\n', _, _) => return,
				(b'\\', Some(b'\n'), _) => {
					self.idx += 2;
					self.line += 1;
				}
				(b'\\', Some(b'\r'), Some(b'\n')) => {
					self.idx += 3;
					self.line += 1;
				}
				_ => self.idx += 1,
			}
		}
	}

	fn peek(&self, n: usize) -> Option<u8> {
		self.bytes.get(self.idx + n).copied()
	}
}

fn is_ident_start(b: u8) -> bool {
	b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
	b.is_ascii_alphanumeric() || b == b'_'
}

pub fn tokenize(input: &str) -> Vec<Token<'_>> {
	Lexer::new(input).tokenize()
}
