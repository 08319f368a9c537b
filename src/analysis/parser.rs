//! Recursive descent extraction of `typedef struct` declarations.
//!
//! Supported shapes:
//!
//! ```text
//! typedef-struct := "typedef" "struct" [tag] "{" { member } "}" name ";"
//! member         := type-spec ["*"] name ["[" decimal "]"] ";"
//! type-spec      := { "const" | "volatile" | "struct" | "union" | "enum" } ident { ident }
//! ```
//!
//! Everything else is skipped with a [`SkipReason`]. A skipped member never
//! discards the rest of its struct, and nothing here returns an error.

use log::debug;

use super::lexer::{Token, TokenKind, tokenize};
use super::types::{Extraction, FieldDescriptor, FieldShape, SkipReason, Skipped, StructDescriptor};

#[cfg(test)]
#[path = "parser_test.rs"]
mod parser_test;

const QUALIFIERS: &[&str] = &["const", "volatile"];
const TAG_KEYWORDS: &[&str] = &["struct", "union", "enum"];

/// Extract every supported struct declaration in source order.
pub fn extract(source: &str) -> Vec<StructDescriptor> {
	extract_with_report(source).structs
}

/// Like [`extract`], but also reports what was skipped and why.
pub fn extract_with_report(source: &str) -> Extraction {
	let tokens = tokenize(source);
	let extraction = Parser::new(&tokens).translation_unit();
	debug!(
		"extracted {} structs, skipped {} declarations",
		extraction.structs.len(),
		extraction.skipped.len()
	);
	extraction
}

/// A decimal array bound. Leading-zero (octal), hex and suffixed literals are
/// not decimal; a decimal bound too large for `usize` is unsupported.
fn decimal_size(text: &str) -> Result<usize, SkipReason> {
	let decimal = text.bytes().all(|b| b.is_ascii_digit()) && (text == "0" || !text.starts_with('0'));
	if !decimal {
		return Err(SkipReason::NonLiteralArraySize(text.to_owned()));
	}
	text.parse().map_err(|_| SkipReason::UnsupportedMember)
}

struct Parser<'t, 'a> {
	tokens: &'t [Token<'a>],
	pos: usize,
	skipped: Vec<Skipped>,
}

impl<'t, 'a> Parser<'t, 'a> {
	fn new(tokens: &'t [Token<'a>]) -> Self {
		Self {
			tokens,
			pos: 0,
			skipped: Vec::new(),
		}
	}

	fn translation_unit(mut self) -> Extraction {
		let mut structs = Vec::new();
		while self.kind() != TokenKind::Eof {
			if self.kind() == TokenKind::Ident("typedef")
				&& self.kind_at(1) == TokenKind::Ident("struct")
			{
				let line = self.line();
				self.pos += 2;
				if let Some(decl) = self.typedef_struct(line) {
					structs.push(decl);
				}
			} else {
				self.pos += 1;
			}
		}
		Extraction {
			structs,
			skipped: self.skipped,
		}
	}

	/// Parses from just after `typedef struct`.
	fn typedef_struct(&mut self, line: usize) -> Option<StructDescriptor> {
		let tag = match (self.kind(), self.kind_at(1)) {
			(TokenKind::Ident(tag), TokenKind::Punct('{')) => {
				self.pos += 1;
				Some(tag.to_owned())
			}
			_ => None,
		};
		if !self.eat(TokenKind::Punct('{')) {
			self.skip(SkipReason::NotTypedefStruct, line);
			return None;
		}

		let Some(fields) = self.body() else {
			self.skip(SkipReason::UnterminatedBody, line);
			return None;
		};

		let TokenKind::Ident(name) = self.kind() else {
			self.skip(SkipReason::MissingTypedefName, line);
			return None;
		};
		if self.kind_at(1) != TokenKind::Punct(';') {
			self.skip(SkipReason::MissingTypedefName, line);
			return None;
		}
		self.pos += 2;

		Some(StructDescriptor {
			name: name.to_owned(),
			tag,
			fields,
		})
	}

	/// Members up to and including the closing brace; `None` at end of input.
	fn body(&mut self) -> Option<Vec<FieldDescriptor>> {
		let mut fields = Vec::new();
		loop {
			match self.kind() {
				TokenKind::Eof => return None,
				TokenKind::Punct('}') => {
					self.pos += 1;
					return Some(fields);
				}
				TokenKind::Punct(';') => self.pos += 1,
				_ => {
					let member_line = self.line();
					match self.member() {
						Ok(field) => fields.push(field),
						Err(reason) => {
							self.skip(reason, member_line);
							self.recover_member();
						}
					}
				}
			}
		}
	}

	fn member(&mut self) -> Result<FieldDescriptor, SkipReason> {
		let mut specifiers = Vec::new();
		while let TokenKind::Ident(word) = self.kind() {
			specifiers.push(word);
			self.pos += 1;
		}

		let mut stars = 0;
		while self.eat(TokenKind::Punct('*')) {
			stars += 1;
		}
		if stars > 1 {
			return Err(SkipReason::UnsupportedMember);
		}

		let name = if stars == 1 {
			while matches!(self.kind(), TokenKind::Ident(w) if QUALIFIERS.contains(&w)) {
				self.pos += 1;
			}
			let TokenKind::Ident(name) = self.kind() else {
				return Err(self.rejection());
			};
			self.pos += 1;
			name
		} else {
			if !matches!(self.kind(), TokenKind::Punct(';' | '[')) {
				return Err(self.rejection());
			}
			specifiers.pop().ok_or(SkipReason::UnsupportedMember)?
		};

		let type_name = specifiers
			.into_iter()
			.filter(|w| !QUALIFIERS.contains(w) && !TAG_KEYWORDS.contains(w))
			.collect::<Vec<_>>()
			.join(" ");
		if type_name.is_empty() {
			return Err(SkipReason::UnsupportedMember);
		}

		let shape = match self.kind() {
			TokenKind::Punct('[') if stars == 0 => {
				self.pos += 1;
				FieldShape::Array(self.array_size()?)
			}
			TokenKind::Punct(';') if stars == 1 => FieldShape::Pointer,
			TokenKind::Punct(';') => FieldShape::Plain,
			_ => return Err(self.rejection()),
		};
		if !self.eat(TokenKind::Punct(';')) {
			return Err(self.rejection());
		}

		Ok(FieldDescriptor::new(type_name, name, shape))
	}

	/// Parses from just after `[` through `]`.
	fn array_size(&mut self) -> Result<usize, SkipReason> {
		let size = match self.kind() {
			TokenKind::Number(text) => decimal_size(text)?,
			TokenKind::Ident(text) => return Err(SkipReason::NonLiteralArraySize(text.to_owned())),
			_ => return Err(SkipReason::UnsupportedMember),
		};
		self.pos += 1;
		if !self.eat(TokenKind::Punct(']')) {
			return Err(SkipReason::UnsupportedMember);
		}
		Ok(size)
	}

	fn rejection(&self) -> SkipReason {
		match self.kind() {
			TokenKind::Punct('{') => SkipReason::NestedBody,
			_ => SkipReason::UnsupportedMember,
		}
	}

	/// Skip to just past the next `;` at the current brace depth, stopping
	/// before a `}` that would close the enclosing body.
	fn recover_member(&mut self) {
		let mut depth = 0usize;
		loop {
			match self.kind() {
				TokenKind::Eof => return,
				TokenKind::Punct('{') => depth += 1,
				TokenKind::Punct('}') if depth == 0 => return,
				TokenKind::Punct('}') => depth -= 1,
				TokenKind::Punct(';') if depth == 0 => {
					self.pos += 1;
					return;
				}
				_ => {}
			}
			self.pos += 1;
		}
	}

	fn skip(&mut self, reason: SkipReason, line: usize) {
		debug!("line {line}: skipped ({reason})");
		self.skipped.push(Skipped { reason, line });
	}

	fn eat(&mut self, kind: TokenKind<'a>) -> bool {
		if self.kind() == kind {
			self.pos += 1;
			true
		} else {
			false
		}
	}

	fn kind(&self) -> TokenKind<'a> {
		self.kind_at(0)
	}

	fn kind_at(&self, offset: usize) -> TokenKind<'a> {
		self.tokens
			.get(self.pos + offset)
			.map_or(TokenKind::Eof, |t| t.kind)
	}

	fn line(&self) -> usize {
		self.tokens
			.get(self.pos)
			.or_else(|| self.tokens.last())
			.map_or(1, |t| t.line)
	}
}
