use super::*;

fn kinds(input: &str) -> Vec<TokenKind<'_>> {
	tokenize(input).into_iter().map(|t| t.kind).collect()
}

#[test]
fn empty_input_is_just_eof() {
	assert_eq!(kinds(""), vec![TokenKind::Eof]);
	assert_eq!(kinds("  \n\t "), vec![TokenKind::Eof]);
}

#[test]
fn member_declaration_tokens() {
	assert_eq!(
		kinds("char name[20];"),
		vec![
			TokenKind::Ident("char"),
			TokenKind::Ident("name"),
			TokenKind::Punct('['),
			TokenKind::Number("20"),
			TokenKind::Punct(']'),
			TokenKind::Punct(';'),
			TokenKind::Eof,
		]
	);
}

#[test]
fn pointer_star_is_its_own_token() {
	assert_eq!(
		kinds("float*ptr;"),
		vec![
			TokenKind::Ident("float"),
			TokenKind::Punct('*'),
			TokenKind::Ident("ptr"),
			TokenKind::Punct(';'),
			TokenKind::Eof,
		]
	);
}

#[test]
fn numbers_keep_suffixes_and_hex_digits() {
	assert_eq!(
		kinds("0x10 4u"),
		vec![TokenKind::Number("0x10"), TokenKind::Number("4u"), TokenKind::Eof]
	);
}

#[test]
fn comments_are_skipped() {
	assert_eq!(
		kinds("int /* inline */ x; // trailing\n/* multi\nline */ y"),
		vec![
			TokenKind::Ident("int"),
			TokenKind::Ident("x"),
			TokenKind::Punct(';'),
			TokenKind::Ident("y"),
			TokenKind::Eof,
		]
	);
}

#[test]
fn unterminated_block_comment_runs_to_end() {
	assert_eq!(kinds("a /* never closed"), vec![TokenKind::Ident("a"), TokenKind::Eof]);
}

#[test]
fn preprocessor_lines_are_skipped() {
	let input = "#include <stdio.h>\n  #define SIZE \\\n    10\nint x;";
	assert_eq!(
		kinds(input),
		vec![
			TokenKind::Ident("int"),
			TokenKind::Ident("x"),
			TokenKind::Punct(';'),
			TokenKind::Eof,
		]
	);
}

#[test]
fn hash_mid_line_is_punctuation() {
	assert_eq!(
		kinds("a # b"),
		vec![
			TokenKind::Ident("a"),
			TokenKind::Punct('#'),
			TokenKind::Ident("b"),
			TokenKind::Eof,
		]
	);
}

#[test]
fn line_numbers_track_newlines_comments_and_continuations() {
	let tokens = tokenize("a\n/* x\n */ b\n#define X \\\n 1\nc");
	let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
	assert_eq!(lines, vec![1, 3, 6, 6]);
}

#[test]
fn non_ascii_is_single_punct() {
	assert_eq!(
		kinds("é;"),
		vec![TokenKind::Punct('é'), TokenKind::Punct(';'), TokenKind::Eof]
	);
}
