use crate::lexer::{object_open, skip_space, BytesReader, Cursor};
use crate::token::{t, Operator, Permission, TokenKind};
use crate::{classify, could_be_reserved_keyword, ParseStack};

/// A parse stack reporting a fixed set of shiftable terminals.
struct ShiftSet(&'static [TokenKind]);

impl ParseStack for ShiftSet {
	fn can_shift(&self, kind: TokenKind) -> bool {
		self.0.contains(&kind)
	}
}

/// A parser state in which nothing is shiftable.
const NOTHING: ShiftSet = ShiftSet(&[]);

/// A parser state directly after `PERMISSIONS FOR`.
const PERMISSION_CLAUSE: ShiftSet = ShiftSet(&[
	TokenKind::Permission(Permission::Select),
	TokenKind::Permission(Permission::Create),
	TokenKind::Permission(Permission::Update),
	TokenKind::Permission(Permission::Delete),
]);

/// A parser state expecting a binary or prefix operator.
const OPERATOR_POSITION: ShiftSet = ShiftSet(&[
	TokenKind::Operator(Operator::Not),
	TokenKind::Operator(Operator::In),
]);

fn scan(source: &str) -> Option<crate::token::Token> {
	object_open(&BytesReader::new(source.as_bytes()))
}

#[test_log::test]
fn unknown_words_are_left_to_the_identifier_terminal() {
	for word in ["foo", "Bar", "select_all", "truely", "notin", "inx", ""] {
		assert_eq!(classify(word, &NOTHING), None, "{word:?}");
		assert_eq!(classify(word, &PERMISSION_CLAUSE), None, "{word:?}");
	}
}

#[test_log::test]
fn keywords_match_in_any_case() {
	for word in ["SELECT", "Select", "select", "sElEcT"] {
		assert_eq!(classify(word, &NOTHING), Some(t!("SELECT")), "{word:?}");
	}
	assert_eq!(classify("group", &NOTHING), Some(t!("GROUP")));
	assert_eq!(classify("GROUP", &NOTHING), Some(t!("GROUP")));
	assert_eq!(classify("ContainsAll", &NOTHING), Some(t!("CONTAINSALL")));
}

#[test]
fn every_token_class_is_reachable_from_the_flat_table() {
	assert_eq!(classify("define", &NOTHING), Some(t!("DEFINE")));
	assert_eq!(classify("true", &NOTHING), Some(t!("TRUE")));
	assert_eq!(classify("es256", &NOTHING), Some(t!("ES256")));
	assert_eq!(classify("cosine", &NOTHING), Some(t!("COSINE")));
	assert_eq!(classify("f32", &NOTHING), Some(t!("F32")));
	assert_eq!(classify("rand", &NOTHING), Some(t!("RAND")));
	// Short aliases share a terminal with their long spelling.
	assert_eq!(classify("db", &NOTHING), Some(t!("DATABASE")));
	assert_eq!(classify("ns", &NOTHING), Some(t!("NAMESPACE")));
	assert_eq!(classify("tb", &NOTHING), Some(t!("TABLE")));
}

#[test_log::test]
fn permission_verbs_resolve_by_parser_context() {
	for (word, kind) in [
		("select", Permission::Select),
		("create", Permission::Create),
		("update", Permission::Update),
		("delete", Permission::Delete),
	] {
		assert_eq!(
			classify(word, &PERMISSION_CLAUSE),
			Some(TokenKind::Permission(kind)),
			"{word:?}"
		);
	}
	// At a statement boundary the same spellings are plain keywords.
	assert_eq!(classify("Select", &NOTHING), Some(t!("SELECT")));
	assert_eq!(classify("CREATE", &NOTHING), Some(t!("CREATE")));
	assert_eq!(classify("update", &NOTHING), Some(t!("UPDATE")));
	assert_eq!(classify("delete", &NOTHING), Some(t!("DELETE")));
}

#[test]
fn not_and_in_resolve_to_operators_where_shiftable() {
	assert_eq!(
		classify("NOT", &OPERATOR_POSITION),
		Some(TokenKind::Operator(Operator::Not))
	);
	assert_eq!(
		classify("in", &OPERATOR_POSITION),
		Some(TokenKind::Operator(Operator::In))
	);
	assert_eq!(classify("not", &NOTHING), Some(t!("NOT")));
	assert_eq!(classify("IN", &NOTHING), Some(t!("IN")));
}

#[test]
fn contextual_candidates_shadow_the_flat_table() {
	// Even when the general keyword is also shiftable the contextual
	// candidate is preferred.
	static BOTH: ShiftSet =
		ShiftSet(&[TokenKind::Permission(Permission::Select), t!("SELECT")]);
	assert_eq!(
		classify("select", &BOTH),
		Some(TokenKind::Permission(Permission::Select))
	);
}

#[test]
fn classification_is_pure() {
	for _ in 0..3 {
		assert_eq!(classify("select", &PERMISSION_CLAUSE), classify("select", &PERMISSION_CLAUSE));
		assert_eq!(classify("select", &NOTHING), Some(t!("SELECT")));
		assert_eq!(classify("nonsense", &NOTHING), None);
	}
}

#[test]
fn reserved_keyword_probe() {
	assert!(could_be_reserved_keyword("select"));
	assert!(could_be_reserved_keyword("TIMEOUT"));
	assert!(could_be_reserved_keyword("tempfiles"));
	assert!(!could_be_reserved_keyword("rocket"));
}

#[test]
fn diagnostic_spellings() {
	assert_eq!(t!("SELECT").to_string(), "SELECT");
	assert_eq!(t!("CHANGEFEED").to_string(), "CHANGEFEED");
	assert_eq!(TokenKind::Permission(Permission::Update).to_string(), "UPDATE");
	assert_eq!(TokenKind::Identifier.to_string(), "an identifier");
}

#[test]
fn empty_object_is_tagged() {
	let token = scan("{}").unwrap();
	assert_eq!(token.kind, TokenKind::ObjectOpen);
	assert_eq!(token.span.offset, 0);
	assert_eq!(token.span.len, 1);
	assert!(scan("{ }").is_some());
	assert!(scan("{\t\r\n}").is_some());
}

#[test]
fn double_brace_is_a_block() {
	assert!(scan("{{").is_none());
	assert!(scan("{ {a: 1} }").is_none());
	assert!(scan("{\n\t{\n\t}\n}").is_none());
}

#[test]
fn identifier_key_followed_by_colon_is_tagged() {
	assert!(scan("{key: 1}").is_some());
	assert!(scan("{ key : 1 }").is_some());
	assert!(scan("{_private: true}").is_some());
	assert!(scan("{123: 1}").is_some());
}

#[test]
fn quoted_key_is_tagged() {
	assert!(scan(r#"{ "a b": 1 }"#).is_some());
	assert!(scan(r#"{"esc\"aped": 1}"#).is_some());
}

#[test]
fn missing_colon_declines() {
	assert!(scan("{foo").is_none());
	assert!(scan("{foo}").is_none());
	assert!(scan("{foo bar: 1}").is_none());
	assert!(scan("{foo; bar}").is_none());
}

#[test]
fn comments_are_skipped_before_the_key_scan() {
	assert!(scan("{# comment\nkey: 1}").is_some());
	assert!(scan("{-- note\nkey: 1}").is_some());
	assert!(scan("{// note\r\nkey: 1}").is_some());
	assert!(scan("{key # trailing\n: 1}").is_some());
}

#[test]
fn a_lone_dash_or_slash_is_not_a_comment() {
	assert!(scan("{- key: 1}").is_none());
	assert!(scan("{/ key: 1}").is_none());
}

#[test]
fn ampersand_doubles_as_a_key_quote() {
	// Byte 38 has always been accepted as a quote opener; `'` has not.
	assert!(scan("{&a b&: 1}").is_some());
	assert!(scan("{'a': 1}").is_none());
}

#[test]
fn unterminated_quoted_key_declines() {
	assert!(scan(r#"{"abc"#).is_none());
	assert!(scan("{&abc").is_none());
	assert!(scan(r#"{"abc\""#).is_none());
}

#[test]
fn other_leading_characters_decline() {
	assert!(scan("{:1}").is_none());
	assert!(scan("{(a): 1}").is_none());
	assert!(scan("{[1]: 2}").is_none());
}

#[test]
fn scanner_declines_away_from_a_brace() {
	assert!(scan("a{}").is_none());
	assert!(scan("").is_none());
	assert!(scan("{").is_none());
}

#[test]
fn marker_covers_only_the_brace() {
	let source = "SELECT * FROM { }";
	let mut reader = BytesReader::new(source.as_bytes());
	reader.advance(14);
	assert_eq!(reader.peek(0), Some(b'{'));

	let token = object_open(&reader).unwrap();
	assert_eq!(token.span.offset, 14);
	assert_eq!(token.span.len, 1);

	// The host advances past the marker and keeps tokenizing from there.
	reader.advance(token.span.len as usize);
	assert_eq!(reader.next(), Some(b' '));
}

#[test]
fn skip_space_stops_at_the_next_significant_byte() {
	let source = "  -- comment\nREST";
	let cursor = BytesReader::new(source.as_bytes());
	let off = skip_space(&cursor, 0);
	assert_eq!(source.as_bytes()[off], b'R');

	let source = "//c\r\nX";
	let off = skip_space(&BytesReader::new(source.as_bytes()), 0);
	assert_eq!(source.as_bytes()[off], b'X');

	let source = "#c";
	let off = skip_space(&BytesReader::new(source.as_bytes()), 0);
	assert_eq!(off, source.len());
}

#[test]
fn skip_space_leaves_non_comments_alone() {
	assert_eq!(skip_space(&BytesReader::new(b"- X"), 0), 0);
	assert_eq!(skip_space(&BytesReader::new(b"/ X"), 0), 0);
	assert_eq!(skip_space(&BytesReader::new(b"X"), 0), 0);
	assert_eq!(skip_space(&BytesReader::new(b""), 0), 0);
}

#[test]
fn reader_consumes_to_the_end() {
	let mut reader = BytesReader::new(b"ab");
	assert!(!reader.is_at_end());
	assert_eq!(reader.next(), Some(b'a'));
	assert_eq!(reader.next(), Some(b'b'));
	assert_eq!(reader.next(), None);
	assert!(reader.is_at_end());

	// Advancing clamps to the end of the buffer.
	reader.advance(10);
	assert_eq!(reader.offset(), 2);
}
