//! Terminal symbols of the SurrealQL grammar as produced by the tokenizer
//! front-end.

use std::fmt;

mod mac;
pub(crate) use mac::t;

/// Generates the keyword enum together with its canonical spelling.
macro_rules! keyword {
	($($(#[$m:meta])* $name:ident => $spelling:literal),* $(,)?) => {
		/// A keyword terminal.
		///
		/// Keywords are matched case-insensitively; the spelling stored here
		/// is the canonical upper-case form used in diagnostics.
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
		pub enum Keyword {
			$($(#[$m])* $name,)*
		}

		impl Keyword {
			pub fn as_str(&self) -> &'static str {
				match self {
					$(Keyword::$name => $spelling,)*
				}
			}
		}
	};
}

keyword! {
	Alter => "ALTER",
	Analyzer => "ANALYZER",
	Any => "ANY",
	As => "AS",
	Asc => "ASC",
	Assert => "ASSERT",
	At => "AT",
	Begin => "BEGIN",
	Bm25 => "BM25",
	Break => "BREAK",
	By => "BY",
	Cancel => "CANCEL",
	Capacity => "CAPACITY",
	ChangeFeed => "CHANGEFEED",
	Changes => "CHANGES",
	Columns => "COLUMNS",
	Comment => "COMMENT",
	Commit => "COMMIT",
	Content => "CONTENT",
	Continue => "CONTINUE",
	Create => "CREATE",
	Database => "DATABASE",
	Default => "DEFAULT",
	Define => "DEFINE",
	Delete => "DELETE",
	Desc => "DESC",
	Dimension => "DIMENSION",
	Dist => "DIST",
	DocIdsCache => "DOC_IDS_CACHE",
	DocIdsOrder => "DOC_IDS_ORDER",
	DocLengthsCache => "DOC_LENGTHS_CACHE",
	DocLengthsOrder => "DOC_LENGTHS_ORDER",
	Drop => "DROP",
	Duplicate => "DUPLICATE",
	Efc => "EFC",
	Else => "ELSE",
	End => "END",
	Event => "EVENT",
	Exists => "EXISTS",
	Explain => "EXPLAIN",
	ExtendCandidates => "EXTEND_CANDIDATES",
	Fetch => "FETCH",
	Field => "FIELD",
	Fields => "FIELDS",
	Filters => "FILTERS",
	Flexible => "FLEXIBLE",
	For => "FOR",
	From => "FROM",
	Group => "GROUP",
	Highlights => "HIGHLIGHTS",
	Hnsw => "HNSW",
	If => "IF",
	Ignore => "IGNORE",
	In => "IN",
	Index => "INDEX",
	Info => "INFO",
	Insert => "INSERT",
	Into => "INTO",
	KeepPrunedConnections => "KEEP_PRUNED_CONNECTIONS",
	Key => "KEY",
	Kill => "KILL",
	Let => "LET",
	Limit => "LIMIT",
	Live => "LIVE",
	Lm => "LM",
	M => "M",
	M0 => "M0",
	Merge => "MERGE",
	MTree => "MTREE",
	MTreeCache => "MTREE_CACHE",
	Namespace => "NAMESPACE",
	NoIndex => "NOINDEX",
	Normal => "NORMAL",
	Not => "NOT",
	On => "ON",
	Only => "ONLY",
	Option => "OPTION",
	Order => "ORDER",
	Out => "OUT",
	Overwrite => "OVERWRITE",
	Parallel => "PARALLEL",
	Param => "PARAM",
	Passhash => "PASSHASH",
	Password => "PASSWORD",
	Patch => "PATCH",
	Permissions => "PERMISSIONS",
	PostingsCache => "POSTINGS_CACHE",
	PostingsOrder => "POSTINGS_ORDER",
	ReadOnly => "READONLY",
	Rebuild => "REBUILD",
	Relate => "RELATE",
	Relation => "RELATION",
	Remove => "REMOVE",
	Return => "RETURN",
	Roles => "ROLES",
	Root => "ROOT",
	Schemafull => "SCHEMAFULL",
	Schemaless => "SCHEMALESS",
	Scope => "SCOPE",
	Search => "SEARCH",
	Select => "SELECT",
	Session => "SESSION",
	Set => "SET",
	Show => "SHOW",
	Signin => "SIGNIN",
	Signup => "SIGNUP",
	Since => "SINCE",
	Sleep => "SLEEP",
	Split => "SPLIT",
	Start => "START",
	Structure => "STRUCTURE",
	Table => "TABLE",
	TempFiles => "TEMPFILES",
	TermsCache => "TERMS_CACHE",
	TermsOrder => "TERMS_ORDER",
	Then => "THEN",
	Throw => "THROW",
	Timeout => "TIMEOUT",
	To => "TO",
	Token => "TOKEN",
	Tokenizers => "TOKENIZERS",
	Transaction => "TRANSACTION",
	Type => "TYPE",
	Unique => "UNIQUE",
	Unset => "UNSET",
	Update => "UPDATE",
	Upsert => "UPSERT",
	Use => "USE",
	User => "USER",
	Value => "VALUE",
	Values => "VALUES",
	When => "WHEN",
	Where => "WHERE",
	With => "WITH",

	// Literal keywords.
	After => "AFTER",
	Before => "BEFORE",
	Diff => "DIFF",
	False => "FALSE",
	Full => "FULL",
	None => "NONE",
	Null => "NULL",
	True => "TRUE",

	Jwks => "JWKS",

	// Word operators in their keyword role.
	AllInside => "ALLINSIDE",
	And => "AND",
	AnyInside => "ANYINSIDE",
	Contains => "CONTAINS",
	ContainsAll => "CONTAINSALL",
	ContainsAny => "CONTAINSANY",
	ContainsNone => "CONTAINSNONE",
	ContainsNot => "CONTAINSNOT",
	Inside => "INSIDE",
	Intersects => "INTERSECTS",
	Is => "IS",
	NoneInside => "NONEINSIDE",
	NotInside => "NOTINSIDE",
	Or => "OR",
	Outside => "OUTSIDE",

	// Analyzer tokenizers and filters.
	Ascii => "ASCII",
	Blank => "BLANK",
	Camel => "CAMEL",
	Class => "CLASS",
	Edgengram => "EDGENGRAM",
	Ngram => "NGRAM",
	Punct => "PUNCT",
	Snowball => "SNOWBALL",
	Uppercase => "UPPERCASE",

	// Function name keywords.
	Count => "COUNT",
	Function => "FUNCTION",
	Rand => "RAND",
}

/// A word operator in operator position.
///
/// `NOT` and `IN` double as keywords elsewhere in the grammar; these terminals
/// are only produced when the parser can shift them as operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
	Not,
	In,
}

impl Operator {
	pub fn as_str(&self) -> &'static str {
		match self {
			Operator::Not => "NOT",
			Operator::In => "IN",
		}
	}
}

/// A permission-clause verb inside `PERMISSIONS FOR`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Permission {
	Select,
	Create,
	Update,
	Delete,
}

impl Permission {
	pub fn as_str(&self) -> &'static str {
		match self {
			Permission::Select => "SELECT",
			Permission::Create => "CREATE",
			Permission::Update => "UPDATE",
			Permission::Delete => "DELETE",
		}
	}
}

/// A JWT signing algorithm name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
	EdDsa,
	Es256,
	Es384,
	Es512,
	Ps256,
	Ps384,
	Ps512,
	Rs256,
	Rs384,
	Rs512,
}

impl Algorithm {
	pub fn as_str(&self) -> &'static str {
		match self {
			Algorithm::EdDsa => "EDDSA",
			Algorithm::Es256 => "ES256",
			Algorithm::Es384 => "ES384",
			Algorithm::Es512 => "ES512",
			Algorithm::Ps256 => "PS256",
			Algorithm::Ps384 => "PS384",
			Algorithm::Ps512 => "PS512",
			Algorithm::Rs256 => "RS256",
			Algorithm::Rs384 => "RS384",
			Algorithm::Rs512 => "RS512",
		}
	}
}

/// A vector-index distance metric name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Distance {
	Chebyshev,
	Cosine,
	Euclidean,
	Hamming,
	Jaccard,
	Manhattan,
	Minkowski,
	Pearson,
}

impl Distance {
	pub fn as_str(&self) -> &'static str {
		match self {
			Distance::Chebyshev => "CHEBYSHEV",
			Distance::Cosine => "COSINE",
			Distance::Euclidean => "EUCLIDEAN",
			Distance::Hamming => "HAMMING",
			Distance::Jaccard => "JACCARD",
			Distance::Manhattan => "MANHATTAN",
			Distance::Minkowski => "MINKOWSKI",
			Distance::Pearson => "PEARSON",
		}
	}
}

/// A vector element type name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VectorType {
	F32,
	F64,
	I16,
	I32,
	I64,
}

impl VectorType {
	pub fn as_str(&self) -> &'static str {
		match self {
			VectorType::F32 => "F32",
			VectorType::F64 => "F64",
			VectorType::I16 => "I16",
			VectorType::I32 => "I32",
			VectorType::I64 => "I64",
		}
	}
}

/// The kind of a token: a single terminal symbol of the SurrealQL grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
	Keyword(Keyword),
	Operator(Operator),
	Permission(Permission),
	Algorithm(Algorithm),
	Distance(Distance),
	VectorType(VectorType),
	/// A span which matched no keyword table entry.
	Identifier,
	/// Zero-width marker tagging the following `{` as an object literal
	/// instead of a block.
	ObjectOpen,
}

impl TokenKind {
	/// The spelling rendered in diagnostics.
	pub fn as_str(&self) -> &'static str {
		match self {
			TokenKind::Keyword(x) => x.as_str(),
			TokenKind::Operator(x) => x.as_str(),
			TokenKind::Permission(x) => x.as_str(),
			TokenKind::Algorithm(x) => x.as_str(),
			TokenKind::Distance(x) => x.as_str(),
			TokenKind::VectorType(x) => x.as_str(),
			TokenKind::Identifier => "an identifier",
			TokenKind::ObjectOpen => "an object",
		}
	}
}

impl fmt::Display for TokenKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A location in the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
	pub offset: u32,
	pub len: u32,
}

/// A token emitted by one of the scanners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
	pub kind: TokenKind,
	pub span: Span,
}
