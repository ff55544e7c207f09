//! The keyword tables consulted when classifying identifier-like spans.

use phf::phf_map;
use unicase::UniCase;

use crate::token::{t, Operator, Permission, TokenKind};

/// The flat keyword table, mapping every keyword spelling to its canonical
/// terminal. Lookups are ASCII case-insensitive.
pub(crate) static KEYWORDS: phf::Map<UniCase<&'static str>, TokenKind> = phf_map! {
	UniCase::ascii("ALTER") => t!("ALTER"),
	UniCase::ascii("ANALYZER") => t!("ANALYZER"),
	UniCase::ascii("ANY") => t!("ANY"),
	UniCase::ascii("AS") => t!("AS"),
	UniCase::ascii("ASC") => t!("ASC"),
	UniCase::ascii("ASSERT") => t!("ASSERT"),
	UniCase::ascii("AT") => t!("AT"),
	UniCase::ascii("BEGIN") => t!("BEGIN"),
	UniCase::ascii("BM25") => t!("BM25"),
	UniCase::ascii("BREAK") => t!("BREAK"),
	UniCase::ascii("BY") => t!("BY"),
	UniCase::ascii("CANCEL") => t!("CANCEL"),
	UniCase::ascii("CAPACITY") => t!("CAPACITY"),
	UniCase::ascii("CHANGEFEED") => t!("CHANGEFEED"),
	UniCase::ascii("CHANGES") => t!("CHANGES"),
	UniCase::ascii("COLUMNS") => t!("COLUMNS"),
	UniCase::ascii("COMMENT") => t!("COMMENT"),
	UniCase::ascii("COMMIT") => t!("COMMIT"),
	UniCase::ascii("CONTENT") => t!("CONTENT"),
	UniCase::ascii("CONTINUE") => t!("CONTINUE"),
	UniCase::ascii("CREATE") => t!("CREATE"),
	UniCase::ascii("DATABASE") => t!("DATABASE"),
	UniCase::ascii("DB") => t!("DB"),
	UniCase::ascii("DEFAULT") => t!("DEFAULT"),
	UniCase::ascii("DEFINE") => t!("DEFINE"),
	UniCase::ascii("DELETE") => t!("DELETE"),
	UniCase::ascii("DESC") => t!("DESC"),
	UniCase::ascii("DIMENSION") => t!("DIMENSION"),
	UniCase::ascii("DIST") => t!("DIST"),
	UniCase::ascii("DOC_IDS_CACHE") => t!("DOC_IDS_CACHE"),
	UniCase::ascii("DOC_IDS_ORDER") => t!("DOC_IDS_ORDER"),
	UniCase::ascii("DOC_LENGTHS_CACHE") => t!("DOC_LENGTHS_CACHE"),
	UniCase::ascii("DOC_LENGTHS_ORDER") => t!("DOC_LENGTHS_ORDER"),
	UniCase::ascii("DROP") => t!("DROP"),
	UniCase::ascii("DUPLICATE") => t!("DUPLICATE"),
	UniCase::ascii("EFC") => t!("EFC"),
	UniCase::ascii("ELSE") => t!("ELSE"),
	UniCase::ascii("END") => t!("END"),
	UniCase::ascii("EVENT") => t!("EVENT"),
	UniCase::ascii("EXISTS") => t!("EXISTS"),
	UniCase::ascii("EXPLAIN") => t!("EXPLAIN"),
	UniCase::ascii("EXTEND_CANDIDATES") => t!("EXTEND_CANDIDATES"),
	UniCase::ascii("FETCH") => t!("FETCH"),
	UniCase::ascii("FIELD") => t!("FIELD"),
	UniCase::ascii("FIELDS") => t!("FIELDS"),
	UniCase::ascii("FILTERS") => t!("FILTERS"),
	UniCase::ascii("FLEXIBLE") => t!("FLEXIBLE"),
	UniCase::ascii("FOR") => t!("FOR"),
	UniCase::ascii("FROM") => t!("FROM"),
	UniCase::ascii("GROUP") => t!("GROUP"),
	UniCase::ascii("HIGHLIGHTS") => t!("HIGHLIGHTS"),
	UniCase::ascii("HNSW") => t!("HNSW"),
	UniCase::ascii("IF") => t!("IF"),
	UniCase::ascii("IGNORE") => t!("IGNORE"),
	UniCase::ascii("IN") => t!("IN"),
	UniCase::ascii("INDEX") => t!("INDEX"),
	UniCase::ascii("INFO") => t!("INFO"),
	UniCase::ascii("INSERT") => t!("INSERT"),
	UniCase::ascii("INTO") => t!("INTO"),
	UniCase::ascii("KEEP_PRUNED_CONNECTIONS") => t!("KEEP_PRUNED_CONNECTIONS"),
	UniCase::ascii("KEY") => t!("KEY"),
	UniCase::ascii("KILL") => t!("KILL"),
	UniCase::ascii("LET") => t!("LET"),
	UniCase::ascii("LIMIT") => t!("LIMIT"),
	UniCase::ascii("LIVE") => t!("LIVE"),
	UniCase::ascii("LM") => t!("LM"),
	UniCase::ascii("M") => t!("M"),
	UniCase::ascii("M0") => t!("M0"),
	UniCase::ascii("MERGE") => t!("MERGE"),
	UniCase::ascii("MTREE") => t!("MTREE"),
	UniCase::ascii("MTREE_CACHE") => t!("MTREE_CACHE"),
	UniCase::ascii("NAMESPACE") => t!("NAMESPACE"),
	UniCase::ascii("NOINDEX") => t!("NOINDEX"),
	UniCase::ascii("NORMAL") => t!("NORMAL"),
	UniCase::ascii("NOT") => t!("NOT"),
	UniCase::ascii("NS") => t!("NS"),
	UniCase::ascii("ON") => t!("ON"),
	UniCase::ascii("ONLY") => t!("ONLY"),
	UniCase::ascii("OPTION") => t!("OPTION"),
	UniCase::ascii("ORDER") => t!("ORDER"),
	UniCase::ascii("OUT") => t!("OUT"),
	UniCase::ascii("OVERWRITE") => t!("OVERWRITE"),
	UniCase::ascii("PARALLEL") => t!("PARALLEL"),
	UniCase::ascii("PARAM") => t!("PARAM"),
	UniCase::ascii("PASSHASH") => t!("PASSHASH"),
	UniCase::ascii("PASSWORD") => t!("PASSWORD"),
	UniCase::ascii("PATCH") => t!("PATCH"),
	UniCase::ascii("PERMISSIONS") => t!("PERMISSIONS"),
	UniCase::ascii("POSTINGS_CACHE") => t!("POSTINGS_CACHE"),
	UniCase::ascii("POSTINGS_ORDER") => t!("POSTINGS_ORDER"),
	UniCase::ascii("READONLY") => t!("READONLY"),
	UniCase::ascii("REBUILD") => t!("REBUILD"),
	UniCase::ascii("RELATE") => t!("RELATE"),
	UniCase::ascii("RELATION") => t!("RELATION"),
	UniCase::ascii("REMOVE") => t!("REMOVE"),
	UniCase::ascii("RETURN") => t!("RETURN"),
	UniCase::ascii("ROLES") => t!("ROLES"),
	UniCase::ascii("ROOT") => t!("ROOT"),
	UniCase::ascii("SC") => t!("SC"),
	UniCase::ascii("SCHEMAFULL") => t!("SCHEMAFULL"),
	UniCase::ascii("SCHEMALESS") => t!("SCHEMALESS"),
	UniCase::ascii("SCOPE") => t!("SCOPE"),
	UniCase::ascii("SEARCH") => t!("SEARCH"),
	UniCase::ascii("SELECT") => t!("SELECT"),
	UniCase::ascii("SESSION") => t!("SESSION"),
	UniCase::ascii("SET") => t!("SET"),
	UniCase::ascii("SHOW") => t!("SHOW"),
	UniCase::ascii("SIGNIN") => t!("SIGNIN"),
	UniCase::ascii("SIGNUP") => t!("SIGNUP"),
	UniCase::ascii("SINCE") => t!("SINCE"),
	UniCase::ascii("SLEEP") => t!("SLEEP"),
	UniCase::ascii("SPLIT") => t!("SPLIT"),
	UniCase::ascii("START") => t!("START"),
	UniCase::ascii("STRUCTURE") => t!("STRUCTURE"),
	UniCase::ascii("TABLE") => t!("TABLE"),
	UniCase::ascii("TB") => t!("TB"),
	UniCase::ascii("TEMPFILES") => t!("TEMPFILES"),
	UniCase::ascii("TERMS_CACHE") => t!("TERMS_CACHE"),
	UniCase::ascii("TERMS_ORDER") => t!("TERMS_ORDER"),
	UniCase::ascii("THEN") => t!("THEN"),
	UniCase::ascii("THROW") => t!("THROW"),
	UniCase::ascii("TIMEOUT") => t!("TIMEOUT"),
	UniCase::ascii("TO") => t!("TO"),
	UniCase::ascii("TOKEN") => t!("TOKEN"),
	UniCase::ascii("TOKENIZERS") => t!("TOKENIZERS"),
	UniCase::ascii("TRANSACTION") => t!("TRANSACTION"),
	UniCase::ascii("TYPE") => t!("TYPE"),
	UniCase::ascii("UNIQUE") => t!("UNIQUE"),
	UniCase::ascii("UNSET") => t!("UNSET"),
	UniCase::ascii("UPDATE") => t!("UPDATE"),
	UniCase::ascii("UPSERT") => t!("UPSERT"),
	UniCase::ascii("USE") => t!("USE"),
	UniCase::ascii("USER") => t!("USER"),
	UniCase::ascii("VALUE") => t!("VALUE"),
	UniCase::ascii("VALUES") => t!("VALUES"),
	UniCase::ascii("WHEN") => t!("WHEN"),
	UniCase::ascii("WHERE") => t!("WHERE"),
	UniCase::ascii("WITH") => t!("WITH"),

	// Literal keywords.
	UniCase::ascii("AFTER") => t!("AFTER"),
	UniCase::ascii("BEFORE") => t!("BEFORE"),
	UniCase::ascii("DIFF") => t!("DIFF"),
	UniCase::ascii("FALSE") => t!("FALSE"),
	UniCase::ascii("FULL") => t!("FULL"),
	UniCase::ascii("NONE") => t!("NONE"),
	UniCase::ascii("NULL") => t!("NULL"),
	UniCase::ascii("TRUE") => t!("TRUE"),

	UniCase::ascii("JWKS") => t!("JWKS"),

	// Word operators in their keyword role.
	UniCase::ascii("ALLINSIDE") => t!("ALLINSIDE"),
	UniCase::ascii("AND") => t!("AND"),
	UniCase::ascii("ANYINSIDE") => t!("ANYINSIDE"),
	UniCase::ascii("CONTAINS") => t!("CONTAINS"),
	UniCase::ascii("CONTAINSALL") => t!("CONTAINSALL"),
	UniCase::ascii("CONTAINSANY") => t!("CONTAINSANY"),
	UniCase::ascii("CONTAINSNONE") => t!("CONTAINSNONE"),
	UniCase::ascii("CONTAINSNOT") => t!("CONTAINSNOT"),
	UniCase::ascii("INSIDE") => t!("INSIDE"),
	UniCase::ascii("INTERSECTS") => t!("INTERSECTS"),
	UniCase::ascii("IS") => t!("IS"),
	UniCase::ascii("NONEINSIDE") => t!("NONEINSIDE"),
	UniCase::ascii("NOTINSIDE") => t!("NOTINSIDE"),
	UniCase::ascii("OR") => t!("OR"),
	UniCase::ascii("OUTSIDE") => t!("OUTSIDE"),

	// Analyzer tokenizers and filters.
	UniCase::ascii("ASCII") => t!("ASCII"),
	UniCase::ascii("BLANK") => t!("BLANK"),
	UniCase::ascii("CAMEL") => t!("CAMEL"),
	UniCase::ascii("CLASS") => t!("CLASS"),
	UniCase::ascii("EDGENGRAM") => t!("EDGENGRAM"),
	UniCase::ascii("NGRAM") => t!("NGRAM"),
	UniCase::ascii("PUNCT") => t!("PUNCT"),
	UniCase::ascii("SNOWBALL") => t!("SNOWBALL"),
	UniCase::ascii("UPPERCASE") => t!("UPPERCASE"),

	// Function name keywords.
	UniCase::ascii("COUNT") => t!("COUNT"),
	UniCase::ascii("FUNCTION") => t!("FUNCTION"),
	UniCase::ascii("RAND") => t!("RAND"),

	// JWT algorithms.
	UniCase::ascii("EDDSA") => t!("EDDSA"),
	UniCase::ascii("ES256") => t!("ES256"),
	UniCase::ascii("ES384") => t!("ES384"),
	UniCase::ascii("ES512") => t!("ES512"),
	UniCase::ascii("PS256") => t!("PS256"),
	UniCase::ascii("PS384") => t!("PS384"),
	UniCase::ascii("PS512") => t!("PS512"),
	UniCase::ascii("RS256") => t!("RS256"),
	UniCase::ascii("RS384") => t!("RS384"),
	UniCase::ascii("RS512") => t!("RS512"),

	// Distance metrics.
	UniCase::ascii("CHEBYSHEV") => t!("CHEBYSHEV"),
	UniCase::ascii("COSINE") => t!("COSINE"),
	UniCase::ascii("EUCLIDEAN") => t!("EUCLIDEAN"),
	UniCase::ascii("HAMMING") => t!("HAMMING"),
	UniCase::ascii("JACCARD") => t!("JACCARD"),
	UniCase::ascii("MANHATTAN") => t!("MANHATTAN"),
	UniCase::ascii("MINKOWSKI") => t!("MINKOWSKI"),
	UniCase::ascii("PEARSON") => t!("PEARSON"),

	// Vector element types.
	UniCase::ascii("F32") => t!("F32"),
	UniCase::ascii("F64") => t!("F64"),
	UniCase::ascii("I16") => t!("I16"),
	UniCase::ascii("I32") => t!("I32"),
	UniCase::ascii("I64") => t!("I64"),
};

/// Spellings whose terminal depends on the position the parser is in.
///
/// Candidates are ordered most specific first; the first one the parser can
/// shift wins. When none is shiftable classification falls through to
/// [`KEYWORDS`], so the general keyword meaning is the default.
pub(crate) static CONTEXTUAL: phf::Map<UniCase<&'static str>, &'static [TokenKind]> = phf_map! {
	UniCase::ascii("SELECT") => &[TokenKind::Permission(Permission::Select)],
	UniCase::ascii("CREATE") => &[TokenKind::Permission(Permission::Create)],
	UniCase::ascii("UPDATE") => &[TokenKind::Permission(Permission::Update)],
	UniCase::ascii("DELETE") => &[TokenKind::Permission(Permission::Delete)],
	UniCase::ascii("NOT") => &[TokenKind::Operator(Operator::Not)],
	UniCase::ascii("IN") => &[TokenKind::Operator(Operator::In)],
};

/// Returns whether `s` matches a keyword spelling in some context.
pub fn could_be_reserved(s: &str) -> bool {
	KEYWORDS.contains_key(&UniCase::ascii(s))
}
