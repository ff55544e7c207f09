/// A shorthand for token kinds.
macro_rules! t {
	("ALTER") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Alter)
	};
	("ANALYZER") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Analyzer)
	};
	("ANY") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Any)
	};
	("AS") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::As)
	};
	("ASC") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Asc)
	};
	("ASSERT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Assert)
	};
	("AT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::At)
	};
	("BEGIN") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Begin)
	};
	("BM25") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Bm25)
	};
	("BREAK") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Break)
	};
	("BY") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::By)
	};
	("CANCEL") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Cancel)
	};
	("CAPACITY") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Capacity)
	};
	("CHANGEFEED") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::ChangeFeed)
	};
	("CHANGES") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Changes)
	};
	("COLUMNS") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Columns)
	};
	("COMMENT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Comment)
	};
	("COMMIT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Commit)
	};
	("CONTENT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Content)
	};
	("CONTINUE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Continue)
	};
	("CREATE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Create)
	};
	("DATABASE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Database)
	};
	("DB") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Database)
	};
	("DEFAULT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Default)
	};
	("DEFINE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Define)
	};
	("DELETE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Delete)
	};
	("DESC") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Desc)
	};
	("DIMENSION") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Dimension)
	};
	("DIST") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Dist)
	};
	("DOC_IDS_CACHE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::DocIdsCache)
	};
	("DOC_IDS_ORDER") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::DocIdsOrder)
	};
	("DOC_LENGTHS_CACHE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::DocLengthsCache)
	};
	("DOC_LENGTHS_ORDER") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::DocLengthsOrder)
	};
	("DROP") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Drop)
	};
	("DUPLICATE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Duplicate)
	};
	("EFC") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Efc)
	};
	("ELSE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Else)
	};
	("END") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::End)
	};
	("EVENT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Event)
	};
	("EXISTS") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Exists)
	};
	("EXPLAIN") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Explain)
	};
	("EXTEND_CANDIDATES") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::ExtendCandidates)
	};
	("FETCH") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Fetch)
	};
	("FIELD") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Field)
	};
	("FIELDS") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Fields)
	};
	("FILTERS") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Filters)
	};
	("FLEXIBLE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Flexible)
	};
	("FOR") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::For)
	};
	("FROM") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::From)
	};
	("GROUP") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Group)
	};
	("HIGHLIGHTS") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Highlights)
	};
	("HNSW") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Hnsw)
	};
	("IF") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::If)
	};
	("IGNORE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Ignore)
	};
	("IN") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::In)
	};
	("INDEX") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Index)
	};
	("INFO") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Info)
	};
	("INSERT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Insert)
	};
	("INTO") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Into)
	};
	("KEEP_PRUNED_CONNECTIONS") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::KeepPrunedConnections)
	};
	("KEY") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Key)
	};
	("KILL") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Kill)
	};
	("LET") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Let)
	};
	("LIMIT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Limit)
	};
	("LIVE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Live)
	};
	("LM") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Lm)
	};
	("M") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::M)
	};
	("M0") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::M0)
	};
	("MERGE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Merge)
	};
	("MTREE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::MTree)
	};
	("MTREE_CACHE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::MTreeCache)
	};
	("NAMESPACE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Namespace)
	};
	("NOINDEX") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::NoIndex)
	};
	("NORMAL") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Normal)
	};
	("NOT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Not)
	};
	("NS") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Namespace)
	};
	("ON") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::On)
	};
	("ONLY") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Only)
	};
	("OPTION") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Option)
	};
	("ORDER") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Order)
	};
	("OUT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Out)
	};
	("OVERWRITE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Overwrite)
	};
	("PARALLEL") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Parallel)
	};
	("PARAM") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Param)
	};
	("PASSHASH") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Passhash)
	};
	("PASSWORD") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Password)
	};
	("PATCH") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Patch)
	};
	("PERMISSIONS") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Permissions)
	};
	("POSTINGS_CACHE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::PostingsCache)
	};
	("POSTINGS_ORDER") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::PostingsOrder)
	};
	("READONLY") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::ReadOnly)
	};
	("REBUILD") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Rebuild)
	};
	("RELATE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Relate)
	};
	("RELATION") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Relation)
	};
	("REMOVE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Remove)
	};
	("RETURN") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Return)
	};
	("ROLES") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Roles)
	};
	("ROOT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Root)
	};
	("SC") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Scope)
	};
	("SCHEMAFULL") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Schemafull)
	};
	("SCHEMALESS") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Schemaless)
	};
	("SCOPE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Scope)
	};
	("SEARCH") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Search)
	};
	("SELECT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Select)
	};
	("SESSION") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Session)
	};
	("SET") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Set)
	};
	("SHOW") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Show)
	};
	("SIGNIN") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Signin)
	};
	("SIGNUP") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Signup)
	};
	("SINCE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Since)
	};
	("SLEEP") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Sleep)
	};
	("SPLIT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Split)
	};
	("START") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Start)
	};
	("STRUCTURE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Structure)
	};
	("TABLE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Table)
	};
	("TB") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Table)
	};
	("TEMPFILES") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::TempFiles)
	};
	("TERMS_CACHE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::TermsCache)
	};
	("TERMS_ORDER") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::TermsOrder)
	};
	("THEN") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Then)
	};
	("THROW") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Throw)
	};
	("TIMEOUT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Timeout)
	};
	("TO") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::To)
	};
	("TOKEN") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Token)
	};
	("TOKENIZERS") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Tokenizers)
	};
	("TRANSACTION") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Transaction)
	};
	("TYPE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Type)
	};
	("UNIQUE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Unique)
	};
	("UNSET") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Unset)
	};
	("UPDATE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Update)
	};
	("UPSERT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Upsert)
	};
	("USE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Use)
	};
	("USER") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::User)
	};
	("VALUE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Value)
	};
	("VALUES") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Values)
	};
	("WHEN") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::When)
	};
	("WHERE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Where)
	};
	("WITH") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::With)
	};

	("AFTER") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::After)
	};
	("BEFORE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Before)
	};
	("DIFF") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Diff)
	};
	("FALSE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::False)
	};
	("FULL") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Full)
	};
	("NONE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::None)
	};
	("NULL") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Null)
	};
	("TRUE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::True)
	};

	("JWKS") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Jwks)
	};

	("ALLINSIDE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::AllInside)
	};
	("AND") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::And)
	};
	("ANYINSIDE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::AnyInside)
	};
	("CONTAINS") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Contains)
	};
	("CONTAINSALL") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::ContainsAll)
	};
	("CONTAINSANY") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::ContainsAny)
	};
	("CONTAINSNONE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::ContainsNone)
	};
	("CONTAINSNOT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::ContainsNot)
	};
	("INSIDE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Inside)
	};
	("INTERSECTS") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Intersects)
	};
	("IS") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Is)
	};
	("NONEINSIDE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::NoneInside)
	};
	("NOTINSIDE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::NotInside)
	};
	("OR") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Or)
	};
	("OUTSIDE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Outside)
	};

	("ASCII") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Ascii)
	};
	("BLANK") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Blank)
	};
	("CAMEL") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Camel)
	};
	("CLASS") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Class)
	};
	("EDGENGRAM") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Edgengram)
	};
	("NGRAM") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Ngram)
	};
	("PUNCT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Punct)
	};
	("SNOWBALL") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Snowball)
	};
	("UPPERCASE") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Uppercase)
	};

	("COUNT") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Count)
	};
	("FUNCTION") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Function)
	};
	("RAND") => {
		$crate::token::TokenKind::Keyword($crate::token::Keyword::Rand)
	};

	// algorithms
	("EDDSA") => {
		$crate::token::TokenKind::Algorithm($crate::token::Algorithm::EdDsa)
	};
	("ES256") => {
		$crate::token::TokenKind::Algorithm($crate::token::Algorithm::Es256)
	};
	("ES384") => {
		$crate::token::TokenKind::Algorithm($crate::token::Algorithm::Es384)
	};
	("ES512") => {
		$crate::token::TokenKind::Algorithm($crate::token::Algorithm::Es512)
	};
	("PS256") => {
		$crate::token::TokenKind::Algorithm($crate::token::Algorithm::Ps256)
	};
	("PS384") => {
		$crate::token::TokenKind::Algorithm($crate::token::Algorithm::Ps384)
	};
	("PS512") => {
		$crate::token::TokenKind::Algorithm($crate::token::Algorithm::Ps512)
	};
	("RS256") => {
		$crate::token::TokenKind::Algorithm($crate::token::Algorithm::Rs256)
	};
	("RS384") => {
		$crate::token::TokenKind::Algorithm($crate::token::Algorithm::Rs384)
	};
	("RS512") => {
		$crate::token::TokenKind::Algorithm($crate::token::Algorithm::Rs512)
	};

	// distance metrics
	("CHEBYSHEV") => {
		$crate::token::TokenKind::Distance($crate::token::Distance::Chebyshev)
	};
	("COSINE") => {
		$crate::token::TokenKind::Distance($crate::token::Distance::Cosine)
	};
	("EUCLIDEAN") => {
		$crate::token::TokenKind::Distance($crate::token::Distance::Euclidean)
	};
	("HAMMING") => {
		$crate::token::TokenKind::Distance($crate::token::Distance::Hamming)
	};
	("JACCARD") => {
		$crate::token::TokenKind::Distance($crate::token::Distance::Jaccard)
	};
	("MANHATTAN") => {
		$crate::token::TokenKind::Distance($crate::token::Distance::Manhattan)
	};
	("MINKOWSKI") => {
		$crate::token::TokenKind::Distance($crate::token::Distance::Minkowski)
	};
	("PEARSON") => {
		$crate::token::TokenKind::Distance($crate::token::Distance::Pearson)
	};

	// vector element types
	("F32") => {
		$crate::token::TokenKind::VectorType($crate::token::VectorType::F32)
	};
	("F64") => {
		$crate::token::TokenKind::VectorType($crate::token::VectorType::F64)
	};
	("I16") => {
		$crate::token::TokenKind::VectorType($crate::token::VectorType::I16)
	};
	("I32") => {
		$crate::token::TokenKind::VectorType($crate::token::VectorType::I32)
	};
	("I64") => {
		$crate::token::TokenKind::VectorType($crate::token::VectorType::I64)
	};
}

pub(crate) use t;
