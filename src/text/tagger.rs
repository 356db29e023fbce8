//! Part-of-speech tags and tagging.
//!
//! The chunk grammar only distinguishes a handful of Penn Treebank tags, but
//! taggers are pluggable through [`PosTagger`], so the full tag set is modelled.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Penn Treebank part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    /// CC
    CoordinatingConjunction,
    /// CD
    Number,
    /// DT
    Determiner,
    /// EX
    Existential,
    /// FW
    ForeignWord,
    /// IN (preposition or subordinating conjunction)
    Preposition,
    /// JJ
    Adjective,
    /// JJR
    AdjectiveComparative,
    /// JJS
    AdjectiveSuperlative,
    /// MD
    Modal,
    /// NN
    Noun,
    /// NNS
    NounPlural,
    /// NNP
    ProperNoun,
    /// NNPS
    ProperNounPlural,
    /// PDT
    Predeterminer,
    /// POS
    Possessive,
    /// PRP
    Pronoun,
    /// PRP$
    PossessivePronoun,
    /// RB
    Adverb,
    /// RBR
    AdverbComparative,
    /// RBS
    AdverbSuperlative,
    /// RP
    Particle,
    /// TO
    To,
    /// UH
    Interjection,
    /// VB
    BaseVerb,
    /// VBD
    PastTenseVerb,
    /// VBG
    Gerund,
    /// VBN
    PastParticiple,
    /// VBP
    PresentVerb,
    /// VBZ
    PresentVerbThirdPerson,
    /// WDT
    WhDeterminer,
    /// WP
    WhPronoun,
    /// WRB
    WhAdverb,
    /// `,`
    Comma,
    /// `.` `!` `?`
    SentenceEnd,
    /// `:` `;` `...` `-`
    Colon,
    /// `(` `[` `{`
    OpenBracket,
    /// `)` `]` `}`
    CloseBracket,
    /// Opening quote.
    OpenQuote,
    /// Closing quote.
    CloseQuote,
    /// `$` `£` ...
    Currency,
    /// `#`
    Hash,
    /// SYM or anything unrecognized.
    Symbol,
}

impl PosTag {
    /// Parse a Penn Treebank tag string. Unknown tags map to [`PosTag::Symbol`].
    pub fn from_penn(tag: &str) -> Self {
        match tag {
            "CC" => Self::CoordinatingConjunction,
            "CD" => Self::Number,
            "DT" => Self::Determiner,
            "EX" => Self::Existential,
            "FW" => Self::ForeignWord,
            "IN" => Self::Preposition,
            "JJ" => Self::Adjective,
            "JJR" => Self::AdjectiveComparative,
            "JJS" => Self::AdjectiveSuperlative,
            "MD" => Self::Modal,
            "NN" => Self::Noun,
            "NNS" => Self::NounPlural,
            "NNP" => Self::ProperNoun,
            "NNPS" => Self::ProperNounPlural,
            "PDT" => Self::Predeterminer,
            "POS" => Self::Possessive,
            "PRP" => Self::Pronoun,
            "PRP$" => Self::PossessivePronoun,
            "RB" => Self::Adverb,
            "RBR" => Self::AdverbComparative,
            "RBS" => Self::AdverbSuperlative,
            "RP" => Self::Particle,
            "TO" => Self::To,
            "UH" => Self::Interjection,
            "VB" => Self::BaseVerb,
            "VBD" => Self::PastTenseVerb,
            "VBG" => Self::Gerund,
            "VBN" => Self::PastParticiple,
            "VBP" => Self::PresentVerb,
            "VBZ" => Self::PresentVerbThirdPerson,
            "WDT" => Self::WhDeterminer,
            "WP" => Self::WhPronoun,
            "WRB" => Self::WhAdverb,
            "," => Self::Comma,
            "." => Self::SentenceEnd,
            ":" => Self::Colon,
            "(" => Self::OpenBracket,
            ")" => Self::CloseBracket,
            "``" => Self::OpenQuote,
            "''" => Self::CloseQuote,
            "$" => Self::Currency,
            "#" => Self::Hash,
            _ => Self::Symbol,
        }
    }

    /// Penn Treebank spelling of the tag.
    pub fn as_penn(self) -> &'static str {
        match self {
            Self::CoordinatingConjunction => "CC",
            Self::Number => "CD",
            Self::Determiner => "DT",
            Self::Existential => "EX",
            Self::ForeignWord => "FW",
            Self::Preposition => "IN",
            Self::Adjective => "JJ",
            Self::AdjectiveComparative => "JJR",
            Self::AdjectiveSuperlative => "JJS",
            Self::Modal => "MD",
            Self::Noun => "NN",
            Self::NounPlural => "NNS",
            Self::ProperNoun => "NNP",
            Self::ProperNounPlural => "NNPS",
            Self::Predeterminer => "PDT",
            Self::Possessive => "POS",
            Self::Pronoun => "PRP",
            Self::PossessivePronoun => "PRP$",
            Self::Adverb => "RB",
            Self::AdverbComparative => "RBR",
            Self::AdverbSuperlative => "RBS",
            Self::Particle => "RP",
            Self::To => "TO",
            Self::Interjection => "UH",
            Self::BaseVerb => "VB",
            Self::PastTenseVerb => "VBD",
            Self::Gerund => "VBG",
            Self::PastParticiple => "VBN",
            Self::PresentVerb => "VBP",
            Self::PresentVerbThirdPerson => "VBZ",
            Self::WhDeterminer => "WDT",
            Self::WhPronoun => "WP",
            Self::WhAdverb => "WRB",
            Self::Comma => ",",
            Self::SentenceEnd => ".",
            Self::Colon => ":",
            Self::OpenBracket => "(",
            Self::CloseBracket => ")",
            Self::OpenQuote => "``",
            Self::CloseQuote => "''",
            Self::Currency => "$",
            Self::Hash => "#",
            Self::Symbol => "SYM",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_penn())
    }
}

/// A token with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface form.
    pub text: String,
    /// Part-of-speech tag.
    pub tag: PosTag,
}

impl TaggedToken {
    /// Create a tagged token.
    pub fn new(text: impl Into<String>, tag: PosTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

impl fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.text, self.tag)
    }
}

/// Assigns a part-of-speech tag to every token of a sentence.
pub trait PosTagger {
    /// Tag `tokens`, returning exactly one tagged token per input token.
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>>;
}

/// Closed-class lexicon plus orthographic heuristics.
///
/// Good enough for the formulaic register of parliamentary questions
/// ("Mr X asked the Minister for Y whether ..."). Plug in a statistical tagger
/// through [`PosTagger`] for free text.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: FxHashMap<String, PosTag>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    /// Create a tagger with the built-in English lexicon.
    pub fn new() -> Self {
        let mut lexicon = FxHashMap::default();
        for (tag, words) in BUILTIN_LEXICON {
            for word in *words {
                lexicon.insert((*word).to_string(), *tag);
            }
        }
        Self { lexicon }
    }

    /// Add or override a lexicon entry. Entries match case-sensitively; at the
    /// start of a sentence the lowercased word is tried as well.
    pub fn with_entry(mut self, word: &str, tag: PosTag) -> Self {
        self.lexicon.insert(word.to_string(), tag);
        self
    }

    fn lookup(&self, word: &str, sentence_start: bool) -> Option<PosTag> {
        if let Some(&tag) = self.lexicon.get(word) {
            return Some(tag);
        }
        // Mid-sentence capitals are names ("Minister for National Development").
        if sentence_start {
            return self.lexicon.get(&word.to_lowercase()).copied();
        }
        None
    }

    fn guess(&self, word: &str, previous: Option<PosTag>) -> PosTag {
        if let Some(tag) = punctuation_tag(word) {
            return tag;
        }
        if word.chars().any(|c| c.is_ascii_digit())
            && word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return PosTag::Number;
        }
        if word.chars().next().is_some_and(char::is_uppercase) {
            return PosTag::ProperNoun;
        }
        if previous == Some(PosTag::To) {
            return PosTag::BaseVerb;
        }
        let lower = word.to_lowercase();
        if lower.len() > 3 && lower.ends_with("ed") {
            PosTag::PastTenseVerb
        } else if lower.len() > 4 && lower.ends_with("ing") {
            PosTag::Gerund
        } else if lower.len() > 3 && lower.ends_with("ly") {
            PosTag::Adverb
        } else if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
            PosTag::NounPlural
        } else {
            PosTag::Noun
        }
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>> {
        let mut out: Vec<TaggedToken> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let previous = out.last().map(|t| t.tag);
            let sentence_start = matches!(previous, None | Some(PosTag::SentenceEnd));
            let tag = self
                .lookup(token, sentence_start)
                .unwrap_or_else(|| self.guess(token, previous));
            out.push(TaggedToken::new(token.clone(), tag));
        }
        Ok(out)
    }
}

fn punctuation_tag(word: &str) -> Option<PosTag> {
    let tag = match word {
        "," => PosTag::Comma,
        "." | "!" | "?" => PosTag::SentenceEnd,
        ":" | ";" | "-" | "--" | "..." => PosTag::Colon,
        "(" | "[" | "{" => PosTag::OpenBracket,
        ")" | "]" | "}" => PosTag::CloseBracket,
        "``" | "\u{201c}" => PosTag::OpenQuote,
        "''" | "\u{201d}" | "\"" => PosTag::CloseQuote,
        "$" | "£" | "€" => PosTag::Currency,
        "#" => PosTag::Hash,
        _ if word.chars().all(|c| !c.is_alphanumeric()) && !word.is_empty() => PosTag::Symbol,
        _ => return None,
    };
    Some(tag)
}

const BUILTIN_LEXICON: &[(PosTag, &[&str])] = &[
    (
        PosTag::Determiner,
        &[
            "the", "a", "an", "this", "that", "these", "those", "each", "every", "any", "some",
            "no", "another", "either", "neither", "all", "both",
        ],
    ),
    (
        PosTag::Preposition,
        &[
            "of", "for", "in", "on", "at", "by", "with", "from", "into", "about", "over", "under",
            "between", "among", "through", "during", "after", "before", "against", "since",
            "until", "within", "without", "towards", "upon", "per", "whether", "if", "because",
            "as", "than", "while", "although", "though", "unless", "regarding", "including",
        ],
    ),
    (PosTag::CoordinatingConjunction, &["and", "or", "but", "nor", "yet", "&"]),
    (PosTag::To, &["to"]),
    (
        PosTag::Pronoun,
        &["he", "she", "it", "they", "we", "i", "you", "him", "her", "them", "us", "me"],
    ),
    (PosTag::PossessivePronoun, &["his", "its", "their", "our", "my", "your"]),
    (
        PosTag::Modal,
        &["will", "would", "can", "could", "shall", "should", "may", "might", "must"],
    ),
    (PosTag::WhDeterminer, &["which", "whatever", "whichever"]),
    (PosTag::WhPronoun, &["what", "who", "whom", "whose"]),
    (PosTag::WhAdverb, &["how", "when", "where", "why"]),
    (PosTag::Existential, &["there"]),
    (PosTag::Possessive, &["'s", "'"]),
    (
        PosTag::PresentVerbThirdPerson,
        &["is", "has", "does", "remains", "plans", "intends", "requires"],
    ),
    (PosTag::PresentVerb, &["are", "have", "do"]),
    (PosTag::PastTenseVerb, &["was", "were", "had", "did", "asked", "said", "made", "took", "gave"]),
    (PosTag::PastParticiple, &["been", "taken", "given", "done"]),
    (PosTag::BaseVerb, &["be", "ask", "provide", "consider", "review", "state", "explain"]),
    (
        PosTag::Adverb,
        &["not", "also", "currently", "further", "still", "already", "so", "very"],
    ),
    (
        PosTag::Adjective,
        &[
            "new", "public", "national", "current", "recent", "many", "more", "most", "other",
            "such", "same", "past", "last", "next", "foreign", "local", "total", "annual",
            "honourable",
        ],
    ),
];
