//! Declarative chunk rules.
//!
//! A [`Grammar`] is an ordered list of [`ChunkRule`]s. Each rule is a sequence
//! of [`Piece`]s; a piece matches one node (a tagged token, or a chunk built by
//! an earlier rule) or a parenthesized group, with an optional repetition.
//!
//! Rules are written with small constructor helpers:
//!
//! ```rust
//! use dmmix::text::{ChunkLabel, ChunkRule, Disposition, Piece, PosTag};
//!
//! // {<TO><VB><MIN>}
//! let rule = ChunkRule::new(
//!     ChunkLabel::ToAsk,
//!     vec![
//!         Piece::tag(PosTag::To),
//!         Piece::tag(PosTag::BaseVerb),
//!         Piece::chunk(ChunkLabel::Min),
//!     ],
//!     Disposition::Drop,
//! );
//! assert!(!rule.anchored);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::chunker::ChunkNode;
use super::tagger::PosTag;

/// Label of a chunk produced by the question grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChunkLabel {
    /// Appositive "X of Y" phrase, e.g. "the Minister for Finance".
    Min,
    /// "X asked the Minister of Y" preamble.
    Ask1,
    /// "X asked" without a recognisable addressee.
    MaybeAsk1,
    /// "The ... asked in the ... of Y" institutional preamble.
    Ask2,
    /// "to ask the Minister of Y".
    ToAsk,
}

impl ChunkLabel {
    /// Upper-case name used when printing chunk trees.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Min => "MIN",
            Self::Ask1 => "ASK1",
            Self::MaybeAsk1 => "MAYBEASK1",
            Self::Ask2 => "ASK2",
            Self::ToAsk => "TOASK",
        }
    }
}

impl fmt::Display for ChunkLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a single pattern position accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// A token with exactly this tag.
    Tag(PosTag),
    /// A chunk built earlier with this label.
    Chunk(ChunkLabel),
}

impl Matcher {
    /// Whether `node` satisfies the matcher.
    pub fn matches(self, node: &ChunkNode) -> bool {
        match (self, node) {
            (Self::Tag(tag), ChunkNode::Leaf(token)) => token.tag == tag,
            (Self::Chunk(label), ChunkNode::Chunk { label: l, .. }) => *l == label,
            _ => false,
        }
    }
}

/// Repetition of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Exactly once.
    Once,
    /// `?`
    Optional,
    /// `+`
    OneOrMore,
    /// `*`
    ZeroOrMore,
}

/// Matched element: one node, or a group of pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// One node.
    Atom(Matcher),
    /// A parenthesized subsequence.
    Group(Vec<Piece>),
}

/// An element with its repetition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// What is matched.
    pub element: Element,
    /// How many times.
    pub repeat: Repeat,
}

impl Piece {
    /// `<TAG>`
    pub fn tag(tag: PosTag) -> Self {
        Self::atom(Matcher::Tag(tag), Repeat::Once)
    }

    /// `<LABEL>` (a chunk from an earlier rule).
    pub fn chunk(label: ChunkLabel) -> Self {
        Self::atom(Matcher::Chunk(label), Repeat::Once)
    }

    /// A group of pieces, matched once.
    pub fn group(pieces: Vec<Piece>) -> Self {
        Self {
            element: Element::Group(pieces),
            repeat: Repeat::Once,
        }
    }

    fn atom(matcher: Matcher, repeat: Repeat) -> Self {
        Self {
            element: Element::Atom(matcher),
            repeat,
        }
    }

    /// `?`
    pub fn optional(mut self) -> Self {
        self.repeat = Repeat::Optional;
        self
    }

    /// `+`
    pub fn one_or_more(mut self) -> Self {
        self.repeat = Repeat::OneOrMore;
        self
    }

    /// `*`
    pub fn zero_or_more(mut self) -> Self {
        self.repeat = Repeat::ZeroOrMore;
        self
    }
}

/// A word that, when present in a chunk with one of the given tags, flips its
/// disposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// Exact surface form.
    pub word: &'static str,
    /// Accepted tags.
    pub tags: &'static [PosTag],
}

impl Marker {
    /// Whether `node` or any token nested in it is the marker.
    pub fn occurs_in(&self, node: &ChunkNode) -> bool {
        node.leaves()
            .any(|t| t.text == self.word && self.tags.contains(&t.tag))
    }
}

/// What happens to the tokens of a matched chunk during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Keep every token.
    Keep,
    /// Drop every token.
    Drop,
    /// Keep the tokens unless the marker occurs in the chunk.
    KeepUnless(Marker),
}

/// One chunking stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkRule {
    /// Label given to matched spans.
    pub label: ChunkLabel,
    /// Only match at the start of the text.
    pub anchored: bool,
    /// Sequence to match.
    pub pattern: Vec<Piece>,
    /// Extraction policy for matched spans.
    pub disposition: Disposition,
}

impl ChunkRule {
    /// Unanchored rule.
    pub fn new(label: ChunkLabel, pattern: Vec<Piece>, disposition: Disposition) -> Self {
        Self {
            label,
            anchored: false,
            pattern,
            disposition,
        }
    }

    /// Restrict the rule to the start of the text (`^`).
    pub fn anchored(mut self) -> Self {
        self.anchored = true;
        self
    }
}

/// Ordered chunk rules; earlier rules run first and later rules see their chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    rules: Vec<ChunkRule>,
}

/// "Minister" as a proper noun.
pub const MINISTER: Marker = Marker {
    word: "Minister",
    tags: &[PosTag::ProperNoun, PosTag::ProperNounPlural],
};

/// "asked" as a past-tense verb.
pub const ASKED: Marker = Marker {
    word: "asked",
    tags: &[PosTag::PastTenseVerb],
};

impl Grammar {
    /// Grammar from explicit rules.
    pub fn new(rules: Vec<ChunkRule>) -> Self {
        Self { rules }
    }

    /// The rules, in application order.
    pub fn rules(&self) -> &[ChunkRule] {
        &self.rules
    }

    /// Disposition of chunks with `label` (the first rule producing it wins).
    pub fn disposition(&self, label: ChunkLabel) -> Disposition {
        self.rules
            .iter()
            .find(|r| r.label == label)
            .map_or(Disposition::Keep, |r| r.disposition)
    }

    /// Grammar that strips the boilerplate preamble of parliamentary questions.
    ///
    /// ```text
    /// MIN:       {<DT>?<NNP><IN><DT>?<NNP>+(<,><NNP>+)*(<CC><NNP>+)?}
    /// ASK1:      {^<NNP>+<VBD><MIN>(<CC><MIN>)?}
    /// MAYBEASK1: {^<NNP>+<VBD>}
    /// ASK2:      {^<DT><JJ><NN><VBD><IN><DT><NN><IN><NNP>+}
    /// TOASK:     {<TO><VB><MIN>}
    /// ```
    pub fn question_boilerplate() -> Self {
        use PosTag::*;

        let nnp_run = || Piece::tag(ProperNoun).one_or_more();

        let min = ChunkRule::new(
            ChunkLabel::Min,
            vec![
                Piece::tag(Determiner).optional(),
                Piece::tag(ProperNoun),
                Piece::tag(Preposition),
                Piece::tag(Determiner).optional(),
                nnp_run(),
                Piece::group(vec![Piece::tag(Comma), nnp_run()]).zero_or_more(),
                Piece::group(vec![Piece::tag(CoordinatingConjunction), nnp_run()]).optional(),
            ],
            Disposition::KeepUnless(MINISTER),
        );

        let ask1 = ChunkRule::new(
            ChunkLabel::Ask1,
            vec![
                nnp_run(),
                Piece::tag(PastTenseVerb),
                Piece::chunk(ChunkLabel::Min),
                Piece::group(vec![
                    Piece::tag(CoordinatingConjunction),
                    Piece::chunk(ChunkLabel::Min),
                ])
                .optional(),
            ],
            Disposition::Drop,
        )
        .anchored();

        let maybe_ask1 = ChunkRule::new(
            ChunkLabel::MaybeAsk1,
            vec![nnp_run(), Piece::tag(PastTenseVerb)],
            Disposition::KeepUnless(ASKED),
        )
        .anchored();

        let ask2 = ChunkRule::new(
            ChunkLabel::Ask2,
            vec![
                Piece::tag(Determiner),
                Piece::tag(Adjective),
                Piece::tag(Noun),
                Piece::tag(PastTenseVerb),
                Piece::tag(Preposition),
                Piece::tag(Determiner),
                Piece::tag(Noun),
                Piece::tag(Preposition),
                nnp_run(),
            ],
            Disposition::Drop,
        )
        .anchored();

        let to_ask = ChunkRule::new(
            ChunkLabel::ToAsk,
            vec![
                Piece::tag(To),
                Piece::tag(BaseVerb),
                Piece::chunk(ChunkLabel::Min),
            ],
            Disposition::Drop,
        );

        Self::new(vec![min, ask1, maybe_ask1, ask2, to_ask])
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::question_boilerplate()
    }
}
