//! Cascaded chunking over tagged tokens.
//!
//! Each [`ChunkRule`] of a [`Grammar`] runs as its own stage over the output of
//! the previous stage. Within a stage, spans are found left to right: at each
//! position the longest match wins and scanning resumes after it, so spans never
//! overlap. Chunks from earlier stages are single nodes to later stages and can
//! only be matched whole, by label.

use std::fmt;

use super::grammar::{ChunkLabel, ChunkRule, Element, Grammar, Piece, Repeat};
use super::tagger::TaggedToken;

/// Node of a chunk tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkNode {
    /// A token outside any chunk (at this level).
    Leaf(TaggedToken),
    /// A labelled span.
    Chunk {
        /// Rule label.
        label: ChunkLabel,
        /// Covered nodes, in order.
        children: Vec<ChunkNode>,
    },
}

impl ChunkNode {
    /// All tokens under this node, left to right.
    pub fn leaves(&self) -> Box<dyn Iterator<Item = &TaggedToken> + '_> {
        match self {
            Self::Leaf(token) => Box::new(std::iter::once(token)),
            Self::Chunk { children, .. } => Box::new(children.iter().flat_map(ChunkNode::leaves)),
        }
    }

    /// Label of a chunk node.
    pub fn label(&self) -> Option<ChunkLabel> {
        match self {
            Self::Leaf(_) => None,
            Self::Chunk { label, .. } => Some(*label),
        }
    }
}

impl fmt::Display for ChunkNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(token) => write!(f, "{token}"),
            Self::Chunk { label, children } => {
                write!(f, "({label}")?;
                for child in children {
                    write!(f, " {child}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Applies a [`Grammar`] to tagged tokens.
#[derive(Debug, Clone, Default)]
pub struct Chunker {
    grammar: Grammar,
}

impl Chunker {
    /// Create a chunker for `grammar`.
    pub fn new(grammar: Grammar) -> Self {
        Self { grammar }
    }

    /// The grammar being applied.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Chunk a tagged sentence. Returns the top level of the tree.
    pub fn parse(&self, tokens: Vec<TaggedToken>) -> Vec<ChunkNode> {
        let mut nodes: Vec<ChunkNode> = tokens.into_iter().map(ChunkNode::Leaf).collect();
        for rule in self.grammar.rules() {
            nodes = apply_rule(rule, nodes);
        }
        nodes
    }
}

fn apply_rule(rule: &ChunkRule, nodes: Vec<ChunkNode>) -> Vec<ChunkNode> {
    let spans = find_spans(rule, &nodes);
    if spans.is_empty() {
        return nodes;
    }

    let mut out: Vec<ChunkNode> = Vec::with_capacity(nodes.len());
    let mut rest = nodes.into_iter();
    let mut consumed = 0;
    for (start, end) in spans {
        out.extend(rest.by_ref().take(start - consumed));
        let children: Vec<ChunkNode> = rest.by_ref().take(end - start).collect();
        out.push(ChunkNode::Chunk {
            label: rule.label,
            children,
        });
        consumed = end;
    }
    out.extend(rest);
    out
}

/// Non-overlapping `(start, end)` spans matched by `rule`.
fn find_spans(rule: &ChunkRule, nodes: &[ChunkNode]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut i = 0;
    while i < nodes.len() {
        if rule.anchored && i > 0 {
            break;
        }
        match longest_match(&rule.pattern, nodes, i) {
            Some(end) if end > i => {
                spans.push((i, end));
                i = end;
            }
            _ => i += 1,
        }
    }
    spans
}

fn longest_match(pattern: &[Piece], nodes: &[ChunkNode], start: usize) -> Option<usize> {
    let mut ends = Vec::new();
    sequence_ends(pattern, nodes, start, &mut ends);
    ends.into_iter().max()
}

/// Every position where `pieces` can finish when started at `start`.
fn sequence_ends(pieces: &[Piece], nodes: &[ChunkNode], start: usize, out: &mut Vec<usize>) {
    let Some((first, rest)) = pieces.split_first() else {
        out.push(start);
        return;
    };
    for mid in piece_ends(first, nodes, start) {
        sequence_ends(rest, nodes, mid, out);
    }
}

fn piece_ends(piece: &Piece, nodes: &[ChunkNode], start: usize) -> Vec<usize> {
    let mut ends = match piece.repeat {
        Repeat::Once => element_ends(&piece.element, nodes, start),
        Repeat::Optional => {
            let mut ends = element_ends(&piece.element, nodes, start);
            ends.push(start);
            ends
        }
        Repeat::OneOrMore | Repeat::ZeroOrMore => {
            let mut reached = Vec::new();
            if piece.repeat == Repeat::ZeroOrMore {
                reached.push(start);
            }
            let mut frontier = vec![start];
            while !frontier.is_empty() {
                let mut next = Vec::new();
                for from in frontier {
                    for end in element_ends(&piece.element, nodes, from) {
                        // Zero-width iterations cannot make progress.
                        if end > from && !reached.contains(&end) {
                            reached.push(end);
                            next.push(end);
                        }
                    }
                }
                frontier = next;
            }
            reached
        }
    };
    ends.sort_unstable();
    ends.dedup();
    ends
}

fn element_ends(element: &Element, nodes: &[ChunkNode], start: usize) -> Vec<usize> {
    match element {
        Element::Atom(matcher) => match nodes.get(start) {
            Some(node) if matcher.matches(node) => vec![start + 1],
            _ => Vec::new(),
        },
        Element::Group(pieces) => {
            let mut ends = Vec::new();
            sequence_ends(pieces, nodes, start, &mut ends);
            ends
        }
    }
}
