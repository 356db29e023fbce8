//! Token interning for the sampler.
//!
//! Documents arrive as token strings; the sampler works on dense `u32` ids so
//! per-cluster word counts stay small and hash quickly.

use rustc_hash::FxHashMap;

/// Interned vocabulary: token string <-> dense id, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    index: FxHashMap<String, u32>,
    tokens: Vec<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern every distinct token across `documents`.
    ///
    /// `len()` of the result is the vocabulary size to pass to
    /// [`Gsdmm::fit`](super::Gsdmm::fit).
    pub fn from_documents<D, S>(documents: &[D]) -> Self
    where
        D: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut vocab = Self::new();
        for doc in documents {
            for token in doc.as_ref() {
                vocab.intern(token.as_ref());
            }
        }
        vocab
    }

    /// Return the id of `token`, adding it if unseen.
    pub fn intern(&mut self, token: &str) -> u32 {
        if let Some(&id) = self.index.get(token) {
            return id;
        }
        let id = self.tokens.len() as u32;
        self.index.insert(token.to_owned(), id);
        self.tokens.push(token.to_owned());
        id
    }

    /// Look up the id of a token without interning it.
    pub fn id(&self, token: &str) -> Option<u32> {
        self.index.get(token).copied()
    }

    /// Token string for an id.
    pub fn token(&self, id: u32) -> Option<&str> {
        self.tokens.get(id as usize).map(String::as_str)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no token has been interned.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Encode a token sequence, interning unseen tokens.
    pub(crate) fn encode<S: AsRef<str>>(&mut self, document: &[S]) -> EncodedDocument {
        let ids = document.iter().map(|t| self.intern(t.as_ref())).collect();
        EncodedDocument::from_ids(ids)
    }
}

/// A document as token ids, plus, for each position, how many times the same
/// token already occurred earlier in the document.
///
/// The repeat counts let the likelihood of a document be scored token by token
/// against running counts without recomputing them for every cluster.
#[derive(Debug, Clone, Default)]
pub struct EncodedDocument {
    ids: Vec<u32>,
    repeats: Vec<u32>,
}

impl EncodedDocument {
    pub(crate) fn from_ids(ids: Vec<u32>) -> Self {
        let mut seen: FxHashMap<u32, u32> = FxHashMap::default();
        let repeats = ids
            .iter()
            .map(|&id| {
                let count = seen.entry(id).or_insert(0);
                let before = *count;
                *count += 1;
                before
            })
            .collect();
        Self { ids, repeats }
    }

    /// Token ids in document order.
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Earlier occurrences of the token at each position.
    pub fn repeats(&self) -> &[u32] {
        &self.repeats
    }

    /// Number of tokens (with repetition).
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the document has no tokens.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
