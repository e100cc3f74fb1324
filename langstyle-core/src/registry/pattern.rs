//! Single-character matchers used by language entries

use regex::Regex;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Inclusive code-point block `[start, end]`
pub type Block = [u32; 2];

/// Set of characters described by code-point blocks and explicit characters
///
/// Almost every language needs between one and three blocks, so the blocks
/// are stored inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    blocks: SmallVec<[Block; 4]>,
    /// Sorted and deduplicated for binary search
    chars: Vec<char>,
}

impl CharSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from code-point blocks
    pub fn from_blocks(blocks: impl IntoIterator<Item = Block>) -> Self {
        Self {
            blocks: blocks.into_iter().collect(),
            chars: Vec::new(),
        }
    }

    /// Add an inclusive character range
    pub fn with_range(mut self, start: char, end: char) -> Self {
        self.blocks.push([start as u32, end as u32]);
        self
    }

    /// Add every character of `chars`
    pub fn with_chars(mut self, chars: &str) -> Self {
        self.chars.extend(chars.chars());
        self.chars.sort_unstable();
        self.chars.dedup();
        self
    }

    /// Code-point blocks of this set
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Explicit characters of this set, sorted
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Whether the set matches nothing
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.chars.is_empty()
    }

    /// Check membership of a character
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        let cp = ch as u32;
        self.blocks
            .iter()
            .any(|&[start, end]| start <= cp && cp <= end)
            || self.chars.binary_search(&ch).is_ok()
    }
}

/// Predicate signature accepted by [`CharPattern::Predicate`]
pub type CharPredicate = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// Test deciding whether one character belongs to a language
#[derive(Clone)]
pub enum CharPattern {
    /// Block and character set lookup
    Set(CharSet),
    /// Regular expression tested against the one-character string
    Regex(Regex),
    /// Arbitrary predicate
    Predicate(CharPredicate),
}

impl CharPattern {
    /// Pattern matching inclusive code-point blocks
    pub fn blocks(blocks: impl IntoIterator<Item = Block>) -> Self {
        CharPattern::Set(CharSet::from_blocks(blocks))
    }

    /// Pattern matching an inclusive character range
    pub fn range(start: char, end: char) -> Self {
        CharPattern::Set(CharSet::new().with_range(start, end))
    }

    /// Pattern matching any of the given characters
    pub fn chars(chars: &str) -> Self {
        CharPattern::Set(CharSet::new().with_chars(chars))
    }

    /// Compile a regular expression pattern
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(CharPattern::Regex)
    }

    /// Pattern backed by a closure
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        CharPattern::Predicate(Arc::new(f))
    }

    /// Check whether the pattern matches a character
    #[inline]
    pub fn matches(&self, ch: char) -> bool {
        match self {
            CharPattern::Set(set) => set.contains(ch),
            CharPattern::Regex(re) => {
                let mut buf = [0u8; 4];
                re.is_match(ch.encode_utf8(&mut buf))
            }
            CharPattern::Predicate(f) => f(ch),
        }
    }
}

impl From<CharSet> for CharPattern {
    fn from(set: CharSet) -> Self {
        CharPattern::Set(set)
    }
}

impl fmt::Debug for CharPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharPattern::Set(set) => f.debug_tuple("Set").field(set).finish(),
            CharPattern::Regex(re) => f.debug_tuple("Regex").field(&re.as_str()).finish(),
            CharPattern::Predicate(_) => f.debug_tuple("Predicate").field(&"<fn>").finish(),
        }
    }
}
