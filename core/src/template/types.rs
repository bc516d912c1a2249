//! template/types.rs
//! Buckets, templates and their construction-time validation.
//!
//! Design notes:
//! - A `Bucket` maps digit values 0..len-1 to words and back. The inverse
//!   map is built eagerly: a duplicate word would silently corrupt decoding,
//!   so duplicates are a construction error, not a decode-time surprise.
//! - Whitespace is the token delimiter of the rendered sentence; a word
//!   containing whitespace could never be recaptured, so it is rejected here.
//! - `Template` pre-compiles its anchored matching pattern and pre-computes
//!   its arbitrary-precision capacity; both are immutable afterwards.

use std::collections::HashMap;
use std::fmt;

use num_bigint::BigUint;
use regex::Regex;

use crate::template::matcher::build_pattern;

/// Finite ordered vocabulary for one sentence slot.
///
/// Words are distinct, non-empty and whitespace-free; the slot digit is the
/// word's position in the original ordering.
#[derive(Debug, Clone)]
pub struct Bucket {
    words: Vec<String>,
    index: HashMap<String, usize>,
}

impl Bucket {
    pub fn new(words: Vec<String>) -> Result<Self, TemplateError> {
        if words.is_empty() {
            return Err(TemplateError::EmptyBucket);
        }

        let mut index = HashMap::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(TemplateError::EmptyWord { digit: i });
            }
            if word.chars().any(char::is_whitespace) {
                return Err(TemplateError::WordContainsWhitespace { word: word.clone() });
            }
            if index.insert(word.clone(), i).is_some() {
                return Err(TemplateError::DuplicateWord { word: word.clone() });
            }
        }

        Ok(Self { words, index })
    }

    /// Vocabulary cardinality (the radix of this slot).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word standing for `digit`, or `None` when out of range.
    pub fn word(&self, digit: usize) -> Option<&str> {
        self.words.get(digit).map(String::as_str)
    }

    /// Inverse lookup: digit value of `word`, or `None` when absent.
    pub fn digit_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }
}

/// Sentence skeleton: literal fragments around word slots.
///
/// `fragments.len() == buckets.len() + 1` always holds; a literal fragment
/// surrounds every slot, including before the first and after the last.
#[derive(Debug, Clone)]
pub struct Template {
    id: u32,
    fragments: Vec<String>,
    buckets: Vec<Bucket>,
    pattern: Regex,
    capacity: BigUint,
}

impl Template {
    pub fn new(
        id: u32,
        fragments: Vec<String>,
        buckets: Vec<Bucket>,
    ) -> Result<Self, TemplateError> {
        if fragments.len() != buckets.len() + 1 {
            return Err(TemplateError::FragmentCountMismatch {
                fragments: fragments.len(),
                buckets: buckets.len(),
            });
        }

        let pattern = build_pattern(&fragments)?;

        let mut capacity = BigUint::from(1u8);
        for bucket in &buckets {
            capacity *= BigUint::from(bucket.len());
        }

        Ok(Self { id, fragments, buckets, pattern, capacity })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn slot_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Number of distinct sentences this template can render:
    /// the product of all bucket sizes.
    pub fn capacity(&self) -> &BigUint {
        &self.capacity
    }

    pub(crate) fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Interleave fragments and words into the rendered sentence.
    pub fn render(&self, words: &[&str]) -> Result<String, TemplateError> {
        if words.len() != self.slot_count() {
            return Err(TemplateError::SlotCountMismatch {
                expected: self.slot_count(),
                actual: words.len(),
            });
        }

        let mut out = String::new();
        for (fragment, word) in self.fragments.iter().zip(words) {
            out.push_str(fragment);
            out.push_str(word);
        }
        out.push_str(&self.fragments[self.slot_count()]);
        Ok(out)
    }
}

#[derive(Debug)]
pub enum TemplateError {
    /// Fragment list must be exactly one longer than the bucket list.
    FragmentCountMismatch { fragments: usize, buckets: usize },

    /// A bucket must hold at least one word.
    EmptyBucket,

    /// Empty words cannot be captured as tokens.
    EmptyWord { digit: usize },

    /// Whitespace is the token delimiter and may not appear inside a word.
    WordContainsWhitespace { word: String },

    /// Duplicate word within one bucket breaks the word -> digit inverse map.
    DuplicateWord { word: String },

    /// Word count handed to `render` does not match the slot count.
    SlotCountMismatch { expected: usize, actual: usize },

    /// Pattern compilation failure with context.
    Pattern(String),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TemplateError::*;
        match self {
            FragmentCountMismatch { fragments, buckets } =>
                write!(f, "fragment count must be buckets + 1: {} fragments, {} buckets",
                       fragments, buckets),
            EmptyBucket =>
                write!(f, "bucket must hold at least one word"),
            EmptyWord { digit } =>
                write!(f, "empty word at digit {}", digit),
            WordContainsWhitespace { word } =>
                write!(f, "word contains whitespace: {:?}", word),
            DuplicateWord { word } =>
                write!(f, "duplicate word in bucket: {:?}", word),
            SlotCountMismatch { expected, actual } =>
                write!(f, "slot count mismatch: expected {}, got {}", expected, actual),
            Pattern(msg) =>
                write!(f, "template pattern error: {}", msg),
        }
    }
}

impl std::error::Error for TemplateError {}
