//! Text tokenizers
//!
//! Provides the `Tokenizer` trait and implementations for splitting text into
//! tokens for diffing. Tokenization here is lossless: every character of the
//! input belongs to exactly one token, so concatenating the token texts in
//! order reproduces the input byte-for-byte.

use serde::{Deserialize, Serialize};

/// Classification of the characters making up a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Letters, digits, and intra-word punctuation (apostrophes, hyphens)
    Word,
    /// A run of whitespace characters
    Whitespace,
    /// A run of any other non-word characters
    Punctuation,
}

/// Represents a single token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token text, sliced verbatim from the source
    pub text: String,

    /// Classification of this token's characters
    pub kind: TokenKind,

    /// Token index in its source sequence
    pub index: usize,
}

impl Token {
    /// Create a new token
    pub fn new(text: String, kind: TokenKind, index: usize) -> Self {
        Self { text, kind, index }
    }

    /// Whether this token is composed purely of non-word characters
    pub fn is_separator(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Punctuation)
    }
}

/// Trait for tokenizers that split text into tokens
pub trait Tokenizer: Send + Sync {
    /// Tokenize the input text
    ///
    /// Implementations must be pure and deterministic, and must be lossless:
    /// concatenating the returned token texts in order reproduces `text`
    /// exactly.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Get the name of this tokenizer
    fn name(&self) -> &str;

    /// Clone this tokenizer into a Box
    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

// Implement Clone for Box<dyn Tokenizer>
impl Clone for Box<dyn Tokenizer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

// ============================================================================
// Built-in Tokenizers
// ============================================================================

/// Word tokenizer (the default for prose diffing)
///
/// Emits maximal runs of same-class characters: words (letters, digits, and
/// the intra-word set `'`/`-`), whitespace runs, and punctuation runs each
/// become one token.
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current_start = 0;
        let mut current_kind: Option<TokenKind> = None;

        for (pos, ch) in text.char_indices() {
            let kind = classify_char(ch);

            match current_kind {
                None => {
                    current_start = pos;
                    current_kind = Some(kind);
                }
                Some(prev) if prev == kind => {
                    // Continue current token
                }
                Some(prev) => {
                    tokens.push(Token::new(
                        text[current_start..pos].to_string(),
                        prev,
                        tokens.len(),
                    ));
                    current_start = pos;
                    current_kind = Some(kind);
                }
            }
        }

        // Emit final token
        if let Some(kind) = current_kind {
            tokens.push(Token::new(
                text[current_start..].to_string(),
                kind,
                tokens.len(),
            ));
        }

        tokens
    }

    fn name(&self) -> &str {
        "word"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Character-level tokenizer (splits into individual characters)
///
/// Finest alignment granularity; useful when single-character edits should
/// not mark the whole surrounding word as changed.
#[derive(Debug, Clone, Default)]
pub struct CharacterTokenizer;

impl CharacterTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for CharacterTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.chars()
            .enumerate()
            .map(|(index, ch)| Token::new(ch.to_string(), classify_char(ch), index))
            .collect()
    }

    fn name(&self) -> &str {
        "character"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Characters that belong to a word without being alphanumeric
const INTRA_WORD: [char; 2] = ['\'', '-'];

fn classify_char(ch: char) -> TokenKind {
    if ch.is_whitespace() {
        TokenKind::Whitespace
    } else if ch.is_alphanumeric() || INTRA_WORD.contains(&ch) {
        TokenKind::Word
    } else {
        TokenKind::Punctuation
    }
}
