//! Keyword types produced by the tokenizer

/// Part-of-speech class of an extracted word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Other,
}

impl PartOfSpeech {
    /// Map the leading IPADIC feature field (e.g. `名詞`) to a class
    pub fn from_ipadic(pos: &str) -> Self {
        match pos {
            "名詞" => Self::Noun,
            "動詞" => Self::Verb,
            "形容詞" => Self::Adjective,
            _ => Self::Other,
        }
    }

    /// Nouns, verbs and adjectives carry meaning; everything else is dropped
    pub fn is_content_word(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// A word extracted from an inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub surface: String,
    pub pos: PartOfSpeech,
}

impl Keyword {
    /// Create a new keyword
    pub fn new(surface: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            surface: surface.into(),
            pos,
        }
    }

    /// Create a noun keyword
    pub fn noun(surface: impl Into<String>) -> Self {
        Self::new(surface, PartOfSpeech::Noun)
    }
}
