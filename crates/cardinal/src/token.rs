use cardinal_vocab::{Magnitude, MagnitudeKind, WordClass};

/// A classified word, produced and consumed within a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A unit, teen or tens word (0 to 90).
    Value(u8),
    /// Scales the open group by the factor ("hundred").
    BlockMultiplier(u128),
    /// Closes the open group, scaling it by the factor ("thousand", ...).
    GroupStop(u128),
    /// Carries no value ("and", punctuation, and unknown words when permissive).
    Discard,
}

impl Token {
    /// Short human-readable name of the role this token plays.
    pub fn role(&self) -> &'static str {
        match self {
            Token::Value(_) => "number",
            Token::BlockMultiplier(_) => "block multiplier",
            Token::GroupStop(_) => "group stop",
            Token::Discard => "filler",
        }
    }

    /// The number or factor carried by this token, if any.
    pub fn value(&self) -> Option<u128> {
        match self {
            Token::Value(v) => Some(u128::from(*v)),
            Token::BlockMultiplier(f) | Token::GroupStop(f) => Some(*f),
            Token::Discard => None,
        }
    }
}

impl From<Magnitude> for Token {
    fn from(magnitude: Magnitude) -> Self {
        match magnitude.kind {
            MagnitudeKind::BlockMultiplier => Token::BlockMultiplier(magnitude.value),
            MagnitudeKind::GroupStop => Token::GroupStop(magnitude.value),
        }
    }
}

impl From<WordClass> for Token {
    fn from(class: WordClass) -> Self {
        match class {
            WordClass::Number(value) => Token::Value(value),
            WordClass::Magnitude(magnitude) => Token::from(magnitude),
            WordClass::Filler => Token::Discard,
        }
    }
}
