use crate::config::ConfigError;
use crate::deck::Card;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to parse deck: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("card at position {0} has an empty id")]
    EmptyId(usize),
    #[error("duplicate card id `{0}`")]
    DuplicateId(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Supplies the ordered cards a deck is built from.
pub trait DeckSource {
    fn load(&self) -> Result<Vec<Card>, DeckError>;
}

/// The five built-in profiles shown when no other source is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticDeckSource;

const DEFAULT_PROFILES: [(&str, &str, &str); 5] = [
    ("1", "Profile 1", "This is an amazing profile!"),
    ("2", "Profile 2", "Discover new connections"),
    ("3", "Profile 3", "Swipe to connect"),
    ("4", "Profile 4", "Meet new people"),
    ("5", "Profile 5", "Find your match"),
];

impl DeckSource for StaticDeckSource {
    fn load(&self) -> Result<Vec<Card>, DeckError> {
        Ok(DEFAULT_PROFILES
            .iter()
            .map(|(id, title, description)| Card::new(*id, *title, *description))
            .collect())
    }
}

/// Cards from a JSON array of `{ "id", "title", "description" }` objects.
#[derive(Clone, Debug)]
pub struct JsonDeckSource {
    text: String,
}

impl JsonDeckSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DeckSource for JsonDeckSource {
    fn load(&self) -> Result<Vec<Card>, DeckError> {
        let cards: Vec<Card> = serde_json::from_str(&self.text)?;
        validate_cards(&cards)?;
        Ok(cards)
    }
}

/// In-memory cards, mostly for tests and embedding hosts.
#[derive(Clone, Debug, Default)]
pub struct VecDeckSource {
    cards: Vec<Card>,
}

impl VecDeckSource {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl DeckSource for VecDeckSource {
    fn load(&self) -> Result<Vec<Card>, DeckError> {
        validate_cards(&self.cards)?;
        Ok(self.cards.clone())
    }
}

/// Card ids must be non-empty and unique within a deck.
pub fn validate_cards(cards: &[Card]) -> Result<(), DeckError> {
    let mut seen = HashSet::with_capacity(cards.len());
    for (i, card) in cards.iter().enumerate() {
        if card.id.trim().is_empty() {
            return Err(DeckError::EmptyId(i));
        }
        if !seen.insert(card.id.as_str()) {
            return Err(DeckError::DuplicateId(card.id.clone()));
        }
    }
    Ok(())
}
