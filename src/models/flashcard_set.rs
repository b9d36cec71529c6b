//! FlashcardSet is a titled collection of flashcards
use super::{Flashcard, ResponseQuality, select_due};
use crate::error::{Result, SchedulerError};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardSet {
    pub id: String,
    pub title: String,
    pub description: String,
    pub topic: String,
    pub is_public: bool,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub cards: Vec<Flashcard>,
}

impl FlashcardSet {
    pub fn due_cards<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> Vec<&Flashcard> {
        select_due(&self.cards, reference)
    }

    pub fn due_count<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> usize {
        self.due_cards(reference).len()
    }

    /// Returns a new set in which only the card with `card_id` has been reviewed.
    pub fn review_card<Tz: TimeZone>(
        &self,
        card_id: &str,
        response: ResponseQuality,
        reference: &DateTime<Tz>,
    ) -> Result<Self> {
        let index = self
            .cards
            .iter()
            .position(|card| card.id == card_id)
            .ok_or_else(|| SchedulerError::CardNotFound(card_id.to_string()))?;

        let mut updated = self.clone();
        updated.cards[index] = self.cards[index].review(response, reference);
        Ok(updated)
    }
}
