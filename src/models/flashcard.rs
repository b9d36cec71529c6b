//! Flashcard is a front/back pair that owns its scheduling state.
use super::{ResponseQuality, ReviewState, compute_next_review};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Author-assigned difficulty label. Scheduling never reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: String,
    pub front: String,
    pub back: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub created_at: DateTime<Utc>,
    pub review: ReviewState,
}

impl Flashcard {
    /// New card with default SM-2 state, due on the day it is created.
    pub fn new<Tz: TimeZone>(
        id: impl Into<String>,
        front: impl Into<String>,
        back: impl Into<String>,
        topic: impl Into<String>,
        difficulty: Difficulty,
        created_at: &DateTime<Tz>,
    ) -> Self {
        Self {
            id: id.into(),
            front: front.into(),
            back: back.into(),
            topic: topic.into(),
            difficulty,
            created_at: created_at.with_timezone(&Utc),
            review: ReviewState::new(created_at),
        }
    }

    /// Returns this card with its review state advanced by one answer.
    pub fn review<Tz: TimeZone>(&self, response: ResponseQuality, reference: &DateTime<Tz>) -> Self {
        Self {
            review: compute_next_review(&self.review, response, reference),
            ..self.clone()
        }
    }
}
