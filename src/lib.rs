//! SM-2 spaced repetition scheduling for flashcards.
//!
//! Three pure operations make up the core:
//! - [`compute_next_review`]: next scheduling state after one answer
//! - [`select_due`]: the items due on the calendar day of a reference instant
//! - [`project_review_date`]: reference instant plus N calendar days
//!
//! Callers own storage and supply the reference instant (usually "now").

pub mod config;
pub mod error;
pub mod models;

pub use config::SchedulerConfig;
pub use error::{Result, SchedulerError};
pub use models::{
    Difficulty, Flashcard, FlashcardSet, IntervalPreview, ResponseQuality, ReviewState, Reviewable,
    Scheduler, compute_next_review, preview_intervals, project_review_date, select_due,
};
