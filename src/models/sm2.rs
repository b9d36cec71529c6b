//! SM-2 (SuperMemo 2) spaced repetition algorithm implementation.
//!
//! The SM-2 algorithm calculates review intervals from the learner's answer:
//! - Each card has an easiness factor (EF) that adjusts on every successful recall
//! - `Again` is a lapse: repetitions reset to 0 and the interval to 1 day, EF is kept
//! - `Hard`/`Good`/`Easy` map to quality 3/4/5 and grow the interval (1 day → 6 days → EF multiplier)
//! - EF has a minimum value of 1.3
//!
//! The reference instant is always passed in, so every function here is pure.

use super::review_date::project_review_date;
use super::{ResponseQuality, ReviewState, Reviewable};
use crate::config::SchedulerConfig;
use crate::error::Result;
use chrono::{DateTime, TimeZone, Utc};

/// Interval in days that each answer would produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntervalPreview {
    pub again: u32,
    pub hard: u32,
    pub good: u32,
    pub easy: u32,
}

impl IntervalPreview {
    pub fn get(&self, response: ResponseQuality) -> u32 {
        match response {
            ResponseQuality::Again => self.again,
            ResponseQuality::Hard => self.hard,
            ResponseQuality::Good => self.good,
            ResponseQuality::Easy => self.easy,
        }
    }
}

/// SM-2 scheduler bound to one set of constants.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    pub fn new(config: SchedulerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Calculates the state after one review.
    /// `reference` is the instant of the review; `next_review_at` is projected from it.
    pub fn next_review<Tz: TimeZone>(
        &self,
        state: &ReviewState,
        response: ResponseQuality,
        reference: &DateTime<Tz>,
    ) -> ReviewState {
        let state = state.sanitized(&self.config);

        let (interval_days, repetitions, easiness_factor) = match response.quality_score() {
            // Lapse: start over, easiness untouched
            None => (self.config.lapse_interval_days, 0, state.easiness_factor),
            Some(quality) => {
                let repetitions = state.repetitions.saturating_add(1);
                let easiness = self.updated_easiness(state.easiness_factor, quality);
                let interval = match repetitions {
                    1 => self.config.first_interval_days,
                    2 => self.config.second_interval_days,
                    // Prior interval times the updated EF
                    _ => grow_interval(state.interval_days, easiness),
                };
                (interval, repetitions, easiness)
            }
        };

        let next_review_at = project_review_date(interval_days, reference).with_timezone(&Utc);

        tracing::debug!(
            %response,
            repetitions,
            interval_days,
            easiness_factor,
            "Calculated next review"
        );

        ReviewState {
            interval_days,
            repetitions,
            easiness_factor,
            next_review_at,
        }
    }

    /// Interval each of the four answers would give, without committing any.
    pub fn preview<Tz: TimeZone>(&self, state: &ReviewState, reference: &DateTime<Tz>) -> IntervalPreview {
        let interval = |response| self.next_review(state, response, reference).interval_days;
        IntervalPreview {
            again: interval(ResponseQuality::Again),
            hard: interval(ResponseQuality::Hard),
            good: interval(ResponseQuality::Good),
            easy: interval(ResponseQuality::Easy),
        }
    }

    /// Same as [`select_due`](super::select_due); the due rule does not depend on config.
    pub fn select_due<'a, T, I, Tz>(&self, items: I, reference: &DateTime<Tz>) -> Vec<&'a T>
    where
        T: Reviewable + 'a,
        I: IntoIterator<Item = &'a T>,
        Tz: TimeZone,
    {
        super::due::select_due(items, reference)
    }

    // EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02)), floored
    fn updated_easiness(&self, easiness: f64, quality: u8) -> f64 {
        let distance = 5.0 - f64::from(quality);
        let new_ef = easiness + (0.1 - distance * (0.08 + distance * 0.02));
        new_ef.max(self.config.minimum_easiness)
    }
}

/// Rounds half away from zero; never below one day.
fn grow_interval(previous_days: u32, easiness: f64) -> u32 {
    let grown = (f64::from(previous_days) * easiness).round();
    // `as` saturates at u32::MAX for out-of-range floats.
    (grown as u32).max(1)
}

/// Next state using the default SM-2 constants.
pub fn compute_next_review<Tz: TimeZone>(
    state: &ReviewState,
    response: ResponseQuality,
    reference: &DateTime<Tz>,
) -> ReviewState {
    Scheduler::default().next_review(state, response, reference)
}

/// Interval preview using the default SM-2 constants.
pub fn preview_intervals<Tz: TimeZone>(state: &ReviewState, reference: &DateTime<Tz>) -> IntervalPreview {
    Scheduler::default().preview(state, reference)
}
