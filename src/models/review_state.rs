//! Scheduling metadata attached to one reviewable card.
use crate::config::SchedulerConfig;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    pub interval_days: u32,
    /// Consecutive successful recalls since the last lapse
    pub repetitions: u32,
    pub easiness_factor: f64,
    pub next_review_at: DateTime<Utc>,
}

impl ReviewState {
    /// Default state for a newly introduced card; it is due right away.
    pub fn new<Tz: TimeZone>(created_at: &DateTime<Tz>) -> Self {
        Self::with_config(created_at, &SchedulerConfig::default())
    }

    pub fn with_config<Tz: TimeZone>(created_at: &DateTime<Tz>, config: &SchedulerConfig) -> Self {
        Self {
            interval_days: config.first_interval_days,
            repetitions: 0,
            easiness_factor: config.initial_easiness,
            next_review_at: created_at.with_timezone(&Utc),
        }
    }

    /// Returns a copy with sub-floor easiness and a zero interval clamped
    /// back into range. Stored data can be hand-edited or come from an older
    /// scheduler, so the calculator runs every input through this first.
    pub fn sanitized(&self, config: &SchedulerConfig) -> Self {
        let mut state = self.clone();

        // `max` also replaces NaN with the floor.
        let easiness = state.easiness_factor.max(config.minimum_easiness);
        if easiness != state.easiness_factor {
            tracing::warn!(
                easiness = state.easiness_factor,
                floor = config.minimum_easiness,
                "Clamping easiness factor below floor"
            );
            state.easiness_factor = easiness;
        }

        if state.interval_days == 0 {
            tracing::warn!("Clamping zero interval to 1 day");
            state.interval_days = 1;
        }

        state
    }

    /// Whether this state is due on the calendar day of `reference`.
    pub fn is_due<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> bool {
        super::due::is_due_on(&self.next_review_at, reference)
    }
}
