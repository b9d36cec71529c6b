//! Due-card selection at calendar-day granularity.
//!
//! A card due at any time today stays due for the whole day, so both sides
//! are compared as calendar dates in the reference instant's zone.

use super::{Flashcard, ReviewState};
use chrono::{DateTime, TimeZone, Utc};

/// Anything that carries a next-review instant.
pub trait Reviewable {
    fn next_review_at(&self) -> DateTime<Utc>;
}

impl Reviewable for ReviewState {
    fn next_review_at(&self) -> DateTime<Utc> {
        self.next_review_at
    }
}

impl Reviewable for Flashcard {
    fn next_review_at(&self) -> DateTime<Utc> {
        self.review.next_review_at
    }
}

impl<T: Reviewable + ?Sized> Reviewable for &T {
    fn next_review_at(&self) -> DateTime<Utc> {
        (**self).next_review_at()
    }
}

/// True when `next_review_at` falls on or before the calendar day of `reference`.
pub(crate) fn is_due_on<Tz: TimeZone>(next_review_at: &DateTime<Utc>, reference: &DateTime<Tz>) -> bool {
    let due_day = next_review_at.with_timezone(&reference.timezone()).date_naive();
    due_day <= reference.date_naive()
}

/// Returns the items due on the day of `reference`, in input order.
pub fn select_due<'a, T, I, Tz>(items: I, reference: &DateTime<Tz>) -> Vec<&'a T>
where
    T: Reviewable + 'a,
    I: IntoIterator<Item = &'a T>,
    Tz: TimeZone,
{
    let due: Vec<&'a T> = items
        .into_iter()
        .filter(|item| is_due_on(&item.next_review_at(), reference))
        .collect();

    tracing::debug!(due = due.len(), "Selected due items");
    due
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};
    use chrono_tz::America::New_York;

    fn state_due_at(at: DateTime<Utc>) -> ReviewState {
        ReviewState {
            next_review_at: at,
            ..ReviewState::new(&at)
        }
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<ReviewState> = Vec::new();
        let now = Utc.with_ymd_and_hms(2024, 1, 25, 12, 0, 0).unwrap();
        assert!(select_due(&items, &now).is_empty());
    }

    #[test]
    fn test_start_of_reference_day_is_due() {
        let now = Utc.with_ymd_and_hms(2024, 1, 25, 17, 45, 0).unwrap();
        let midnight = Utc.with_ymd_and_hms(2024, 1, 25, 0, 0, 0).unwrap();
        let items = vec![state_due_at(midnight)];
        assert_eq!(select_due(&items, &now).len(), 1);
    }

    #[test]
    fn test_later_today_is_due() {
        // Due at 23:59 but asked at 00:01 the same day.
        let now = Utc.with_ymd_and_hms(2024, 1, 25, 0, 1, 0).unwrap();
        let items = vec![state_due_at(Utc.with_ymd_and_hms(2024, 1, 25, 23, 59, 0).unwrap())];
        assert_eq!(select_due(&items, &now).len(), 1);
    }

    #[test]
    fn test_next_day_is_not_due() {
        let now = Utc.with_ymd_and_hms(2024, 1, 25, 23, 59, 59).unwrap();
        let tomorrow = Utc.with_ymd_and_hms(2024, 1, 26, 0, 0, 0).unwrap();
        let items = vec![state_due_at(tomorrow)];
        assert!(select_due(&items, &now).is_empty());
    }

    #[test]
    fn test_overdue_items_stay_due() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let items = vec![state_due_at(now - Duration::days(40))];
        assert_eq!(select_due(&items, &now).len(), 1);
    }

    #[test]
    fn test_preserves_input_order() {
        let now = Utc.with_ymd_and_hms(2024, 1, 25, 12, 0, 0).unwrap();
        let items = vec![
            state_due_at(now - Duration::days(1)),
            state_due_at(now + Duration::days(3)),
            state_due_at(now - Duration::days(10)),
            state_due_at(now),
        ];

        let due = select_due(&items, &now);
        assert_eq!(due.len(), 3);
        assert!(std::ptr::eq(due[0], &items[0]));
        assert!(std::ptr::eq(due[1], &items[2]));
        assert!(std::ptr::eq(due[2], &items[3]));
    }

    #[test]
    fn test_day_boundary_uses_reference_zone() {
        // 2024-01-25T20:00Z is already 2024-01-26 in UTC+9.
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let items = vec![state_due_at(Utc.with_ymd_and_hms(2024, 1, 25, 20, 0, 0).unwrap())];

        let morning_26th = tokyo.with_ymd_and_hms(2024, 1, 26, 1, 0, 0).unwrap();
        assert_eq!(select_due(&items, &morning_26th).len(), 1);

        let evening_25th = tokyo.with_ymd_and_hms(2024, 1, 25, 22, 0, 0).unwrap();
        assert!(select_due(&items, &evening_25th).is_empty());
    }

    #[test]
    fn test_day_boundary_across_dst_transitions() {
        // Spring forward: 2024-03-10 is a 23-hour day in New York.
        let just_after_midnight = New_York.with_ymd_and_hms(2024, 3, 10, 0, 30, 0).unwrap();
        let late_same_day = New_York.with_ymd_and_hms(2024, 3, 10, 23, 30, 0).unwrap();
        let next_day = New_York.with_ymd_and_hms(2024, 3, 11, 0, 30, 0).unwrap();
        let items = vec![
            state_due_at(late_same_day.with_timezone(&Utc)),
            state_due_at(next_day.with_timezone(&Utc)),
        ];
        let due = select_due(&items, &just_after_midnight);
        assert_eq!(due.len(), 1);
        assert!(std::ptr::eq(due[0], &items[0]));

        // Fall back: 2024-11-03 is a 25-hour day.
        let early = New_York.with_ymd_and_hms(2024, 11, 3, 0, 15, 0).unwrap();
        let last_minute = New_York.with_ymd_and_hms(2024, 11, 3, 23, 59, 0).unwrap();
        let following = New_York.with_ymd_and_hms(2024, 11, 4, 0, 0, 0).unwrap();
        let items = vec![
            state_due_at(last_minute.with_timezone(&Utc)),
            state_due_at(following.with_timezone(&Utc)),
        ];
        assert_eq!(select_due(&items, &early).len(), 1);
        assert_eq!(select_due(&items, &last_minute).len(), 1);
        assert_eq!(select_due(&items, &following).len(), 2);
    }

    #[test]
    fn test_accepts_references_to_items() {
        let now = Utc.with_ymd_and_hms(2024, 1, 25, 12, 0, 0).unwrap();
        let a = state_due_at(now);
        let b = state_due_at(now + Duration::days(2));
        let refs = vec![&a, &b];
        let due = select_due(&refs, &now);
        assert_eq!(due.len(), 1);
        assert!(std::ptr::eq(*due[0], &a));
    }
}
