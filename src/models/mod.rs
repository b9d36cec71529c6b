pub mod due;
pub mod flashcard;
pub mod flashcard_set;
pub mod response_quality;
pub mod review_date;
pub mod review_state;
pub mod sm2;

pub use due::{Reviewable, select_due};
pub use flashcard::{Difficulty, Flashcard};
pub use flashcard_set::FlashcardSet;
pub use response_quality::ResponseQuality;
pub use review_date::project_review_date;
pub use review_state::ReviewState;
pub use sm2::{IntervalPreview, Scheduler, compute_next_review, preview_intervals};
