mod live_stats;
mod summary_view;
mod workout_card;

pub use live_stats::{format_duration, LiveStats};
pub use summary_view::SummaryView;
pub use workout_card::WorkoutCard;
