pub mod stats;

pub use stats::{compute_group_stats, sort_students, top_students, SortStrategy};
