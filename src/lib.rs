pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::csv_store;
pub use config::{CliConfig, Command};
pub use crate::core::stats::{compute_group_stats, sort_students, top_students, SortStrategy};
pub use domain::model::{GroupStats, Student};
pub use domain::roster::Roster;
pub use utils::error::{AppError, DataSourceError, Result, ValidationError};
