pub mod config;
pub mod day;
pub mod days;
pub mod error;
pub mod heap;
pub mod parallel;
pub mod util;

pub use config::RunConfig;
pub use day::Day;
pub use error::{DayError, MapError};
pub use heap::PriorityQueue;
pub use parallel::{parallel_map, CancelToken};
