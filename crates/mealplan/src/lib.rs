mod calendar;
mod day_bucket;
mod plan;
mod types;

pub use calendar::*;
pub use day_bucket::*;
pub use plan::*;
pub use types::*;
