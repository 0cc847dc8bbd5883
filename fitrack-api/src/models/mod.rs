//! Fitness record types served by list endpoints
//!
//! Each type registers its scalar fields with the paging engine through
//! [`Record`](crate::paging::Record). Field names match the camelCase keys
//! the types serialize to, so clients sort and filter by the names they see
//! in responses.

mod body_weight;
mod equipment;
mod exercise;
mod muscle;
mod workout;

pub use body_weight::{BodyWeight, WeightUnit};
pub use equipment::Equipment;
pub use exercise::{Difficulty, Exercise};
pub use muscle::{Muscle, MuscleGroup};
pub use workout::{Workout, WorkoutSet};
