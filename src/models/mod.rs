pub mod coords;
pub mod id;
pub mod kind;
pub mod workout;

pub use coords::Coordinates;
pub use kind::WorkoutKind;
pub use workout::{Workout, WorkoutDetails};
