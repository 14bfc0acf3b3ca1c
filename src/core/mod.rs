pub mod controller;
pub mod form;

pub use controller::{SessionController, SessionPhase};
pub use form::WorkoutForm;
