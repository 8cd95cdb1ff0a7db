#![forbid(unsafe_code)]

pub mod animation;
pub mod error;
pub mod model;
pub mod sequencer;

pub use error::Error;
pub use sequencer::{Affordance, LessonSequencer};
