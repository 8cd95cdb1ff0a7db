mod dialogue;
pub mod script;
mod speaker;
mod step;
pub mod video;

pub use dialogue::DialogueLine;
pub use script::{LessonScript, ScriptError};
pub use speaker::Speaker;
pub use step::Step;
pub use video::{VideoId, VideoIdError};
