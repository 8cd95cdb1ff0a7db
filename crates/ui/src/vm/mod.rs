mod lesson_vm;

pub use lesson_vm::{ChatBubbleVm, LessonPageVm, map_lesson_page};
