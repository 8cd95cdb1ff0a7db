mod concepts;
pub(crate) mod lesson;

pub use concepts::KeyConcepts;
pub use lesson::LessonView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
