use std::sync::Arc;

use lesson_core::model::{LessonScript, VideoId};

/// What the composition root (e.g. `crates/app`) hands the UI: the immutable
/// lesson script and the configured video clip.
pub trait UiApp: Send + Sync {
    fn script(&self) -> Arc<LessonScript>;
    fn video_id(&self) -> VideoId;
}

#[derive(Clone)]
pub struct AppContext {
    script: Arc<LessonScript>,
    video_id: VideoId,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            script: app.script(),
            video_id: app.video_id(),
        }
    }

    #[must_use]
    pub fn script(&self) -> Arc<LessonScript> {
        Arc::clone(&self.script)
    }

    #[must_use]
    pub fn video_id(&self) -> VideoId {
        self.video_id.clone()
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
