use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use lesson_core::model::{LessonScript, VideoId};

use crate::context::{UiApp, build_app_context};
use crate::views::LessonView;
use crate::views::lesson::LessonTestHandles;

#[derive(Clone)]
struct TestApp {
    script: Arc<LessonScript>,
    video_id: VideoId,
}

impl UiApp for TestApp {
    fn script(&self) -> Arc<LessonScript> {
        Arc::clone(&self.script)
    }

    fn video_id(&self) -> VideoId {
        self.video_id.clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: LessonTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { LessonView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: LessonTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Activates whatever affordance currently routes to `advance`, exactly
    /// as a click on it would.
    pub fn advance(&mut self) {
        let advance = self.handles.advance();
        self.dom.in_runtime(|| advance.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_lesson_harness() -> ViewHarness {
    setup_lesson_harness_with_script(Arc::new(LessonScript::builtin()))
}

pub fn setup_lesson_harness_with_script(script: Arc<LessonScript>) -> ViewHarness {
    let app = Arc::new(TestApp {
        script,
        video_id: VideoId::default_clip(),
    });
    let handles = LessonTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
