use std::sync::Arc;

use lesson_core::model::{DialogueLine, LessonScript, Speaker, Step};

use super::test_harness::{setup_lesson_harness, setup_lesson_harness_with_script};

#[tokio::test(flavor = "current_thread")]
async fn lesson_smoke_starts_with_only_the_opening_bubble() {
    let mut harness = setup_lesson_harness();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("안녕하세요"), "missing opening line in {html}");
    assert!(
        !html.contains("youtube.com/embed"),
        "video should be hidden at step 0 in {html}"
    );
    assert!(
        !html.contains("핵심 개념"),
        "concepts should be hidden at step 0 in {html}"
    );
    assert!(
        !html.contains("다음"),
        "next button should be hidden at step 0 in {html}"
    );
    assert!(
        html.contains("chat-bubble--clickable"),
        "opening bubble should be clickable in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_smoke_step_one_shows_video_and_next_button() {
    let mut harness = setup_lesson_harness();
    harness.rebuild();
    harness.advance();
    let html = harness.render();

    assert!(
        html.contains("youtube.com/embed/1EsqQHIMXZg"),
        "missing video embed in {html}"
    );
    assert!(html.contains("다음"), "missing next button in {html}");
    // Pacing gap: no new dialogue at step 1, and the bubble goes inert.
    assert!(
        !html.contains("장면을 보셨나요"),
        "second line revealed too early in {html}"
    );
    assert!(
        !html.contains("chat-bubble--clickable"),
        "no bubble should be clickable at step 1 in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_smoke_step_two_reveals_dialogue_and_drops_the_button() {
    let mut harness = setup_lesson_harness();
    harness.rebuild();
    harness.advance();
    harness.advance();
    let html = harness.render();

    assert!(
        html.contains("장면을 보셨나요"),
        "missing second line in {html}"
    );
    assert!(
        !html.contains("다음"),
        "next button should be gone at step 2 in {html}"
    );
    assert!(
        html.contains("chat-bubble--clickable"),
        "last bubble should be clickable at step 2 in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_smoke_full_walk_reaches_the_terminal_reveal() {
    let mut harness = setup_lesson_harness();
    harness.rebuild();
    for _ in 0..6 {
        harness.advance();
    }
    let html = harness.render();

    assert!(html.contains("정확해요"), "missing final line in {html}");
    assert!(html.contains("학생"), "missing student bubbles in {html}");
    assert!(
        html.contains("핵심 개념 및 요점"),
        "missing concepts panel in {html}"
    );
    assert!(
        html.contains("tan(θ)"),
        "missing formula in concepts panel in {html}"
    );
    assert!(
        !html.contains("chat-bubble--clickable") && !html.contains("다음"),
        "terminal step should leave no affordance in {html}"
    );

    // Further activations are no-ops.
    harness.advance();
    let again = harness.render();
    assert!(again.contains("핵심 개념 및 요점"));
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_smoke_renders_a_custom_script() {
    let script = LessonScript::new(vec![
        DialogueLine::new(Speaker::Teacher, "first custom line", Step::new(0)),
        DialogueLine::new(Speaker::Student, "second custom line", Step::new(2)),
    ])
    .unwrap();
    let mut harness = setup_lesson_harness_with_script(Arc::new(script));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("first custom line"), "missing line in {html}");
    assert!(!html.contains("second custom line"));

    harness.advance();
    harness.advance();
    let html = harness.render();
    assert!(
        html.contains("second custom line"),
        "missing revealed line in {html}"
    );
    assert!(
        html.contains("핵심 개념"),
        "custom script final step should reveal concepts in {html}"
    );
}
