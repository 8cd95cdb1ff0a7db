use std::cell::RefCell;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;
use lesson_core::animation::PHASE_SCHEDULE;

/// The terminal-step reveal: the staged illustration plus the takeaway list.
#[component]
pub fn KeyConcepts() -> Element {
    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "핵심 개념 및 요점" }
            div { class: "concepts",
                div {
                    h3 { class: "concepts-heading", "핵심 공식 시각화" }
                    TrigAnimation {}
                    p { class: "concepts-note",
                        "이 간단한 삼각비는 조종사가 알려진 고도와 거리에서 목표물을 타격하는 데 필요한 정확한 공격 각도를 계산할 수 있게 해줍니다."
                    }
                }
                div {
                    h3 { class: "concepts-heading", "실생활 적용 사례" }
                    ul { class: "concepts-list",
                        li {
                            span { class: "concepts-term", "군사 작전:" }
                            " 발사체 궤적 및 비행 경로 계산."
                        }
                        li {
                            span { class: "concepts-term", "건축 및 공학:" }
                            " 구조적 안정성 확보 및 건물 높이 측정."
                        }
                        li {
                            span { class: "concepts-term", "항법:" }
                            " GPS 및 해상 항법에서 위치와 경로를 결정하는 데 사용됩니다."
                        }
                        li {
                            span { class: "concepts-term", "우주 탐사:" }
                            " 천체 간의 거리 계산."
                        }
                    }
                }
            }
        }
    }
}

/// Stages the plane/target/triangle/formula reveal on the fixed schedule
/// from `lesson_core::animation`. The phase counter is this component's only
/// state and nothing else reads it.
#[component]
fn TrigAnimation() -> Element {
    let mut phase = use_signal(|| 0u8);

    let tasks: Rc<RefCell<Vec<Task>>> = use_hook(|| {
        let tasks = Rc::new(RefCell::new(Vec::with_capacity(PHASE_SCHEDULE.len())));
        for cue in PHASE_SCHEDULE {
            let task = spawn(async move {
                tokio::time::sleep(cue.delay).await;
                phase.set(cue.phase);
            });
            tasks.borrow_mut().push(task);
        }
        tasks
    });

    // Pending cues must not fire into a disposed component.
    use_drop({
        let tasks = Rc::clone(&tasks);
        move || {
            for task in tasks.borrow_mut().drain(..) {
                task.cancel();
            }
        }
    });

    let current = phase();
    let on = |threshold: u8| if current >= threshold { "is-on" } else { "" };
    let icons = on(1);
    let altitude = on(2);
    let distance = on(3);
    let hypotenuse = on(4);
    let formula = on(5);

    rsx! {
        div { class: "anim-stage",
            div { class: "anim-el anim-plane {icons}", "✈️" }
            div { class: "anim-el anim-target {icons}", "🎯" }

            div { class: "anim-altitude",
                div { class: "anim-el anim-altitude-line {altitude}" }
                span { class: "anim-el anim-altitude-label {altitude}", "고도 (Opposite)" }
            }

            div { class: "anim-distance",
                div { class: "anim-el anim-distance-line {distance}" }
                span { class: "anim-el anim-distance-label {distance}", "수평 거리 (Adjacent)" }
            }

            svg { class: "anim-el anim-hypotenuse {hypotenuse}", view_box: "0 0 400 200",
                line {
                    x1: "55",
                    y1: "50",
                    x2: "350",
                    y2: "175",
                    stroke: "#f472b6",
                    stroke_width: "2",
                    stroke_dasharray: "8 4",
                }
            }
            div { class: "anim-el anim-angle {hypotenuse}", "θ" }

            div { class: "anim-el anim-formula-overlay {formula}",
                div { class: "anim-formula",
                    code { "tan(θ) = 고도 / 수평 거리" }
                }
            }
        }
    }
}
