use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::LessonView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LessonView)] Lesson {},
}

#[component]
fn Layout() -> Element {
    let year = chrono::Utc::now().year();

    rsx! {
        div { class: "page-shell",
            header { class: "page-header",
                h1 { class: "page-title", "실생활 속 삼각비" }
                p { class: "page-subtitle", "'탑건: 매버릭'으로 배우는 삼각비 수업" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "page-footer",
                p { "© {year} Interactive Learning. All rights reserved." }
            }
        }
    }
}
