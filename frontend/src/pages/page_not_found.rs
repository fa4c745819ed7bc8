use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Title { "University Search - Not Found" }
        div {
            style: "display: flex; flex-direction: column; gap: 16px; padding: 36px 40px;",
            h1 { style: "font-size: 34px;", "Page not found" }
            p { style: "font-size: 20px;", "Nothing lives at /{path}." }
            Link { to: Route::UniversitySearchPage {}, "Back to University Search" }
        }
    }
}
