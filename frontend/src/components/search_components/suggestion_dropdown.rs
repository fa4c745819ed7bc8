use common::search_state::SearchEvent;
use dioxus::prelude::*;

use crate::data_definitions::search_controller::SearchController;

#[component]
pub fn SuggestionDropdown() -> Element {
    let controller = use_context::<SearchController>();
    let suggestions = use_memo(move || controller.state.read().suggestions.clone());
    if suggestions.read().is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            style: "position: relative; width: 100%; height: 0px;",
            ul {
                id: "x-search-suggestions",
                style: "
                    position: absolute;
                    top: 4px;
                    left: 0px;
                    width: 100%;
                    max-height: 240px;
                    overflow-y: auto;
                    margin: 0px;
                    padding: 0px;
                    list-style: none;
                    background: white;
                    border: 1px solid rgb(209, 213, 219);
                    border-radius: 4px;
                    box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                    z-index: 10;
                ",
                for (index, suggestion) in suggestions().into_iter().enumerate() {
                    SuggestionItem { key: "{index}", suggestion }
                }
            }
        }
    }
}

#[component]
fn SuggestionItem(suggestion: ReadSignal<String>) -> Element {
    let controller = use_context::<SearchController>();
    rsx! {
        li {
            class: "university-search-hover-background",
            style: "cursor: pointer; padding: 4px 12px; font-size: 16px;",
            onclick: move |_| {
                controller.dispatch(SearchEvent::PickSuggestion(suggestion.read().clone()));
            },
            "{suggestion}"
        }
    }
}
