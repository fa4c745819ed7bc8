//! Country input with its suggestion dropdown and search button.

use common::search_state::SearchEvent;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::{
    components::search_components::suggestion_dropdown::SuggestionDropdown,
    data_definitions::search_controller::SearchController,
};


#[component]
pub fn SearchInputBar() -> Element {
    let controller = use_context::<SearchController>();
    let query_text = use_memo(move || controller.state.read().query_text.clone());
    let has_query = use_memo(move || !query_text.read().trim().is_empty());
    let search_button_color = use_memo(move || if has_query() { "blue" } else { "#6B7280" });
    let trigger_search = move |_: ()| {
        controller.dispatch(SearchEvent::SubmitSearch);
    };
    let search_oninput = move |event: Event<FormData>| {
        controller.dispatch(SearchEvent::ChangeQuery(event.value()));
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search(());
        }
    };
    rsx! {
        div {
            id: "x-search-input-wrapper",
            style: "
                position: relative;
                display: flex;
                flex-direction: row;
                align-items: flex-start;
                gap: 12px;
            ",
            div {
                style: "display: flex; flex-direction: column; width: 400px;",
                div {
                    id: "x-search-input-search-box",
                    style: "
                        display:flex;
                        align-items:center;
                        gap: 12px;
                        background-color: white;
                        border-radius: 9999px;
                        padding: 10px 14px;
                        height: 44px;
                        color: #111827;
                        border: 1px solid rgba(101, 101, 101, 0.8);
                        box-sizing: border-box;
                    ",
                    Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
                    input {
                        r#type: "text",
                        placeholder: "Enter country name",
                        style: "
                            flex:1;
                            border: none;
                            outline: none;
                            background: transparent;
                            color: #111827;
                            font-size: 18px;
                            font-family: Roboto, sans-serif;
                        ",
                        value: "{query_text}",
                        oninput: search_oninput,
                        onkeydown: search_onkeydown,
                    }
                }
                SuggestionDropdown {}
            }
            button {
                class: "university-search-hover-shadow",
                style: "
                    height: 44px;
                    padding: 0px 20px;
                    border: 1px solid {search_button_color()};
                    border-radius: 9999px;
                    background: white;
                    color: {search_button_color()};
                    font-size: 18px;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    trigger_search(())
                },
                "Search"
            }
        }
    }
}
