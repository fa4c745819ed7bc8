//! State/province select built from the distinct values of the current results.

use common::search_state::SearchEvent;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_communication_icons::MdLocationOn};

use crate::data_definitions::search_controller::SearchController;

#[component]
pub fn StateFilterSelect() -> Element {
    let controller = use_context::<SearchController>();
    let filter_values = use_memo(move || controller.state.read().distinct_filter_values());
    let selected_filter = use_memo(move || controller.state.read().selected_filter.clone());
    rsx! {
        div {
            id: "x-state-filter",
            style: "display: flex; flex-direction: column; gap: 6px;",
            label {
                r#for: "state-filter",
                style: "display: flex; align-items: center; gap: 4px; font-weight: 700; font-size: 16px;",
                Icon { icon: MdLocationOn, style: "width: 18px; height: 18px;" }
                "Filter by State/Province:"
            }
            select {
                id: "state-filter",
                style: "
                    height: 40px;
                    min-width: 220px;
                    padding: 0px 8px;
                    border: 1px solid rgba(101, 101, 101, 0.8);
                    border-radius: 4px;
                    font-size: 16px;
                    background: white;
                ",
                value: "{selected_filter}",
                onchange: move |event: Event<FormData>| {
                    controller.dispatch(SearchEvent::ChangeFilter(event.value()));
                },
                option { value: "", selected: selected_filter.read().is_empty(), "All" }
                for state_province in filter_values() {
                    option {
                        key: "{state_province}",
                        value: "{state_province}",
                        selected: state_province == selected_filter(),
                        "{state_province}"
                    }
                }
            }
        }
    }
}
