use dioxus::prelude::*;

use crate::{
    components::search_components::university_card::UniversityCard,
    data_definitions::{card_export::card_element_id, search_controller::SearchController},
};

#[component]
pub fn UniversityResultsGrid() -> Element {
    let controller = use_context::<SearchController>();
    let filtered_results = use_memo(move || {
        controller.state.read().filtered_results().into_iter().cloned().collect::<Vec<_>>()
    });
    rsx! {
        div {
            id: "x-university-results-grid",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                gap: 16px;
                width: 100%;
            ",
            for (index, university) in filtered_results().into_iter().enumerate() {
                UniversityCard {
                    key: "{index}-{university.name}",
                    university: university.clone(),
                    element_id: card_element_id(index),
                }
            }
        }
    }
}
