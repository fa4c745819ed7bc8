use common::search_state::SearchViewState;
use dioxus::prelude::*;

use crate::{
    components::{
        error_boundary::ComponentErrorBoundary,
        loading_indicator::LoadingIndicator,
        search_components::{
            search_input_bar::SearchInputBar, state_filter_select::StateFilterSelect,
            university_results_grid::UniversityResultsGrid,
        },
    },
    data_definitions::search_controller::SearchController,
};

/// University search page
#[component]
pub fn UniversitySearchPage() -> Element {
    let state = use_signal(SearchViewState::default);
    let controller = use_context_provider(move || SearchController::new(state));
    let is_loading = use_memo(move || controller.state.read().is_loading);

    rsx! {
        Title { "University Search" }
        div {
            id: "x-university-search-page",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                width: 100%;
                min-height: 100%;
                padding: 16px 40px;
                box-sizing: border-box;
                background: #F5F6F8;
            ",
            h1 {
                style: "
                    display: flex;
                    justify-content: center;
                    font-size: 30px;
                    font-weight: 700;
                    text-decoration: underline;
                    margin-bottom: 16px;
                ",
                "University Search"
            }
            div {
                id: "x-search-controls-row",
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    align-items: flex-end;
                    justify-content: space-between;
                    gap: 16px;
                ",
                SearchInputBar {}
                StateFilterSelect {}
            }
            ComponentErrorBoundary {
                if is_loading() {
                    LoadingIndicator {}
                } else {
                    UniversityResultsGrid {}
                }
            }
        }
    }
}
