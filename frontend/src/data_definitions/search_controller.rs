//! Dispatches search events through the view state machine and runs its fetches.

use common::{
    fetch_failure::FetchFailure,
    search_state::{SearchEffect, SearchEvent, SearchViewState},
};
use dioxus::{logger::tracing, prelude::*};

use crate::api::university_api::{search_universities, suggest_countries};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchController {
    pub state: Signal<SearchViewState>,
}

impl SearchController {
    pub fn new(state: Signal<SearchViewState>) -> Self {
        Self { state }
    }

    pub fn dispatch(mut self, event: SearchEvent) {
        if self.state.peek().is_stale(&event) {
            tracing::debug!("Dropping stale directory response: {:?}", event_name(&event));
        }
        let effect = {
            let mut state = self.state.write();
            let (next, effect) = std::mem::take(&mut *state).reduce(event);
            *state = next;
            effect
        };
        if let Some(effect) = effect {
            self.run_effect(effect);
        }
    }

    fn run_effect(self, effect: SearchEffect) {
        match effect {
            SearchEffect::FetchSuggestions { generation, prefix } => {
                spawn(async move {
                    let outcome = suggest_countries(prefix.clone()).await.map_err(|e| {
                        tracing::error!("Error fetching suggestions for {:?}: {:#?}", prefix, e);
                        FetchFailure::new(e.to_string())
                    });
                    self.dispatch(SearchEvent::SuggestionsFetched { generation, outcome });
                });
            }
            SearchEffect::FetchResults { generation, country } => {
                spawn(async move {
                    let outcome = search_universities(country.clone()).await.map_err(|e| {
                        tracing::error!("Error fetching universities for {:?}: {:#?}", country, e);
                        FetchFailure::new(e.to_string())
                    });
                    self.dispatch(SearchEvent::SearchFetched { generation, outcome });
                });
            }
        }
    }
}

fn event_name(event: &SearchEvent) -> &'static str {
    match event {
        SearchEvent::SuggestionsFetched { .. } => "suggestions",
        SearchEvent::SearchFetched { .. } => "search",
        _ => "input",
    }
}
