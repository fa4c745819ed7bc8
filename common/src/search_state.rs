//! Search view state machine.
//!
//! All mutation goes through [`SearchViewState::reduce`], which maps the
//! current state and one event to the next state plus at most one network
//! effect for the caller to run. Fetch effects carry a generation; a
//! completion event whose generation is not the latest issued one is stale
//! and leaves the state untouched.

use std::collections::BTreeSet;

use crate::{
    fetch_failure::FetchFailure,
    state_filter::{distinct_filter_values, filter_by_state},
    suggestions::suggestion_prefix,
    university::UniversityRecord,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchViewState {
    pub query_text: String,
    pub results: Vec<UniversityRecord>,
    pub selected_filter: String,
    pub suggestions: Vec<String>,
    pub is_loading: bool,
    suggestion_generation: u64,
    search_generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    ChangeQuery(String),
    SubmitSearch,
    ChangeFilter(String),
    PickSuggestion(String),
    SuggestionsFetched {
        generation: u64,
        outcome: Result<Vec<String>, FetchFailure>,
    },
    SearchFetched {
        generation: u64,
        outcome: Result<Vec<UniversityRecord>, FetchFailure>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEffect {
    /// Look up suggestions for `prefix`, the first character of the query.
    FetchSuggestions { generation: u64, prefix: String },
    FetchResults { generation: u64, country: String },
}

impl SearchViewState {
    pub fn reduce(mut self, event: SearchEvent) -> (Self, Option<SearchEffect>) {
        if self.is_stale(&event) {
            return (self, None);
        }
        let effect = match event {
            SearchEvent::ChangeQuery(text) => self.set_query(text),
            SearchEvent::PickSuggestion(value) => {
                if value == self.query_text {
                    None
                } else {
                    self.set_query(value)
                }
            }
            SearchEvent::SubmitSearch => {
                self.is_loading = true;
                self.search_generation += 1;
                Some(SearchEffect::FetchResults {
                    generation: self.search_generation,
                    country: self.query_text.clone(),
                })
            }
            SearchEvent::ChangeFilter(value) => {
                self.selected_filter = value;
                None
            }
            SearchEvent::SuggestionsFetched { outcome, .. } => {
                self.suggestions = outcome.unwrap_or_default();
                None
            }
            SearchEvent::SearchFetched { outcome, .. } => {
                self.is_loading = false;
                self.results = outcome.unwrap_or_default();
                None
            }
        };
        (self, effect)
    }

    /// Whether a completion event belongs to a request that has since been superseded.
    pub fn is_stale(&self, event: &SearchEvent) -> bool {
        match event {
            SearchEvent::SuggestionsFetched { generation, .. } => *generation != self.suggestion_generation,
            SearchEvent::SearchFetched { generation, .. } => *generation != self.search_generation,
            _ => false,
        }
    }

    fn set_query(&mut self, text: String) -> Option<SearchEffect> {
        self.selected_filter.clear();
        if text == self.query_text {
            return None;
        }
        self.query_text = text;
        // any response still in flight belongs to older input
        self.suggestion_generation += 1;
        match suggestion_prefix(&self.query_text) {
            Some(prefix) => Some(SearchEffect::FetchSuggestions {
                generation: self.suggestion_generation,
                prefix,
            }),
            None => {
                self.suggestions.clear();
                None
            }
        }
    }

    pub fn distinct_filter_values(&self) -> BTreeSet<String> {
        distinct_filter_values(&self.results)
    }

    pub fn filtered_results(&self) -> Vec<&UniversityRecord> {
        filter_by_state(&self.results, &self.selected_filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_filter::tests::record;

    fn apply(state: SearchViewState, events: Vec<SearchEvent>) -> SearchViewState {
        events.into_iter().fold(state, |s, e| s.reduce(e).0)
    }

    fn mexico_results() -> Vec<UniversityRecord> {
        vec![record("UNAM", Some("CDMX")), record("ITESM", Some("Nuevo Leon"))]
    }

    #[test]
    fn change_query_requests_first_character() {
        let (state, effect) = SearchViewState::default().reduce(SearchEvent::ChangeQuery("M".to_string()));
        assert_eq!(state.query_text, "M");
        assert_eq!(effect, Some(SearchEffect::FetchSuggestions { generation: 1, prefix: "M".to_string() }));

        let (_, effect) = state.reduce(SearchEvent::ChangeQuery("Mexico".to_string()));
        assert_eq!(effect, Some(SearchEffect::FetchSuggestions { generation: 2, prefix: "M".to_string() }));
    }

    #[test]
    fn change_query_resets_filter() {
        let state = apply(SearchViewState::default(), vec![
            SearchEvent::ChangeQuery("Mexico".to_string()),
            SearchEvent::SubmitSearch,
            SearchEvent::SearchFetched { generation: 1, outcome: Ok(mexico_results()) },
            SearchEvent::ChangeFilter("CDMX".to_string()),
        ]);
        assert_eq!(state.selected_filter, "CDMX");

        let (state, _) = state.reduce(SearchEvent::ChangeQuery("Mexic".to_string()));
        assert_eq!(state.selected_filter, "");
        assert_eq!(state.filtered_results().len(), 2);
    }

    #[test]
    fn clearing_query_clears_suggestions_without_fetch() {
        let state = apply(SearchViewState::default(), vec![
            SearchEvent::ChangeQuery("Ca".to_string()),
            SearchEvent::SuggestionsFetched { generation: 1, outcome: Ok(vec!["Canada".to_string()]) },
        ]);
        assert_eq!(state.suggestions, vec!["Canada"]);

        let (state, effect) = state.reduce(SearchEvent::ChangeQuery(String::new()));
        assert_eq!(effect, None);
        assert!(state.suggestions.is_empty());

        let (state, effect) = state.reduce(SearchEvent::ChangeQuery("  ".to_string()));
        assert_eq!(effect, None);
        assert!(state.suggestions.is_empty());
    }

    #[test]
    fn stale_suggestions_are_dropped() {
        let state = apply(SearchViewState::default(), vec![
            SearchEvent::ChangeQuery("C".to_string()),
            SearchEvent::ChangeQuery("".to_string()),
            SearchEvent::ChangeQuery("M".to_string()),
        ]);
        let (state, _) = state.reduce(SearchEvent::SuggestionsFetched {
            generation: 1,
            outcome: Ok(vec!["Canada".to_string()]),
        });
        assert!(state.suggestions.is_empty());

        let (state, _) = state.reduce(SearchEvent::SuggestionsFetched {
            generation: 3,
            outcome: Ok(vec!["Mexico".to_string(), "Mexico".to_string()]),
        });
        assert_eq!(state.suggestions, vec!["Mexico", "Mexico"]);
    }

    #[test]
    fn staleness_is_reported_for_superseded_fetches() {
        let state = apply(SearchViewState::default(), vec![
            SearchEvent::ChangeQuery("C".to_string()),
            SearchEvent::ChangeQuery("Ca".to_string()),
            SearchEvent::SubmitSearch,
        ]);
        let old = SearchEvent::SuggestionsFetched { generation: 1, outcome: Ok(vec![]) };
        let current = SearchEvent::SuggestionsFetched { generation: 2, outcome: Ok(vec![]) };
        let search = SearchEvent::SearchFetched { generation: 1, outcome: Ok(vec![]) };
        assert!(state.is_stale(&old));
        assert!(!state.is_stale(&current));
        assert!(!state.is_stale(&search));
        assert!(!state.is_stale(&SearchEvent::SubmitSearch));
    }

    #[test]
    fn stale_completion_leaves_state_untouched() {
        let state = apply(SearchViewState::default(), vec![
            SearchEvent::ChangeQuery("Mexico".to_string()),
            SearchEvent::SubmitSearch,
            SearchEvent::SubmitSearch,
            SearchEvent::ChangeQuery("Me".to_string()),
        ]);
        let stale_search = SearchEvent::SearchFetched { generation: 1, outcome: Err(FetchFailure::new("late")) };
        let stale_suggestions = SearchEvent::SuggestionsFetched { generation: 1, outcome: Ok(vec!["Mali".to_string()]) };
        let (after, effect) = state.clone().reduce(stale_search);
        assert_eq!(effect, None);
        assert_eq!(after, state);
        let (after, _) = state.clone().reduce(stale_suggestions);
        assert_eq!(after, state);
    }

    #[test]
    fn late_response_after_clear_is_ignored() {
        let state = apply(SearchViewState::default(), vec![
            SearchEvent::ChangeQuery("C".to_string()),
            SearchEvent::ChangeQuery("".to_string()),
            SearchEvent::SuggestionsFetched { generation: 1, outcome: Ok(vec!["Canada".to_string()]) },
        ]);
        assert!(state.suggestions.is_empty());
    }

    #[test]
    fn failed_suggestions_become_empty() {
        let state = apply(SearchViewState::default(), vec![
            SearchEvent::ChangeQuery("C".to_string()),
            SearchEvent::SuggestionsFetched { generation: 1, outcome: Ok(vec!["Canada".to_string()]) },
            SearchEvent::ChangeQuery("Ch".to_string()),
            SearchEvent::SuggestionsFetched { generation: 2, outcome: Err(FetchFailure::new("offline")) },
        ]);
        assert!(state.suggestions.is_empty());
    }

    #[test]
    fn submit_sets_loading_and_requests_query() {
        let state = apply(SearchViewState::default(), vec![SearchEvent::ChangeQuery("Mexico".to_string())]);
        let (state, effect) = state.reduce(SearchEvent::SubmitSearch);
        assert!(state.is_loading);
        assert_eq!(effect, Some(SearchEffect::FetchResults { generation: 1, country: "Mexico".to_string() }));

        let (state, effect) = state.reduce(SearchEvent::SearchFetched { generation: 1, outcome: Ok(mexico_results()) });
        assert_eq!(effect, None);
        assert!(!state.is_loading);
        assert_eq!(state.results.len(), 2);
        assert_eq!(
            state.distinct_filter_values(),
            BTreeSet::from(["CDMX".to_string(), "Nuevo Leon".to_string()])
        );

        let (state, _) = state.reduce(SearchEvent::ChangeFilter("CDMX".to_string()));
        let filtered = state.filtered_results();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "UNAM");
    }

    #[test]
    fn failed_search_leaves_empty_results_and_not_loading() {
        let state = apply(SearchViewState::default(), vec![
            SearchEvent::ChangeQuery("Mexico".to_string()),
            SearchEvent::SubmitSearch,
            SearchEvent::SearchFetched { generation: 1, outcome: Ok(mexico_results()) },
            SearchEvent::SubmitSearch,
            SearchEvent::SearchFetched { generation: 2, outcome: Err(FetchFailure::new("connection refused")) },
        ]);
        assert!(state.results.is_empty());
        assert!(!state.is_loading);
    }

    #[test]
    fn only_latest_search_completes_loading() {
        let state = apply(SearchViewState::default(), vec![
            SearchEvent::ChangeQuery("Mexico".to_string()),
            SearchEvent::SubmitSearch,
            SearchEvent::SubmitSearch,
            SearchEvent::SearchFetched { generation: 1, outcome: Ok(vec![record("Old", None)]) },
        ]);
        assert!(state.is_loading);
        assert!(state.results.is_empty());

        let (state, _) = state.reduce(SearchEvent::SearchFetched { generation: 2, outcome: Ok(mexico_results()) });
        assert!(!state.is_loading);
        assert_eq!(state.results.len(), 2);
    }

    #[test]
    fn change_filter_does_not_fetch() {
        let (state, effect) = SearchViewState::default().reduce(SearchEvent::ChangeFilter("Jalisco".to_string()));
        assert_eq!(effect, None);
        assert_eq!(state.selected_filter, "Jalisco");
    }

    #[test]
    fn pick_suggestion_sets_query_without_submit() {
        let state = apply(SearchViewState::default(), vec![SearchEvent::ChangeQuery("Me".to_string())]);
        let (state, effect) = state.reduce(SearchEvent::PickSuggestion("Mexico".to_string()));
        assert_eq!(state.query_text, "Mexico");
        assert!(!state.is_loading);
        assert!(matches!(effect, Some(SearchEffect::FetchSuggestions { .. })));

        let (_, effect) = state.reduce(SearchEvent::PickSuggestion("Mexico".to_string()));
        assert_eq!(effect, None);
    }
}
