pub mod card_action_buttons;
pub mod search_input_bar;
pub mod state_filter_select;
pub mod suggestion_dropdown;
pub mod university_card;
pub mod university_results_grid;
