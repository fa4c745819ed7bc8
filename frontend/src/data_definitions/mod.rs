pub mod card_export;
pub mod search_controller;
