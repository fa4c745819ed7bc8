pub mod page_not_found;
pub mod university_search_page;
