use dioxus::prelude::*;

use crate::pages::page_not_found::PageNotFound;
use crate::pages::university_search_page::UniversitySearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    UniversitySearchPage {},


    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}
