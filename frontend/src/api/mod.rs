pub mod university_api;
