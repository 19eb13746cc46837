pub mod header;
pub mod loading_spinner;
pub mod movie_details;
