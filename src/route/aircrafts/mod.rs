pub mod app;
pub mod get_aircrafts;
