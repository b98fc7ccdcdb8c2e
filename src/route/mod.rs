pub mod aircrafts;
pub mod books;
