use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod add_book;
pub mod app;
pub mod delete_book;
pub mod get_book;
pub mod list_books;
pub mod update_book;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Book {
    pub title: String,
    pub id: i64,
    pub author: String,
    pub publication_year: u16,
    pub isbn: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct BookPath {
    pub id: i64,
}
