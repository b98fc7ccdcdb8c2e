use tokio::sync::RwLock;

use crate::route::books::Book;

/// In-memory book shelf.
///
/// Contents do not survive a restart. Duplicate ids are permitted,
/// lookups always act on the first match in insertion order.
#[derive(Debug, Default)]
pub struct BookStore {
    books: RwLock<Vec<Book>>,
}

impl BookStore {
    pub async fn add(&self, book: Book) {
        self.books.write().await.push(book);
    }

    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn get(&self, id: i64) -> Option<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
    }

    /// Rewrites the first matching book in place, keeping its stored id.
    ///
    /// Returns `false` if no book matched.
    pub async fn update(&self, id: i64, updated: Book) -> bool {
        let mut books = self.books.write().await;

        match books.iter_mut().find(|book| book.id == id) {
            Some(book) => {
                book.title = updated.title;
                book.author = updated.author;
                book.publication_year = updated.publication_year;
                book.isbn = updated.isbn;

                true
            }
            None => false,
        }
    }

    /// Removes the first matching book by position.
    ///
    /// Returns `false` if no book matched.
    pub async fn remove(&self, id: i64) -> bool {
        let mut books = self.books.write().await;

        match books.iter().position(|book| book.id == id) {
            Some(index) => {
                books.remove(index);

                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, title: &str) -> Book {
        Book {
            title: title.to_string(),
            id,
            author: "Jane Doe".to_string(),
            publication_year: 1999,
            isbn: "978-0-000-00000-0".to_string(),
        }
    }

    #[tokio::test]
    async fn get_returns_first_match() {
        let store = BookStore::default();

        store.add(book(1, "First")).await;
        store.add(book(1, "Second")).await;

        let found = store.get(1).await.expect("Book not found");

        assert_eq!(found.title, "First");
    }

    #[tokio::test]
    async fn update_keeps_stored_id_and_reports_match() {
        let store = BookStore::default();

        store.add(book(1, "Old title")).await;

        let updated = store.update(1, book(99, "New title")).await;
        assert!(updated);

        let found = store.get(1).await.expect("Book not found");
        assert_eq!(found.id, 1);
        assert_eq!(found.title, "New title");

        assert!(!store.update(2, book(2, "Missing")).await);
    }

    #[tokio::test]
    async fn remove_takes_out_first_match_only() {
        let store = BookStore::default();

        store.add(book(7, "First")).await;
        store.add(book(7, "Second")).await;

        assert!(store.remove(7).await);

        let remaining = store.list().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Second");

        assert!(!store.remove(8).await);
    }
}
