pub mod mock_book_storage;

pub use mock_book_storage::MockBookStorage;
