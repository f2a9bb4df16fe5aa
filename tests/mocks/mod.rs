//! Mock implementations for testing.

pub mod mock_address_book_repository;

#[allow(unused_imports)]
pub use mock_address_book_repository::MockAddressBookRepository;
