//! The address book: the owning collection of contacts.

mod address_book;
mod pages;

pub use address_book::AddressBook;
pub use pages::Pages;
