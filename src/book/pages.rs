//! Lazy pagination over the address book.

use crate::models::Record;
use std::collections::btree_map;
use std::iter::FusedIterator;

/// Iterator over rendered pages of the book.
///
/// Each item is up to `page_size` lines of `"{name}: {record}"` joined with
/// `\n`. A final partial page is yielded when the number of records is not a
/// multiple of the page size. Created by [`crate::AddressBook::paginate`].
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    entries: btree_map::Iter<'a, String, Record>,
    page_size: usize,
}

impl<'a> Pages<'a> {
    /// `page_size` is non-zero; the book checks it before constructing.
    pub(crate) fn new(entries: btree_map::Iter<'a, String, Record>, page_size: usize) -> Self {
        Self { entries, page_size }
    }
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let lines: Vec<String> = self
            .entries
            .by_ref()
            .take(self.page_size)
            .map(|(name, record)| format!("{name}: {record}"))
            .collect();

        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pages = self.entries.len().div_ceil(self.page_size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}
