//! Paginated iteration over a directory.

use super::contact_directory::Directory;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::ContactRecord;
use std::iter::FusedIterator;

/// Iterator over consecutive chunks of at most `chunk_size` records.
///
/// The chunk list is fixed when the iterator is created: it borrows the
/// directory, so the directory cannot change until the iterator is dropped.
/// The last chunk may be shorter than `chunk_size`.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    records: &'a [ContactRecord],
    chunk_size: usize,
    position: usize,
}

impl<'a> Chunks<'a> {
    fn new(records: &'a [ContactRecord], chunk_size: usize) -> Self {
        Self {
            records,
            chunk_size,
            position: 0,
        }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Vec<&'a ContactRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let records = self.records;
        if self.position >= records.len() {
            return None;
        }

        let end = (self.position + self.chunk_size).min(records.len());
        let chunk = records[self.position..end].iter().collect();
        self.position = end;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len() - self.position;
        let chunks = remaining.div_ceil(self.chunk_size);
        (chunks, Some(chunks))
    }
}

impl ExactSizeIterator for Chunks<'_> {}

impl FusedIterator for Chunks<'_> {}

impl Directory {
    /// Iterate over the records in chunks of up to `chunk_size`.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidChunkSize` if `chunk_size` is zero.
    pub fn iter_chunks(&self, chunk_size: usize) -> DirectoryResult<Chunks<'_>> {
        if chunk_size == 0 {
            return Err(DirectoryError::InvalidChunkSize);
        }
        Ok(Chunks::new(self.as_slice(), chunk_size))
    }

    /// Iterate over the records one at a time, each wrapped in its own chunk.
    pub fn iterator(&self) -> Chunks<'_> {
        Chunks::new(self.as_slice(), 1)
    }

    /// Number of chunks `iter_chunks(chunk_size)` would yield.
    pub fn page_count(&self, chunk_size: usize) -> DirectoryResult<usize> {
        Ok(self.iter_chunks(chunk_size)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory_of(names: &[&str]) -> Directory {
        let mut directory = Directory::new();
        for name in names {
            directory.add_record(ContactRecord::new(*name, None).unwrap());
        }
        directory
    }

    fn chunk_names(chunks: Chunks<'_>) -> Vec<Vec<String>> {
        chunks
            .map(|chunk| chunk.iter().map(|r| r.name().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_chunks_of_two() {
        let directory = directory_of(&["A", "B", "C", "D", "E"]);
        let chunks = directory.iter_chunks(2).unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!(
            chunk_names(chunks),
            vec![vec!["A", "B"], vec!["C", "D"], vec!["E"]]
        );
    }

    #[test]
    fn test_default_iterator_yields_single_records() {
        let directory = directory_of(&["A", "B"]);
        assert_eq!(chunk_names(directory.iterator()), vec![vec!["A"], vec!["B"]]);
    }

    #[test]
    fn test_chunk_larger_than_directory() {
        let directory = directory_of(&["A", "B"]);
        assert_eq!(
            chunk_names(directory.iter_chunks(10).unwrap()),
            vec![vec!["A", "B"]]
        );
    }

    #[test]
    fn test_empty_directory_yields_nothing() {
        let directory = Directory::new();
        assert_eq!(directory.iter_chunks(3).unwrap().next(), None);
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let directory = directory_of(&["A"]);
        assert!(matches!(
            directory.iter_chunks(0),
            Err(DirectoryError::InvalidChunkSize)
        ));
    }

    #[test]
    fn test_iterator_is_fused_and_fresh_per_call() {
        let directory = directory_of(&["A", "B", "C"]);
        let mut chunks = directory.iter_chunks(2).unwrap();
        assert!(chunks.next().is_some());
        assert!(chunks.next().is_some());
        assert!(chunks.next().is_none());
        assert!(chunks.next().is_none());

        assert_eq!(directory.iter_chunks(2).unwrap().count(), 2);
    }

    #[test]
    fn test_page_count() {
        let directory = directory_of(&["A", "B", "C", "D", "E"]);
        assert_eq!(directory.page_count(2).unwrap(), 3);
        assert_eq!(directory.page_count(5).unwrap(), 1);
    }
}
