//! In-memory person repository.
//!
//! Holds the seeded record vector and exposes the two operations the
//! pagination handlers need: the total count and one clipped page slice.
//! The vector is never mutated after construction, so sharing it across
//! worker threads needs no locking.

use log::info;

use crate::models::Person;

/// Repository over the in-memory person dataset.
pub struct PersonRepository {
    people: Vec<Person>,
}

impl PersonRepository {
    /// Seed the repository with `count` deterministic sample records.
    pub fn with_sample_data(count: usize) -> Self {
        info!("Seeding in-memory repository with {} person records", count);
        Self {
            people: (0..count).map(Person::sample).collect(),
        }
    }

    /// Total number of records in the dataset.
    pub fn total(&self) -> u64 {
        self.people.len() as u64
    }

    /// Fetch one page of records, clipped to the available length.
    ///
    /// A page beyond the end of the dataset yields an empty vector rather
    /// than an error.
    pub fn fetch_page(&self, page: u64, size: u64) -> Vec<Person> {
        let offset = page.saturating_sub(1).saturating_mul(size);
        if offset >= self.people.len() as u64 {
            return Vec::new();
        }

        let offset = offset as usize;
        let end = offset.saturating_add(size as usize).min(self.people.len());
        self.people[offset..end].to_vec()
    }
}
