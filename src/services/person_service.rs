//! Person listing service.

use log::debug;

use crate::models::Person;
use crate::repositories::PersonRepository;

/// Service fronting the person repository for the list endpoints.
pub struct PersonService {
    repository: PersonRepository,
}

impl PersonService {
    /// Create a service over a freshly seeded repository.
    pub fn with_sample_data(count: usize) -> Self {
        Self {
            repository: PersonRepository::with_sample_data(count),
        }
    }

    /// Return one page of records together with the dataset total.
    pub fn get_page(&self, page: u64, size: u64) -> (Vec<Person>, u64) {
        debug!("Fetching person page {} with size {}", page, size);
        (self.repository.fetch_page(page, size), self.repository.total())
    }
}
