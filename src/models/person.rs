//! Person record model and sample data generation.

use serde::Serialize;
use utoipa::ToSchema;

const FIRST_NAMES: [&str; 10] = [
    "Alice", "Bruno", "Carla", "Dmitri", "Elena", "Farid", "Grace", "Hiro", "Ines", "Jonas",
];

const LAST_NAMES: [&str; 10] = [
    "Almeida", "Berger", "Costa", "Duarte", "Eriksen", "Fischer", "Garcia", "Hansen", "Iversen",
    "Jensen",
];

/// A person record served by the paginated endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[schema(example = "Alice")]
    pub first_name: String,
    #[schema(example = "Almeida")]
    pub last_name: String,
}

impl Person {
    /// Build the deterministic sample record at `index`.
    ///
    /// Cycles through the name tables so consecutive records differ and the
    /// dataset is reproducible across restarts.
    pub fn sample(index: usize) -> Self {
        Self {
            first_name: FIRST_NAMES[index % FIRST_NAMES.len()].to_string(),
            last_name: LAST_NAMES[(index / FIRST_NAMES.len()) % LAST_NAMES.len()].to_string(),
        }
    }
}
