//! Domain records.
//!
//! Plain immutable values produced by the data layer and read-only to the
//! screen models. The wire shapes live in [`crate::api::dto`]; these types
//! carry no serialization concerns.

/// A cat breed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breed {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Temperament tags, e.g. `["Active", "Playful"]`.
    pub temperament: Vec<String>,
    /// Representative image for the breed, when the API provides one.
    pub image_url: Option<String>,
}

/// Full details for a single cat image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatDetails {
    pub id: String,
    pub image_url: String,
    /// Breed attached to the image. Absent for images the API has no
    /// breed data for.
    pub breed: Option<Breed>,
}

impl CatDetails {
    /// Breed name, if breed data is attached.
    pub fn breed_name(&self) -> Option<&str> {
        self.breed.as_ref().map(|b| b.name.as_str())
    }
}
