//! Wire types for TheCatApi and their mapping to domain records.
//!
//! The API reports temperament as a single comma-separated string; the
//! domain wants individual tags, so the mapping splits and trims here.

use serde::Deserialize;

use crate::domain::{Breed, CatDetails};

/// Breed as returned by `GET /breeds` and embedded in image responses.
#[derive(Debug, Clone, Deserialize)]
pub struct BreedDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub temperament: Option<String>,
    #[serde(default)]
    pub image: Option<BreedImageDto>,
}

/// Representative image attached to a breed listing.
#[derive(Debug, Clone, Deserialize)]
pub struct BreedImageDto {
    #[serde(default)]
    pub url: Option<String>,
}

/// Image as returned by `GET /images/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageDto {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub breeds: Vec<BreedDto>,
}

impl From<BreedDto> for Breed {
    fn from(dto: BreedDto) -> Self {
        Breed {
            id: dto.id,
            name: dto.name,
            description: dto.description.unwrap_or_default(),
            temperament: split_temperament(dto.temperament.as_deref()),
            image_url: dto.image.and_then(|i| i.url),
        }
    }
}

impl ImageDto {
    /// Lift the image and its first attached breed into domain details.
    pub fn into_details(self) -> CatDetails {
        CatDetails {
            id: self.id,
            image_url: self.url,
            breed: self.breeds.into_iter().next().map(Breed::from),
        }
    }
}

fn split_temperament(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperament_splits_on_commas_and_trims() {
        assert_eq!(
            split_temperament(Some("Active, Playful,Curious")),
            vec!["Active", "Playful", "Curious"]
        );
    }

    #[test]
    fn temperament_absent_maps_to_no_tags() {
        assert!(split_temperament(None).is_empty());
        assert!(split_temperament(Some("")).is_empty());
    }

    #[test]
    fn breed_dto_maps_to_domain() {
        let dto: BreedDto = serde_json::from_str(
            r#"{
                "id": "abys",
                "name": "Abyssinian",
                "description": "A lively cat.",
                "temperament": "Active, Energetic",
                "image": {"url": "https://cdn.example/abys.jpg"}
            }"#,
        )
        .unwrap();

        let breed = Breed::from(dto);
        assert_eq!(breed.id, "abys");
        assert_eq!(breed.temperament, vec!["Active", "Energetic"]);
        assert_eq!(breed.image_url.as_deref(), Some("https://cdn.example/abys.jpg"));
    }

    #[test]
    fn breed_dto_tolerates_sparse_fields() {
        let dto: BreedDto = serde_json::from_str(r#"{"id": "x", "name": "X"}"#).unwrap();
        let breed = Breed::from(dto);
        assert!(breed.description.is_empty());
        assert!(breed.temperament.is_empty());
        assert!(breed.image_url.is_none());
    }

    #[test]
    fn image_dto_takes_first_breed() {
        let dto: ImageDto = serde_json::from_str(
            r#"{
                "id": "img1",
                "url": "https://cdn.example/img1.jpg",
                "breeds": [
                    {"id": "a", "name": "First"},
                    {"id": "b", "name": "Second"}
                ]
            }"#,
        )
        .unwrap();

        let details = dto.into_details();
        assert_eq!(details.image_url, "https://cdn.example/img1.jpg");
        assert_eq!(details.breed_name(), Some("First"));
    }

    #[test]
    fn image_dto_without_breeds_has_no_breed() {
        let dto: ImageDto =
            serde_json::from_str(r#"{"id": "img1", "url": "u"}"#).unwrap();
        assert!(dto.into_details().breed.is_none());
    }
}
