use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::StatusCode;

use super::error::RepositoryError;
use super::model::{Image, Location, Place, PlaceDetails, PlaceId, PlaceInfo, Review};
use super::repo::PlacesRepository;

/// In-memory repository. Each query can be made to fail with a 500.
#[derive(Default)]
pub struct FakePlacesRepository {
    pub places: Vec<PlaceDetails>,
    pub fail_all: bool,
    pub fail_highlighted: bool,
    pub fail_by_slug: bool,
    pub calls: AtomicUsize,
}

impl FakePlacesRepository {
    pub fn new(places: Vec<PlaceDetails>) -> Self {
        Self {
            places,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self, fail: bool, operation: &'static str) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if fail {
            return Err(RepositoryError::Status {
                operation,
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PlacesRepository for FakePlacesRepository {
    async fn get_all_places(&self) -> Result<Vec<Place>, RepositoryError> {
        self.check(self.fail_all, "get_all_places")?;
        Ok(self.places.iter().map(|d| d.place.clone()).collect())
    }

    async fn get_place_by_slug(&self, slug: &str) -> Result<Option<PlaceDetails>, RepositoryError> {
        self.check(self.fail_by_slug, "get_place_by_slug")?;
        Ok(self.places.iter().find(|d| d.place.slug == slug).cloned())
    }

    async fn get_places_by_name(&self, name: &str) -> Result<Vec<Place>, RepositoryError> {
        self.check(false, "get_places_by_name")?;
        Ok(self
            .places
            .iter()
            .filter(|d| d.place.name == name)
            .map(|d| d.place.clone())
            .collect())
    }

    async fn get_highlighted_places(&self) -> Result<Vec<Place>, RepositoryError> {
        self.check(self.fail_highlighted, "get_highlighted_places")?;
        Ok(self
            .places
            .iter()
            .filter(|d| d.place.highlight)
            .map(|d| d.place.clone())
            .collect())
    }
}

pub fn sample_place(id: u64, slug: &str, ratings: &[f64]) -> PlaceDetails {
    let place_id = PlaceId::Num(id);
    PlaceDetails {
        place: Place {
            id: place_id.clone(),
            slug: slug.to_string(),
            name: format!("Lugar {id}"),
            description: format!("Descrição do lugar {id}"),
            thumbnail: format!("https://img.example/{slug}.jpg"),
            info: PlaceInfo {
                opening_hours: "09:00 - 18:00".into(),
                address: "Av. Atlântica, s/n".into(),
                contact: "(21) 99999-0000".into(),
                price_range: "Gratuito".into(),
                website: "https://example.com".into(),
                amenities: vec!["Banheiros".into(), "Estacionamento".into()],
                activities: vec!["Caminhada".into()],
            },
            highlights: vec!["Vista".into(), "Pôr do sol".into(), "Trilha".into()],
            location: Location {
                latitude: -22.97,
                longitude: -43.18,
            },
            highlight: id % 2 == 1,
        },
        reviews: ratings
            .iter()
            .enumerate()
            .map(|(i, &rating)| Review {
                reviewer: format!("Visitante {i}"),
                review: "Recomendo".into(),
                rating,
                place_id: place_id.clone(),
            })
            .collect(),
        images: vec![
            Image {
                src: format!("https://img.example/{slug}-1.jpg"),
                description: "Entrada".into(),
                place_id: place_id.clone(),
            },
            Image {
                src: format!("https://img.example/{slug}-2.jpg"),
                description: "Mirante".into(),
                place_id,
            },
        ],
    }
}
