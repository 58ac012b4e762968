use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::Url;

use super::error::RepositoryError;
use super::model::{Place, PlaceDetails};

/// Read-only queries against the places data service.
#[async_trait]
pub trait PlacesRepository: Send + Sync {
    async fn get_all_places(&self) -> Result<Vec<Place>, RepositoryError>;

    /// First place whose slug matches, with reviews and images inlined.
    /// `None` means the slug is unknown.
    async fn get_place_by_slug(&self, slug: &str) -> Result<Option<PlaceDetails>, RepositoryError>;

    /// Name matching is whatever the data service does with `?name=`.
    async fn get_places_by_name(&self, name: &str) -> Result<Vec<Place>, RepositoryError>;

    async fn get_highlighted_places(&self) -> Result<Vec<Place>, RepositoryError>;
}

/// `PlacesRepository` over HTTP. One attempt per call, no timeout.
#[derive(Clone)]
pub struct HttpPlacesRepository {
    base: Url,
    client: reqwest::Client,
}

impl HttpPlacesRepository {
    pub fn new(base_url: &str) -> Result<Self, RepositoryError> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: &str, client: reqwest::Client) -> Result<Self, RepositoryError> {
        let mut base = Url::parse(base_url)?;
        // `Url::join` drops the last segment unless the path ends with '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `{base}/places` with the given query pairs, values percent-encoded.
    pub fn places_url(&self, query: &[(&str, &str)]) -> Result<Url, RepositoryError> {
        let mut url = self.base.join("places")?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        query: &[(&str, &str)],
    ) -> Result<T, RepositoryError> {
        let url = self.places_url(query)?;
        debug!(%operation, %url, "data service request");
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| RepositoryError::Transport { operation, source })?;

        let status = res.status();
        if !status.is_success() {
            return Err(RepositoryError::Status { operation, status });
        }

        res.json::<T>()
            .await
            .map_err(|source| RepositoryError::Decode { operation, source })
    }
}

#[async_trait]
impl PlacesRepository for HttpPlacesRepository {
    async fn get_all_places(&self) -> Result<Vec<Place>, RepositoryError> {
        self.fetch("get_all_places", &[]).await.map_err(|e| {
            error!(error = %e, "error fetching all places");
            e
        })
    }

    async fn get_place_by_slug(&self, slug: &str) -> Result<Option<PlaceDetails>, RepositoryError> {
        let query = [("slug", slug), ("_embed", "reviews"), ("_embed", "images")];
        let places: Vec<PlaceDetails> =
            self.fetch("get_place_by_slug", &query).await.map_err(|e| {
                error!(error = %e, %slug, "error fetching place by slug");
                e
            })?;
        Ok(places.into_iter().next())
    }

    async fn get_places_by_name(&self, name: &str) -> Result<Vec<Place>, RepositoryError> {
        self.fetch("get_places_by_name", &[("name", name)]).await.map_err(|e| {
            error!(error = %e, %name, "error fetching places by name");
            e
        })
    }

    async fn get_highlighted_places(&self) -> Result<Vec<Place>, RepositoryError> {
        self.fetch("get_highlighted_places", &[("highlight", "true")])
            .await
            .map_err(|e| {
                error!(error = %e, "error fetching highlighted places");
                e
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_service;
    use crate::places::model::PlaceId;
    use crate::seed;
    use axum::{http::StatusCode, routing::get, Router};
    use serde_json::json;

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn nested_fixture() -> Vec<serde_json::Value> {
        vec![
            json!({
                "id": 1, "slug": "cristo-redentor", "name": "Cristo Redentor",
                "description": "Estátua", "thumbnail": "c.jpg", "highlight": true,
                "reviews": [
                    { "reviewer": "Ana", "review": "Lindo", "rating": 5 },
                    { "reviewer": "Bruno", "review": "Cheio", "rating": 3 }
                ],
                "images": [{ "src": "c1.jpg", "description": "Vista" }]
            }),
            json!({
                "id": 2, "slug": "pao-de-acucar", "name": "Pão de Açúcar",
                "description": "Bondinho", "thumbnail": "p.jpg", "highlight": false,
                "reviews": [{ "reviewer": "Carla", "review": "Ótimo", "rating": 4 }],
                "images": [
                    { "src": "p1.jpg", "description": "Bondinho" },
                    { "src": "p2.jpg", "description": "Pôr do sol" }
                ]
            }),
        ]
    }

    async fn seeded_repository() -> HttpPlacesRepository {
        let doc = seed::denormalize(nested_fixture()).unwrap();
        let base = spawn(data_service::router(doc)).await;
        HttpPlacesRepository::new(&base).unwrap()
    }

    #[test]
    fn places_url_encodes_query_and_keeps_base_path() {
        let repo = HttpPlacesRepository::new("http://localhost:3000/api").unwrap();
        let url = repo
            .places_url(&[("slug", "praia do forte"), ("_embed", "reviews"), ("_embed", "images")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/api/places?slug=praia+do+forte&_embed=reviews&_embed=images"
        );
    }

    #[test]
    fn places_url_without_query_has_no_question_mark() {
        let repo = HttpPlacesRepository::new("http://localhost:3000").unwrap();
        assert_eq!(repo.places_url(&[]).unwrap().as_str(), "http://localhost:3000/places");
    }

    #[test]
    fn new_rejects_malformed_base_url() {
        let err = HttpPlacesRepository::new("not a url").err().unwrap();
        assert!(matches!(err, RepositoryError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn get_place_by_slug_embeds_only_own_children() {
        let repo = seeded_repository().await;
        let details = repo.get_place_by_slug("pao-de-acucar").await.unwrap().unwrap();

        assert_eq!(details.place.slug, "pao-de-acucar");
        assert_eq!(details.reviews.len(), 1);
        assert_eq!(details.images.len(), 2);
        assert!(details.reviews.iter().all(|r| r.place_id == PlaceId::Num(2)));
        assert!(details.images.iter().all(|i| i.place_id == PlaceId::Num(2)));
    }

    #[tokio::test]
    async fn get_place_by_slug_returns_none_for_unknown_slug() {
        let repo = seeded_repository().await;
        assert!(repo.get_place_by_slug("atlantida").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_queries_hit_the_expected_filters() {
        let repo = seeded_repository().await;

        assert_eq!(repo.get_all_places().await.unwrap().len(), 2);

        let highlighted = repo.get_highlighted_places().await.unwrap();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].slug, "cristo-redentor");

        let by_name = repo.get_places_by_name("Pão de Açúcar").await.unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, PlaceId::Num(2));
    }

    #[tokio::test]
    async fn non_success_status_is_reported_with_code() {
        let router = Router::new().route(
            "/places",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let repo = HttpPlacesRepository::new(&spawn(router).await).unwrap();

        let err = repo.get_all_places().await.unwrap_err();
        assert_eq!(err.status(), Some(reqwest::StatusCode::SERVICE_UNAVAILABLE));
        assert!(err.to_string().contains("get_all_places"));
    }

    #[tokio::test]
    async fn undecodable_body_is_a_decode_error() {
        let router = Router::new().route("/places", get(|| async { "not json" }));
        let repo = HttpPlacesRepository::new(&spawn(router).await).unwrap();

        let err = repo.get_highlighted_places().await.unwrap_err();
        assert!(matches!(err, RepositoryError::Decode { operation: "get_highlighted_places", .. }));
        assert!(err.to_string().contains("error decoding response body"));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let repo = HttpPlacesRepository::new(&format!("http://{addr}")).unwrap();
        let err = repo.get_place_by_slug("cristo-redentor").await.unwrap_err();
        assert!(matches!(err, RepositoryError::Transport { operation: "get_place_by_slug", .. }));
        assert!(err.to_string().contains("error sending request"));
    }

    #[tokio::test]
    async fn base_that_cannot_take_a_path_fails_inside_the_query() {
        let repo = HttpPlacesRepository::new("mailto:places@example.com").unwrap();

        let err = repo.get_places_by_name("Cristo Redentor").await.unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidUrl(_)));
    }
}
