//! Read-only mock backend serving a seed document with the query surface
//! the places repository consumes (`json-server` style).

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::seed::{Record, SeedDocument};

type Params = Vec<(String, String)>;

pub fn router(doc: SeedDocument) -> Router {
    Router::new()
        .route("/places", get(list_places))
        .route("/places/:id", get(get_place))
        .route("/reviews", get(list_reviews))
        .route("/images", get(list_images))
        .with_state(Arc::new(doc))
}

/// Scalar value as it would appear in a query string.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".into()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Every non-underscore parameter must equal the record's field.
fn record_matches(record: &Record, params: &Params) -> bool {
    params
        .iter()
        .filter(|(key, _)| !key.starts_with('_'))
        .all(|(key, expected)| {
            record
                .get(key)
                .and_then(scalar_string)
                .is_some_and(|actual| &actual == expected)
        })
}

fn embeds(params: &Params) -> Vec<&str> {
    params
        .iter()
        .filter(|(key, _)| key == "_embed")
        .map(|(_, value)| value.as_str())
        .filter(|value| matches!(*value, "reviews" | "images"))
        .collect()
}

fn with_embeds(doc: &SeedDocument, place: &Record, embeds: &[&str]) -> Value {
    let mut out = place.clone();
    if let Some(id) = place.get("id") {
        for collection in embeds {
            let children = doc
                .children_of(collection, id)
                .cloned()
                .map(Value::Object)
                .collect();
            out.insert((*collection).to_string(), Value::Array(children));
        }
    }
    Value::Object(out)
}

fn filter_records(records: &[Record], params: &Params) -> Vec<Value> {
    records
        .iter()
        .filter(|r| record_matches(r, params))
        .cloned()
        .map(Value::Object)
        .collect()
}

#[instrument(skip(doc))]
async fn list_places(
    State(doc): State<Arc<SeedDocument>>,
    Query(params): Query<Params>,
) -> Json<Vec<Value>> {
    let embeds = embeds(&params);
    let places: Vec<Value> = doc
        .places
        .iter()
        .filter(|p| record_matches(p, &params))
        .map(|p| with_embeds(&doc, p, &embeds))
        .collect();
    debug!(count = places.len(), "places listed");
    Json(places)
}

#[instrument(skip(doc))]
async fn get_place(
    State(doc): State<Arc<SeedDocument>>,
    Path(id): Path<String>,
    Query(params): Query<Params>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let embeds = embeds(&params);
    doc.places
        .iter()
        .find(|p| p.get("id").and_then(scalar_string).as_deref() == Some(id.as_str()))
        .map(|p| Json(with_embeds(&doc, p, &embeds)))
        .ok_or((StatusCode::NOT_FOUND, "Place not found".into()))
}

#[instrument(skip(doc))]
async fn list_reviews(
    State(doc): State<Arc<SeedDocument>>,
    Query(params): Query<Params>,
) -> Json<Vec<Value>> {
    Json(filter_records(&doc.reviews, &params))
}

#[instrument(skip(doc))]
async fn list_images(
    State(doc): State<Arc<SeedDocument>>,
    Query(params): Query<Params>,
) -> Json<Vec<Value>> {
    Json(filter_records(&doc.images, &params))
}
