use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier as served by the data service. Seeded ids are numbers,
/// ids created by `json-server` itself are strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaceId {
    Num(u64),
    Text(String),
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceId::Num(n) => write!(f, "{n}"),
            PlaceId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceInfo {
    pub opening_hours: String,
    pub address: String,
    pub contact: String,
    pub price_range: String,
    pub website: String,
    pub amenities: Vec<String>,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: PlaceId,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub info: PlaceInfo,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub reviewer: String,
    pub review: String,
    pub rating: f64,
    pub place_id: PlaceId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub src: String,
    #[serde(default)]
    pub description: String,
    pub place_id: PlaceId,
}

/// A place with its children inlined (`_embed=reviews&_embed=images`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    #[serde(flatten)]
    pub place: Place,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub images: Vec<Image>,
}
