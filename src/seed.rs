//! One-off flattening of the nested place catalog into the document the
//! data service serves: `places`, `reviews` and `images` side by side,
//! children pointing back at their place through `placeId`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::places::services::is_valid_slug;

pub type Record = Map<String, Value>;

const CHILD_COLLECTIONS: [&str; 2] = ["reviews", "images"];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("reading {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("writing {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("serializing seed document")]
    Serialize(#[from] serde_json::Error),
    #[error("seed input must be a JSON array of places")]
    NotAnArray,
    #[error("item {index} is not an object")]
    NotAnObject { index: usize },
    #[error("place {index} has no id")]
    MissingId { index: usize },
    #[error("place {index}: `{field}` must be an array of objects")]
    InvalidChildren { index: usize, field: &'static str },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedDocument {
    pub places: Vec<Record>,
    pub reviews: Vec<Record>,
    pub images: Vec<Record>,
}

impl SeedDocument {
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Children of the named collection (`reviews` or `images`) that point
    /// at `place_id`.
    pub fn children_of<'a>(
        &'a self,
        collection: &str,
        place_id: &'a Value,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        let records: &[Record] = match collection {
            "reviews" => &self.reviews,
            "images" => &self.images,
            _ => &[],
        };
        records
            .iter()
            .filter(move |r| r.get("placeId") == Some(place_id))
    }
}

/// Splits every place into its own fields plus its reviews and images,
/// each child tagged with `placeId`. Source order is kept.
pub fn denormalize(items: Vec<Value>) -> Result<SeedDocument, SeedError> {
    let mut doc = SeedDocument::default();
    let mut slugs = HashSet::new();

    for (index, item) in items.into_iter().enumerate() {
        let Value::Object(mut place) = item else {
            return Err(SeedError::NotAnObject { index });
        };
        let id = place.get("id").cloned().ok_or(SeedError::MissingId { index })?;

        for field in CHILD_COLLECTIONS {
            let children = match place.shift_remove(field) {
                None | Some(Value::Null) => Vec::new(),
                Some(Value::Array(children)) => children,
                Some(_) => return Err(SeedError::InvalidChildren { index, field }),
            };

            let target = if field == "reviews" {
                &mut doc.reviews
            } else {
                &mut doc.images
            };
            for child in children {
                let Value::Object(mut child) = child else {
                    return Err(SeedError::InvalidChildren { index, field });
                };
                child.insert("placeId".into(), id.clone());
                target.push(child);
            }
        }

        match place.get("slug").and_then(Value::as_str) {
            Some(slug) if !is_valid_slug(slug) => warn!(%slug, "slug is not url-safe"),
            Some(slug) if !slugs.insert(slug.to_string()) => warn!(%slug, "duplicate slug"),
            Some(_) => {}
            None => warn!(%id, "place has no slug"),
        }

        doc.places.push(place);
    }

    Ok(doc)
}

/// Reads the nested catalog from `input` and writes the flat document to
/// `output` (2-space indented).
pub fn run(input: &Path, output: &Path) -> Result<SeedDocument, SeedError> {
    let raw = std::fs::read_to_string(input).map_err(|source| SeedError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let parsed: Value = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: input.to_path_buf(),
        source,
    })?;
    let Value::Array(items) = parsed else {
        return Err(SeedError::NotAnArray);
    };

    let doc = denormalize(items)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| SeedError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(&doc)?;
    std::fs::write(output, json).map_err(|source| SeedError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        places = doc.places.len(),
        reviews = doc.reviews.len(),
        images = doc.images.len(),
        output = %output.display(),
        "seed document written"
    );
    Ok(doc)
}
