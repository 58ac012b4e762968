use tracing::{debug, error};

use super::shell::HIGHLIGHT_CAROUSEL_ID;
use super::show_alert;
use crate::dom::{Document, DomError, Element};
use crate::places::services::detail_href;
use crate::places::{Place, PlacesRepository, RepositoryError};
use crate::render::{create_carousel_indicator, create_carousel_item, create_place_card, div, CarouselItem};

pub const HIGHLIGHTS_ERROR: &str =
    "Erro ao carregar destaques. Por favor, tente novamente mais tarde.";
pub const PLACES_ERROR: &str = "Erro ao carregar lugares. Por favor, tente novamente mais tarde.";

const CARD_COLUMN: &str = "col-12 col-sm-6 col-md-4 col-lg-3 mb-3";

/// Fetches both sections concurrently. Each section handles its own
/// failure, so a broken carousel never hides the grid and vice versa.
pub async fn load_home_page(doc: &mut Document, repo: &dyn PlacesRepository) -> Result<(), DomError> {
    let (highlighted, all) = tokio::join!(repo.get_highlighted_places(), repo.get_all_places());

    load_highlighted_places(doc, highlighted)?;
    load_all_places(doc, all)?;
    Ok(())
}

fn load_highlighted_places(
    doc: &mut Document,
    places: Result<Vec<Place>, RepositoryError>,
) -> Result<(), DomError> {
    let carousel = doc.by_id_mut(HIGHLIGHT_CAROUSEL_ID)?;
    let filled = match places {
        Ok(places) => fill_highlight_carousel(carousel, &places).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    if let Err(e) = filled {
        error!(error = %e, "error loading highlighted places");
        show_alert(carousel, HIGHLIGHTS_ERROR);
    }
    Ok(())
}

fn fill_highlight_carousel(carousel: &mut Element, places: &[Place]) -> Result<(), DomError> {
    let selector = format!("#{HIGHLIGHT_CAROUSEL_ID}");
    for (index, place) in places.iter().enumerate() {
        let href = detail_href(&place.slug);
        carousel
            .require_class_mut("carousel-inner")?
            .append_child(create_carousel_item(CarouselItem {
                image: &place.thumbnail,
                href: Some(href.as_str()),
                name: Some(place.name.as_str()),
                description: Some(place.description.as_str()),
                index,
            }));
        carousel
            .require_class_mut("carousel-indicators")?
            .append_child(create_carousel_indicator(&selector, index, &place.name));
    }
    debug!(count = places.len(), "highlight carousel filled");
    Ok(())
}

fn load_all_places(
    doc: &mut Document,
    places: Result<Vec<Place>, RepositoryError>,
) -> Result<(), DomError> {
    let grid = doc.by_id_mut("places")?;
    match places {
        Ok(places) => {
            for place in &places {
                grid.append_child(div(CARD_COLUMN, None).child(create_place_card(place)));
            }
            debug!(count = places.len(), "place grid filled");
        }
        Err(e) => {
            error!(error = %e, "error loading all places");
            show_alert(grid, PLACES_ERROR);
        }
    }
    Ok(())
}
