use tracing::{error, info, warn};

use super::shell::PHOTOS_CAROUSEL_ID;
use super::{show_alert, Navigator, PageQuery, HOME_PATH};
use crate::dom::{Document, DomError, Element};
use crate::places::services::RatingSummary;
use crate::places::{Image, Location, PlaceDetails, PlacesRepository, Review};
use crate::render::{
    create_carousel_indicator, create_carousel_item, create_map, create_rating_indicator,
    create_review_card, div, CarouselItem, FrameOptions, RatingOptions,
};

pub const DETAIL_ERROR: &str =
    "Erro ao carregar detalhes do lugar. Por favor, tente novamente mais tarde.";

pub async fn load_detail_page(
    doc: &mut Document,
    query: &PageQuery,
    repo: &dyn PlacesRepository,
    nav: &mut dyn Navigator,
) -> Result<(), DomError> {
    let Some(slug) = query.slug.as_deref().filter(|s| !s.is_empty()) else {
        warn!("detail page requested without slug");
        nav.navigate(HOME_PATH);
        return Ok(());
    };

    match repo.get_place_by_slug(slug).await {
        Ok(Some(details)) => render_place(doc, &details),
        Ok(None) => {
            info!(%slug, "place not found, redirecting home");
            nav.navigate(HOME_PATH);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, %slug, "error loading place details");
            show_alert(doc.by_tag_mut("main")?, DETAIL_ERROR);
            Ok(())
        }
    }
}

fn render_place(doc: &mut Document, details: &PlaceDetails) -> Result<(), DomError> {
    let place = &details.place;

    doc.by_id_mut("place-name")?.set_text(&place.name);
    doc.by_id_mut("place-description")?.set_text(&place.description);
    doc.by_id_mut("place-thumbnail")?.set_attr("src", &place.thumbnail);
    doc.by_id_mut("place-opening-hours")?.set_text(&place.info.opening_hours);
    doc.by_id_mut("place-address")?.set_text(&place.info.address);
    doc.by_id_mut("place-phone")?.set_text(&place.info.contact);
    doc.by_id_mut("place-price-range")?.set_text(&place.info.price_range);
    doc.by_id_mut("place-website")?.set_text(&place.info.website);

    fill_list(doc.by_id_mut("place-highlights")?, &place.highlights);
    fill_list(doc.by_id_mut("place-amenities")?, &place.info.amenities);
    fill_list(doc.by_id_mut("place-activities")?, &place.info.activities);

    load_location(doc, place.location)?;
    load_photos(doc, &details.images)?;
    load_reviews(doc, &details.reviews)
}

fn fill_list(list: &mut Element, entries: &[String]) {
    for entry in entries {
        list.append_child(div("list-group-item", None).text(entry));
    }
}

fn load_location(doc: &mut Document, location: Location) -> Result<(), DomError> {
    doc.by_id_mut("place-map")?.append_child(create_map(
        location.latitude,
        location.longitude,
        FrameOptions::default(),
    ));
    Ok(())
}

fn load_photos(doc: &mut Document, images: &[Image]) -> Result<(), DomError> {
    let selector = format!("#{PHOTOS_CAROUSEL_ID}");
    let carousel = doc.by_id_mut(PHOTOS_CAROUSEL_ID)?;
    for (index, photo) in images.iter().enumerate() {
        carousel
            .require_class_mut("carousel-inner")?
            .append_child(create_carousel_item(CarouselItem {
                image: &photo.src,
                name: Some(photo.description.as_str()),
                index,
                ..Default::default()
            }));
        carousel
            .require_class_mut("carousel-indicators")?
            .append_child(create_carousel_indicator(&selector, index, &photo.description));
    }
    Ok(())
}

fn load_reviews(doc: &mut Document, reviews: &[Review]) -> Result<(), DomError> {
    let summary = RatingSummary::from_reviews(reviews);

    doc.by_id_mut("rating-average")?.set_text(summary.display_average());
    doc.by_id_mut("rating-indicator")?
        .append_child(create_rating_indicator(summary.indicator_value(), RatingOptions::default()));
    doc.by_id_mut("rating-count")?.set_text(summary.count.to_string());

    let container = doc.by_id_mut("reviews")?;
    for review in reviews {
        container.append_child(create_review_card(review));
    }
    Ok(())
}
