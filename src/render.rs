//! Fragment builders. Pure: each takes plain data and returns a new
//! element tree without touching any document.

use crate::dom::Element;
use crate::places::model::{Place, Review};
use crate::places::services::{detail_href, truncate_description};

pub const DEFAULT_RATING_MAX: u32 = 5;
const DEFAULT_FRAME_WIDTH: u32 = 600;
const DEFAULT_FRAME_HEIGHT: u32 = 450;

#[derive(Debug, Clone, Copy, Default)]
pub struct FrameOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Copy)]
pub struct RatingOptions {
    pub max: u32,
}

impl Default for RatingOptions {
    fn default() -> Self {
        Self {
            max: DEFAULT_RATING_MAX,
        }
    }
}

pub fn google_embed_url(lat: f64, lng: f64) -> String {
    format!("https://www.google.com/maps?q={lat},{lng}&output=embed")
}

pub fn iframe(url: &str, options: FrameOptions) -> Element {
    Element::new("iframe")
        .attr("src", url)
        .attr("width", options.width.unwrap_or(DEFAULT_FRAME_WIDTH).to_string())
        .attr("height", options.height.unwrap_or(DEFAULT_FRAME_HEIGHT).to_string())
        .attr("allowfullscreen", "")
        .attr("loading", "lazy")
}

pub fn div(class_names: &str, content: Option<&str>) -> Element {
    let el = Element::new("div").with_classes(class_names);
    match content {
        Some(text) if !text.is_empty() => el.text(text),
        _ => el,
    }
}

pub fn img(src: &str, alt: &str) -> Element {
    Element::new("img").attr("src", src).attr("alt", alt)
}

pub fn create_map(lat: f64, lng: f64, options: FrameOptions) -> Element {
    div("map-container", None).child(iframe(&google_embed_url(lat, lng), options))
}

pub fn create_carousel_caption(name: &str, description: &str) -> Element {
    div("carousel-caption d-none d-md-block", None)
        .child(Element::new("h3").text(name))
        .child(Element::new("p").text(description))
}

/// Indicator button for slide `index` of the carousel `carousel_id`
/// (a selector such as `#photos-carousel`).
pub fn create_carousel_indicator(carousel_id: &str, index: usize, label: &str) -> Element {
    let mut button = Element::new("button")
        .attr("type", "button")
        .attr("data-bs-target", carousel_id)
        .attr("data-bs-slide-to", index.to_string());
    if index == 0 {
        button.add_classes("active");
        button.set_attr("aria-current", "true");
    }
    button.attr("aria-label", label)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CarouselItem<'a> {
    pub image: &'a str,
    pub href: Option<&'a str>,
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub index: usize,
}

pub fn create_carousel_item(item: CarouselItem<'_>) -> Element {
    let mut el = div("carousel-item", None);
    if item.index == 0 {
        el.add_classes("active");
    }

    el.append_child(img(item.image, item.name.unwrap_or_default()).with_classes("d-block w-100"));

    if let Some(href) = item.href {
        el.append_child(Element::new("a").attr("href", href).with_classes("stretched-link"));
    }

    if let (Some(name), Some(description)) = (item.name, item.description) {
        if !name.is_empty() && !description.is_empty() {
            el.append_child(create_carousel_caption(name, description));
        }
    }

    el
}

/// Row of `options.max` dots. Dot `i` (1-indexed) is filled when
/// `round(i) <= rating`; the position is rounded, the rating is not.
pub fn create_rating_indicator(rating: f64, options: RatingOptions) -> Element {
    let mut row = div("d-flex gap-1", None);
    for i in 0..options.max {
        let position = f64::from(i + 1).round();
        let mut dot = Element::new("span")
            .with_classes("rounded-circle border border-primary")
            .attr("style", "width: 1rem; height: 1rem");
        if position <= rating {
            dot.add_classes("bg-primary");
        }
        row.append_child(dot);
    }
    row
}

pub fn create_place_card(place: &Place) -> Element {
    let body = div("card-body", None)
        .child(Element::new("h5").with_classes("card-title").text(&place.name))
        .child(
            Element::new("p")
                .with_classes("card-text")
                .text(truncate_description(&place.description)),
        )
        .child(Element::new("a").attr("href", detail_href(&place.slug)).text("Ver mais"));

    div("card", None)
        .child(img(&place.thumbnail, &place.name).with_classes("card-img-top"))
        .child(body)
}

pub fn create_review_card(review: &Review) -> Element {
    let header = div("d-flex justify-content-between align-items-center", None)
        .child(Element::new("h5").with_classes("card-title").text(&review.reviewer))
        .child(create_rating_indicator(review.rating, RatingOptions::default()));

    let body = div("card-body", None)
        .child(header)
        .child(Element::new("p").with_classes("card-text").text(&review.review));

    div("card mb-3", None).child(body)
}
