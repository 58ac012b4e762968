use lazy_static::lazy_static;
use regex::Regex;
use url::form_urlencoded;

use super::model::Review;

pub const DETAIL_PAGE: &str = "/detalhe.html";
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;
pub const NO_REVIEWS_LABEL: &str = "Sem avaliações";

pub(crate) fn is_valid_slug(slug: &str) -> bool {
    lazy_static! {
        static ref SLUG_RE: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
    }
    SLUG_RE.is_match(slug)
}

/// Link to the detail page of the place with the given slug.
pub fn detail_href(slug: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(slug.as_bytes()).collect();
    format!("{DETAIL_PAGE}?slug={encoded}")
}

/// Cuts at a character boundary, not a word boundary.
pub fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description.to_string(),
    }
}

/// Aggregate of a place's reviews. `average` is `None` when there are no
/// reviews.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub average: Option<f64>,
    pub count: usize,
}

impl RatingSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let count = reviews.len();
        let average = if count == 0 {
            None
        } else {
            Some(reviews.iter().map(|r| r.rating).sum::<f64>() / count as f64)
        };
        Self { average, count }
    }

    /// Average with one decimal, or the "no reviews" label.
    pub fn display_average(&self) -> String {
        match self.average {
            Some(avg) => format!("{avg:.1}"),
            None => NO_REVIEWS_LABEL.to_string(),
        }
    }

    /// Value fed to the rating indicator; no reviews fills no dots.
    pub fn indicator_value(&self) -> f64 {
        self.average.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::places::model::PlaceId;

    fn reviews(ratings: &[f64]) -> Vec<Review> {
        ratings
            .iter()
            .map(|&rating| Review {
                reviewer: "r".into(),
                review: "t".into(),
                rating,
                place_id: PlaceId::Num(1),
            })
            .collect()
    }

    #[test]
    fn average_of_five_four_three_displays_four_point_zero() {
        let summary = RatingSummary::from_reviews(&reviews(&[5.0, 4.0, 3.0]));
        assert_eq!(summary.count, 3);
        assert_eq!(summary.display_average(), "4.0");
    }

    #[test]
    fn average_is_rounded_to_one_decimal() {
        let summary = RatingSummary::from_reviews(&reviews(&[5.0, 4.0, 4.0]));
        assert_eq!(summary.display_average(), "4.3");
    }

    #[test]
    fn no_reviews_has_no_average() {
        let summary = RatingSummary::from_reviews(&[]);
        assert_eq!(summary.average, None);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.display_average(), NO_REVIEWS_LABEL);
        assert_eq!(summary.indicator_value(), 0.0);
    }

    #[test]
    fn long_description_is_cut_to_exactly_one_hundred_chars() {
        let text = "á".repeat(150);
        let preview = truncate_description(&text);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), DESCRIPTION_PREVIEW_CHARS + 3);
        assert_eq!(preview.trim_end_matches("...").chars().count(), 100);
    }

    #[test]
    fn short_and_exact_descriptions_are_unchanged() {
        assert_eq!(truncate_description("Praia tranquila"), "Praia tranquila");
        let exact = "x".repeat(100);
        assert_eq!(truncate_description(&exact), exact);
    }

    #[test]
    fn detail_href_points_at_detail_page() {
        assert_eq!(detail_href("cristo-redentor"), "/detalhe.html?slug=cristo-redentor");
        assert_eq!(detail_href("a b"), "/detalhe.html?slug=a+b");
    }

    #[test]
    fn slug_validation() {
        assert!(is_valid_slug("pao-de-acucar"));
        assert!(is_valid_slug("museu2"));
        assert!(!is_valid_slug("Pão de Açúcar"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("double--dash"));
        assert!(!is_valid_slug(""));
    }
}
