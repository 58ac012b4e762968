//! Static markup of the two pages. Controllers fill the containers by id.

use crate::dom::{Document, Element};
use crate::render::div;

pub const HIGHLIGHT_CAROUSEL_ID: &str = "hightlight-carousel";
pub const PHOTOS_CAROUSEL_ID: &str = "photos-carousel";

fn navbar() -> Element {
    Element::new("nav")
        .with_classes("navbar navbar-expand-lg bg-body-tertiary")
        .child(
            div("container", None).child(
                Element::new("a")
                    .with_classes("navbar-brand")
                    .attr("href", "/")
                    .text("Lugares"),
            ),
        )
}

fn carousel_control(carousel_id: &str, direction: &str, label: &str) -> Element {
    Element::new("button")
        .with_classes(&format!("carousel-control-{direction}"))
        .attr("type", "button")
        .attr("data-bs-target", format!("#{carousel_id}"))
        .attr("data-bs-slide", direction)
        .child(
            Element::new("span")
                .with_classes(&format!("carousel-control-{direction}-icon"))
                .attr("aria-hidden", "true"),
        )
        .child(Element::new("span").with_classes("visually-hidden").text(label))
}

fn carousel(id: &str) -> Element {
    div("carousel slide mb-4", None)
        .attr("id", id)
        .attr("data-bs-ride", "carousel")
        .child(div("carousel-indicators", None))
        .child(div("carousel-inner", None))
        .child(carousel_control(id, "prev", "Anterior"))
        .child(carousel_control(id, "next", "Próximo"))
}

fn info_row(label: &str, id: &str) -> Element {
    Element::new("p")
        .child(Element::new("strong").text(format!("{label}: ")))
        .child(Element::new("span").attr("id", id))
}

fn list_section(title: &str, id: &str) -> Element {
    Element::new("section")
        .with_classes("mb-4")
        .child(Element::new("h2").with_classes("h4").text(title))
        .child(div("list-group", None).attr("id", id))
}

pub fn home_document() -> Document {
    let main = Element::new("main")
        .with_classes("container py-4")
        .child(carousel(HIGHLIGHT_CAROUSEL_ID))
        .child(Element::new("h2").with_classes("mb-3").text("Lugares para visitar"))
        .child(div("row", None).attr("id", "places"));

    Document::new("Lugares", Element::new("body").child(navbar()).child(main))
}

pub fn detail_document() -> Document {
    let summary = Element::new("section")
        .with_classes("mb-4")
        .child(Element::new("h1").attr("id", "place-name"))
        .child(
            Element::new("img")
                .attr("id", "place-thumbnail")
                .attr("alt", "")
                .with_classes("img-fluid rounded mb-3"),
        )
        .child(Element::new("p").attr("id", "place-description").with_classes("lead"));

    let info = Element::new("section")
        .with_classes("mb-4")
        .child(info_row("Horário de funcionamento", "place-opening-hours"))
        .child(info_row("Endereço", "place-address"))
        .child(info_row("Contato", "place-phone"))
        .child(info_row("Faixa de preço", "place-price-range"))
        .child(info_row("Site", "place-website"));

    let ratings = Element::new("section")
        .with_classes("mb-4")
        .child(Element::new("h2").with_classes("h4").text("Avaliações"))
        .child(
            div("d-flex align-items-center gap-2 mb-3", None)
                .child(Element::new("span").attr("id", "rating-average").with_classes("fs-3"))
                .child(div("", None).attr("id", "rating-indicator"))
                .child(
                    Element::new("span")
                        .with_classes("text-body-secondary")
                        .child(Element::new("span").attr("id", "rating-count"))
                        .child(Element::new("span").text(" avaliações")),
                ),
        )
        .child(div("", None).attr("id", "reviews"));

    let main = Element::new("main")
        .with_classes("container py-4")
        .child(summary)
        .child(info)
        .child(list_section("Destaques", "place-highlights"))
        .child(list_section("Comodidades", "place-amenities"))
        .child(list_section("Atividades", "place-activities"))
        .child(
            Element::new("section")
                .with_classes("mb-4")
                .child(Element::new("h2").with_classes("h4").text("Localização"))
                .child(div("", None).attr("id", "place-map")),
        )
        .child(carousel(PHOTOS_CAROUSEL_ID))
        .child(ratings);

    Document::new(
        "Detalhes do lugar",
        Element::new("body").child(navbar()).child(main),
    )
}
