pub mod detail;
pub mod handlers;
pub mod home;
pub mod shell;

use tracing::error;

use crate::dom::{Document, DomError, Element};
use crate::places::PlacesRepository;
use crate::render::div;

pub use handlers::router;

pub const HOME_PATH: &str = "/";
pub const INIT_ERROR: &str =
    "Erro ao inicializar a aplicação. Por favor, tente novamente mais tarde.";

/// Where the browser should go instead of showing the current page.
pub trait Navigator: Send {
    fn navigate(&mut self, location: &str);
}

/// Remembers the last requested location; handlers turn it into a redirect.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    location: Option<String>,
}

impl RecordingNavigator {
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, location: &str) {
        self.location = Some(location.to_string());
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    pub slug: Option<String>,
}

impl PageQuery {
    /// First occurrence wins when a parameter is repeated.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let slug = pairs
            .iter()
            .find(|(key, _)| key == "slug")
            .map(|(_, value)| value.clone());
        Self { slug }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Detail,
}

impl Page {
    pub fn from_path(path: &str) -> Option<Page> {
        match path {
            "/" | "/index.html" => Some(Page::Home),
            "/detalhe.html" => Some(Page::Detail),
            _ => None,
        }
    }

    pub fn document(self) -> Document {
        match self {
            Page::Home => shell::home_document(),
            Page::Detail => shell::detail_document(),
        }
    }
}

pub(crate) fn alert(message: &str) -> Element {
    div("alert alert-danger", Some(message))
}

/// Replaces the children of `el` with a single danger alert.
pub(crate) fn show_alert(el: &mut Element, message: &str) {
    el.replace_children(vec![alert(message).into()]);
}

/// Runs the controller for `path` against `doc`. Unknown paths leave the
/// document untouched; a failure that escapes the controller replaces
/// `<main>` with a generic banner.
pub async fn initialize(
    path: &str,
    query: &PageQuery,
    doc: &mut Document,
    repo: &dyn PlacesRepository,
    nav: &mut dyn Navigator,
) {
    let result: Result<(), DomError> = match Page::from_path(path) {
        Some(Page::Home) => home::load_home_page(doc, repo).await,
        Some(Page::Detail) => detail::load_detail_page(doc, query, repo, nav).await,
        None => Ok(()),
    };

    if let Err(e) = result {
        error!(error = %e, %path, "error initializing page");
        match doc.by_tag_mut("main") {
            Ok(main) => show_alert(main, INIT_ERROR),
            Err(e) => error!(error = %e, "page has no main element"),
        }
    }
}
