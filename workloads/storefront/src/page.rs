//! Page composition: shell, named sections, and status for each route.

use std::fmt::Display;

use futures::Sink;
use medisync_sdk::medisync_catalog::{Catalog, MedicineId, Selection};
use medisync_sdk::medisync_core::{RequestContext, StoreConfig, WorkloadError, WorkloadManifest};
use medisync_sdk::medisync_observability::StructuredLogger;
use medisync_sdk::medisync_streaming::{HeadContent, Shell, StreamingSink};

use crate::routes::{self, Page};
use crate::sections::{
    render_detail, render_listing, render_medicine_not_found, render_navbar, render_not_found,
};
use crate::state::ListingState;
use crate::styles::STOREFRONT_STYLES;
use crate::view::{DetailView, ListingView, NavbarView};

/// Section name for not-found bodies.
pub const NOT_FOUND: &str = "not-found";

/// Name of the final chunk carrying the closing markup.
pub const CLOSING: &str = "closing";

/// One named, independently streamed part of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: &'static str,
    pub html: String,
}

/// Everything needed to write a page: status, shell, and sections.
#[derive(Debug, Clone)]
pub struct PageBody {
    pub status: u16,
    pub shell: Shell,
    pub sections: Vec<Section>,
}

impl PageBody {
    /// The whole document as one string.
    pub fn render(&self) -> String {
        let mut html = self.shell.render_opening();
        for section in &self.sections {
            html.push_str(&section.html);
        }
        html.push_str(&self.shell.render_closing());
        html
    }

    /// Stream the shell, then each section, then the closing markup.
    pub async fn stream<S, E>(
        &self,
        sink: &mut StreamingSink<S, E>,
        logger: &StructuredLogger,
    ) -> Result<(), WorkloadError>
    where
        S: Sink<Vec<u8>, Error = E> + Unpin,
        E: Display,
    {
        sink.send_shell(&self.shell.render_opening()).await?;

        for section in &self.sections {
            sink.send_section(section.name, &section.html).await?;

            if let Some(timing) = sink.timing().section_timing(section.name) {
                logger
                    .debug_builder("Section sent")
                    .field("section", section.name)
                    .duration_us("offset_us", timing.start)
                    .duration_us("duration_us", timing.duration)
                    .emit();
            }
        }

        sink.send_section(CLOSING, &self.shell.render_closing()).await?;
        sink.complete().await
    }
}

/// A page rendered in one piece.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub status: u16,
    pub html: String,
}

/// The storefront: configuration, catalog, and routes.
#[derive(Debug, Clone)]
pub struct Storefront {
    config: StoreConfig,
    catalog: Catalog,
    manifest: WorkloadManifest,
}

impl Storefront {
    pub fn new(config: StoreConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog,
            manifest: routes::manifest(),
        }
    }

    /// Default branding over the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(StoreConfig::default(), Catalog::builtin())
    }

    /// Resolve the page a request asks for.
    pub fn resolve(&self, ctx: &mut RequestContext) -> Page {
        Page::resolve(&self.manifest, ctx)
    }

    /// Build the body for `page`. `path` is echoed on the not-found page.
    pub fn page(&self, page: &Page, path: &str) -> PageBody {
        let (status, title, sections) = match page {
            Page::Listing(selection) => (
                200,
                self.listing_title(selection),
                vec![Section {
                    name: routes::LISTING,
                    html: self.render_listing(selection),
                }],
            ),
            Page::Medicine(id) => self.detail(id),
            Page::NotFound => (
                404,
                format!("Page not found - {}", self.config.title),
                vec![Section {
                    name: NOT_FOUND,
                    html: render_not_found(path),
                }],
            ),
            Page::MethodNotAllowed => (
                405,
                format!("Method not allowed - {}", self.config.title),
                Vec::new(),
            ),
        };

        PageBody {
            status,
            shell: self.shell(title),
            sections,
        }
    }

    /// Render `page` synchronously.
    pub fn render_page(&self, page: &Page, path: &str) -> RenderedPage {
        let body = self.page(page, path);
        RenderedPage {
            status: body.status,
            html: body.render(),
        }
    }

    /// Log catalog problems that affect `page`.
    ///
    /// Records with an unknown category are only reachable through `all`,
    /// and an unknown selection shows an empty grid.
    pub fn log_warnings(&self, page: &Page, logger: &StructuredLogger) {
        for medicine in self.catalog.uncategorized() {
            logger
                .debug_builder("Medicine has no known category")
                .field("medicine_id", medicine.id.as_str())
                .field("category", medicine.category.as_str())
                .emit();
        }

        if let Page::Listing(selection @ Selection::Category(label)) = page {
            if !self.catalog.is_known_category(label) {
                logger
                    .warn_builder("Unknown category selected")
                    .field("category", label.as_str())
                    .field_u64("visible", self.catalog.count(selection) as u64)
                    .emit();
            }
        }
    }

    fn shell(&self, title: String) -> Shell {
        let head = HeadContent::new(title)
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_meta("description", &self.config.tagline)
            .with_style(STOREFRONT_STYLES);

        let navbar = render_navbar(&NavbarView::from_config(&self.config));
        Shell::new(head).with_body_start(format!("<body>\n{}\n<main>\n", navbar))
    }

    fn listing_title(&self, selection: &Selection) -> String {
        match selection {
            Selection::All => self.config.title.clone(),
            Selection::Category(label) => format!("{} - {}", label, self.config.title),
        }
    }

    /// Render the listing by driving a `ListingState` to `selection`.
    fn render_listing(&self, selection: &Selection) -> String {
        let mut html = String::new();
        {
            let config = &self.config;
            let categories = self.catalog.categories();
            let mut state = ListingState::new(&self.catalog);
            state.subscribe(|selection, visible| {
                html = render_listing(&ListingView::new(config, categories, selection, visible));
            });
            state.select(selection.clone());
        }
        html
    }

    fn detail(&self, id: &MedicineId) -> (u16, String, Vec<Section>) {
        match self.catalog.get(id.as_str()) {
            Some(medicine) => (
                200,
                format!("{} - {}", medicine.name, self.config.title),
                vec![Section {
                    name: routes::DETAIL,
                    html: render_detail(&DetailView::from_medicine(medicine, &self.config.currency)),
                }],
            ),
            None => (
                404,
                format!("Medicine not found - {}", self.config.title),
                vec![Section {
                    name: NOT_FOUND,
                    html: render_medicine_not_found(id.as_str()),
                }],
            ),
        }
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::builtin()
    }
}
