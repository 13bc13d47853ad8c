//! Offline page rendering.

use std::convert::Infallible;

use anyhow::{Context as _, Result};
use serde::Serialize;

use medisync_sdk::medisync_catalog::{MedicineId, Selection};
use medisync_sdk::medisync_core::{RequestId, TimingContext};
use medisync_sdk::medisync_observability::{LogFormat, LogLevel, StructuredLogger};
use medisync_sdk::medisync_streaming::StreamingSink;
use medisync_storefront::{Page, Storefront, WORKLOAD};

use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let store = Storefront::new(ctx.config.store.clone(), catalog);

    let page = page_for(&args);
    let logger = StructuredLogger::new(RequestId::generate())
        .with_workload(WORKLOAD)
        .with_route(page.name())
        .with_format(LogFormat::Human)
        .with_min_level(if ctx.output.is_verbose() {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        });

    store.log_warnings(&page, &logger);

    let rendered = render(&store, &page, &logger).await?;
    if rendered.status != 200 {
        ctx.output
            .warn(&format!("Page rendered with status {}", rendered.status));
    }

    match &args.out {
        Some(out) => {
            let path = ctx.resolve_path(out);
            std::fs::write(&path, &rendered.html)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            if ctx.output.is_json() {
                ctx.output.json(&RenderSummary {
                    page: page.name(),
                    status: rendered.status,
                    bytes: rendered.html.len(),
                    sections: rendered.sections.clone(),
                    out: Some(path.display().to_string()),
                });
            } else {
                ctx.output.success(&format!(
                    "Wrote {} ({} bytes, sections: {})",
                    path.display(),
                    rendered.html.len(),
                    rendered.sections.join(", ")
                ));
            }
        }
        None => println!("{}", rendered.html),
    }

    Ok(())
}

/// The page selected by the command-line flags.
fn page_for(args: &RenderArgs) -> Page {
    match &args.medicine {
        Some(id) => Page::Medicine(MedicineId::new(id.as_str())),
        None => Page::Listing(
            args.category
                .as_deref()
                .map(Selection::parse)
                .unwrap_or_default(),
        ),
    }
}

/// A page streamed into memory.
#[derive(Debug)]
pub struct StreamedPage {
    pub status: u16,
    pub html: String,
    pub sections: Vec<String>,
}

#[derive(Debug, Serialize)]
struct RenderSummary {
    page: &'static str,
    status: u16,
    bytes: usize,
    sections: Vec<String>,
    out: Option<String>,
}

/// Stream `page` through the same sink the workload uses, collecting chunks.
pub async fn render(store: &Storefront, page: &Page, logger: &StructuredLogger) -> Result<StreamedPage> {
    let body = store.page(page, "/");

    let mut sink: StreamingSink<Vec<Vec<u8>>, Infallible> =
        StreamingSink::new(Vec::new(), TimingContext::new());
    body.stream(&mut sink, logger)
        .await
        .context("Failed to render page")?;

    let sections = sink.sections_sent().to_vec();
    let bytes: Vec<u8> = sink.into_inner().concat();
    let html = String::from_utf8(bytes).context("Rendered page is not UTF-8")?;

    Ok(StreamedPage {
        status: body.status,
        html,
        sections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use medisync_sdk::medisync_catalog::Catalog;
    use medisync_sdk::medisync_core::StoreConfig;

    fn logger() -> StructuredLogger {
        StructuredLogger::new(RequestId::from_string("test")).with_min_level(LogLevel::Error)
    }

    fn args(category: Option<&str>, medicine: Option<&str>) -> RenderArgs {
        RenderArgs {
            category: category.map(String::from),
            medicine: medicine.map(String::from),
            out: None,
        }
    }

    #[test]
    fn test_page_for_flags() {
        assert_eq!(page_for(&args(None, None)), Page::Listing(Selection::All));
        assert_eq!(
            page_for(&args(Some("Pain Relief"), None)),
            Page::Listing(Selection::category("Pain Relief"))
        );
        assert_eq!(
            page_for(&args(None, Some("2"))),
            Page::Medicine(MedicineId::new("2"))
        );
    }

    #[tokio::test]
    async fn test_render_matches_sync_render() {
        let store = Storefront::new(StoreConfig::default(), Catalog::builtin());
        let page = Page::Listing(Selection::category("Pain Relief"));

        let streamed = render(&store, &page, &logger()).await.unwrap();
        assert_eq!(streamed.status, 200);
        assert_eq!(streamed.sections, vec!["listing", "closing"]);
        assert_eq!(streamed.html, store.render_page(&page, "/").html);
    }

    #[tokio::test]
    async fn test_render_unknown_medicine() {
        let store = Storefront::builtin();
        let page = Page::Medicine(MedicineId::new("404"));

        let streamed = render(&store, &page, &logger()).await.unwrap();
        assert_eq!(streamed.status, 404);
        assert_eq!(streamed.sections, vec!["not-found", "closing"]);
    }
}
