//! Spin HTTP component.

use spin_sdk::http::{Fields, IncomingRequest, Method as SpinMethod, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use medisync_sdk::medisync_core::{Method, RequestContext};
use medisync_sdk::medisync_observability::{LogFormat, LogLevel, StructuredLogger};
use medisync_sdk::medisync_streaming::StreamingSink;

use crate::page::Storefront;
use crate::routes::Page;
use crate::WORKLOAD;

/// The catalog is static, so every page is publicly cacheable.
const CACHE_CONTROL: &str = "public, max-age=60";

#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    let path_with_query = req.path_with_query().unwrap_or_default();
    let method = to_method(&req.method());

    let mut ctx = RequestContext::new(method.unwrap_or(Method::Get), &path_with_query);
    let request_id = ctx.request_id.clone();

    let logger = StructuredLogger::new(request_id.clone())
        .with_workload(WORKLOAD)
        .with_route(&ctx.path)
        .with_min_level(LogLevel::Info)
        .with_format(LogFormat::Json);

    logger
        .info_builder("Request started")
        .field("method", method.map(|m| m.as_str()).unwrap_or("OTHER"))
        .field("path", path_with_query.as_str())
        .emit();

    let store = Storefront::builtin();
    let page = match method {
        Some(_) => store.resolve(&mut ctx),
        None => Page::MethodNotAllowed,
    };
    store.log_warnings(&page, &logger);

    let body = store.page(&page, &ctx.path);
    logger
        .info_builder("Route resolved")
        .field("page", page.name())
        .field_u64("status", body.status as u64)
        .emit();

    let mut header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("x-request-id".to_owned(), request_id.to_string().into()),
        ("cache-control".to_owned(), CACHE_CONTROL.into()),
    ];
    if page == Page::MethodNotAllowed {
        header_list.push(("allow".to_owned(), "GET, HEAD".into()));
    }

    let response = match Fields::from_list(&header_list) {
        Ok(headers) => OutgoingResponse::new(headers),
        Err(e) => {
            logger
                .error_builder("Invalid response headers")
                .field("error", format!("{:?}", e))
                .emit();
            return;
        }
    };
    if response.set_status_code(body.status).is_err() {
        logger
            .error_builder("Invalid status code")
            .field_u64("status", body.status as u64)
            .emit();
        return;
    }

    let stream_body = method == Some(Method::Get) && page != Page::MethodNotAllowed;
    let out = response.take_body();
    response_out.set(response);
    if !stream_body {
        return;
    }

    let mut sink = StreamingSink::new(out, ctx.timing.clone());
    match body.stream(&mut sink, &logger).await {
        Ok(()) => {
            let mut entry = logger
                .info_builder("Request completed")
                .field_u64("bytes", sink.bytes_sent() as u64)
                .field_u64("sections", sink.sections_sent().len() as u64);
            if let Some(ttfb) = sink.timing().time_to_shell() {
                entry = entry.duration_us("time_to_shell_us", ttfb);
            }
            entry.emit();
        }
        Err(e) => {
            logger
                .error_builder("Stream failed")
                .field("error", e.to_string())
                .field("phase", format!("{:?}", sink.phase()))
                .emit();
        }
    }
}

/// Methods the storefront understands. Anything else is a 405.
fn to_method(method: &SpinMethod) -> Option<Method> {
    match method {
        SpinMethod::Get => Some(Method::Get),
        SpinMethod::Head => Some(Method::Head),
        SpinMethod::Post => Some(Method::Post),
        SpinMethod::Put => Some(Method::Put),
        SpinMethod::Delete => Some(Method::Delete),
        SpinMethod::Patch => Some(Method::Patch),
        SpinMethod::Options => Some(Method::Options),
        _ => None,
    }
}
