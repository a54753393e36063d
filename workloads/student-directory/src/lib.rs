//! Student directory page - Spin workload.
//!
//! Streams the page shell, then the rendered roster sections, for every
//! GET. The roster document is fetched from the same app (see `spin.toml`);
//! `?data=<path>` selects a different document.

use roster_core::{PageConfig, RequestContext};
use roster_observability::{LogFormat, LogLevel, StructuredLogger};

/// Workload name used in log entries.
pub const WORKLOAD: &str = "student-directory";

/// Page configuration for a request, honouring a non-empty `?data=` override.
pub fn page_config(ctx: &RequestContext) -> PageConfig {
    match ctx.query_param("data").map(str::trim) {
        Some(path) if !path.is_empty() => PageConfig::default().with_data_path(path),
        _ => PageConfig::default(),
    }
}

/// Request-scoped logger.
pub fn request_logger(ctx: &RequestContext) -> StructuredLogger {
    StructuredLogger::new(ctx.request_id.clone())
        .with_workload(WORKLOAD)
        .with_route(&ctx.path)
        .with_min_level(LogLevel::Debug)
        .with_format(LogFormat::Human)
}

#[cfg(target_arch = "wasm32")]
mod component {
    use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
    use spin_sdk::http_component;

    use roster_core::RequestContext;
    use roster_data::{FetchClient, SpinTransport};
    use roster_page::StudentDirectoryPage;
    use roster_streaming::StreamingSink;

    use super::{page_config, request_logger};

    #[http_component]
    async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
        let method = match req.method() {
            Method::Get => roster_core::Method::Get,
            Method::Head => roster_core::Method::Head,
            _ => roster_core::Method::Other,
        };
        let ctx = RequestContext::new(method, req.path_with_query().unwrap_or_default());
        let logger = request_logger(&ctx);

        if ctx.method != roster_core::Method::Get {
            respond_empty(response_out, 405);
            return;
        }

        let config = page_config(&ctx);
        logger
            .info_builder("directory request started")
            .field("data_path", config.data_path.as_str())
            .emit();

        let header_list: Vec<(String, Vec<u8>)> = vec![
            ("content-type".to_owned(), "text/html; charset=utf-8".into()),
            ("x-request-id".to_owned(), ctx.request_id.to_string().into()),
        ];
        let Ok(headers) = Fields::from_list(&header_list) else {
            logger.error("Failed to build response headers");
            respond_empty(response_out, 500);
            return;
        };
        let response = OutgoingResponse::new(headers);
        if response.set_status_code(200).is_err() {
            logger.error("Failed to set status code");
        }

        let body = response.take_body();
        response_out.set(response);
        let mut sink = StreamingSink::new(body, ctx.timing.clone());

        let client = FetchClient::new(SpinTransport, logger.clone());
        let page = StudentDirectoryPage::new(client, config);

        if let Err(e) = page.stream(&mut sink).await {
            logger
                .error_builder("Failed to stream page")
                .field("error", e.to_string())
                .emit();
            return;
        }
        logger.info("directory request complete");
    }

    fn respond_empty(response_out: ResponseOutparam, status: u16) {
        let Ok(headers) = Fields::from_list(&[]) else {
            return;
        };
        let response = OutgoingResponse::new(headers);
        let _ = response.set_status_code(status);
        response_out.set(response);
    }
}
