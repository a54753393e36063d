//! Page orchestration: fetch, render, stream.

use std::fmt::Display;

use futures::Sink;
use roster_core::{PageConfig, PageError, TimingContext};
use roster_data::{FetchClient, Transport};
use roster_observability::StructuredLogger;
use roster_streaming::{escape_html, Element, HeadContent, Shell, StreamingSink};

use crate::data::Document;
use crate::{render_all, PAGE_STYLES};

/// The student directory page.
///
/// `load` runs the chained fetch and owns the output container;
/// `demo_linear` runs the linear fetch for its log output only. `stream`
/// starts both and lets them complete in either order.
pub struct StudentDirectoryPage<T> {
    client: FetchClient<T>,
    config: PageConfig,
}

impl<T: Transport> StudentDirectoryPage<T> {
    pub fn new(client: FetchClient<T>, config: PageConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn client(&self) -> &FetchClient<T> {
        &self.client
    }

    fn logger(&self) -> &StructuredLogger {
        self.client.logger()
    }

    /// Document shell with the title heading before the container.
    pub fn shell(&self) -> Shell {
        let head = HeadContent::new(&self.config.title)
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(PAGE_STYLES);

        Shell::new(head).with_body_start(format!(
            "<main>\n<h1>{}</h1>\n",
            escape_html(&self.config.title)
        ))
    }

    /// An empty output container.
    pub fn container(&self) -> Element {
        Element::new("div").with_id(&self.config.container_id)
    }

    /// Fetch with the chained strategy and render into a fresh container.
    ///
    /// Any fetch failure leaves only the fallback message in the container.
    pub async fn load(&self) -> Element {
        let mut container = self.container();

        match self
            .client
            .fetch_chained::<Document>(Some(&self.config.data_path))
            .await
        {
            Ok(document) => {
                render_all(&document, &mut container);
                self.logger()
                    .info_builder("rendered")
                    .field_i64("students", document.students.len() as i64)
                    .field_i64("courses", document.courses.len() as i64)
                    .field_i64("instructors", document.instructors.len() as i64)
                    .emit();
            }
            Err(err) => {
                container.set_text(&self.config.fallback_message);
                self.logger()
                    .warn_builder("rendered fallback")
                    .field("error", err.to_string())
                    .emit();
            }
        }

        container
    }

    /// Fetch with the linear strategy; the result is discarded.
    pub async fn demo_linear(&self) {
        // Failures are already logged by the client.
        let _ = self
            .client
            .fetch_linear::<Document>(Some(&self.config.data_path))
            .await;
    }

    /// Load both ways concurrently and return the rendered container.
    pub async fn run(&self) -> Element {
        let (container, ()) = futures::join!(self.load(), self.demo_linear());
        container
    }

    /// Stream the full page into `sink`.
    ///
    /// The shell goes out before either fetch starts. Each rendered section
    /// is a named chunk; a fallback container is one chunk named after the
    /// container id.
    pub async fn stream<S, E>(&self, sink: &mut StreamingSink<S, E>) -> Result<(), PageError>
    where
        S: Sink<Vec<u8>, Error = E> + Unpin,
        E: Display,
    {
        let shell = self.shell();
        sink.send_shell(&shell.render_opening()).await?;

        let (written, ()) = futures::join!(
            async {
                let container = self.load().await;
                write_container(sink, &container, &self.config.container_id).await
            },
            self.demo_linear(),
        );
        written?;

        sink.send_raw(shell.render_closing().into_bytes()).await?;
        sink.complete().await?;

        self.log_timings(sink.timing(), sink.sections_sent());
        Ok(())
    }

    /// Render the whole page to a string.
    pub async fn render_document(&self) -> Result<String, PageError> {
        let mut sink = StreamingSink::new(Vec::<Vec<u8>>::new(), TimingContext::new());
        self.stream(&mut sink).await?;

        String::from_utf8(sink.into_inner().concat())
            .map_err(|e| PageError::StreamError(e.to_string()))
    }

    fn log_timings(&self, timing: &TimingContext, sections: &[String]) {
        for name in sections {
            if let Some(section) = timing.section_timing(name) {
                self.logger()
                    .debug_builder("section sent")
                    .field("section", name.as_str())
                    .duration_us("duration_us", section.duration)
                    .emit();
            }
        }

        let mut builder = self
            .logger()
            .info_builder("page complete")
            .field_i64("sections", sections.len() as i64)
            .duration_us("total_us", timing.elapsed());
        if let Some(shell) = timing.time_to_shell() {
            builder = builder.duration_us("shell_us", shell);
        }
        builder.emit();
    }
}

async fn write_container<S, E>(
    sink: &mut StreamingSink<S, E>,
    container: &Element,
    container_id: &str,
) -> Result<(), PageError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    if container.children().is_empty() {
        return sink.send_section(container_id, &container.render()).await;
    }

    sink.send_raw(container.render_open().into_bytes()).await?;
    for section in container.children() {
        let name = section.attr("data-section").unwrap_or(container_id);
        sink.send_section(name, &section.render()).await?;
    }
    sink.send_raw(container.render_close().into_bytes()).await
}
