//! Shell-first streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use roster_core::{LifecyclePhase, PageError, TimingContext};

/// State of the streaming sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Shell not yet sent.
    Initial,
    /// Shell has been sent, sections can be streamed.
    ShellSent,
    /// Response has been completed.
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// Generic over any `Sink<Vec<u8>>`, including Spin's `OutgoingBody` and
/// a plain `Vec<Vec<u8>>` in tests.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
        }
    }

    /// Send the shell HTML. Must be called before any sections.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), PageError> {
        if self.state != SinkState::Initial {
            return Err(PageError::StreamError(
                "Shell already sent or sink completed".to_string(),
            ));
        }

        self.timing.mark("shell_start");
        self.write(html.as_bytes().to_vec()).await?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), PageError> {
        self.check_open()?;

        self.timing.mark_section_start(name);
        self.write(html.as_bytes().to_vec()).await?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Send raw bytes. Shell must be sent first.
    pub async fn send_raw(&mut self, bytes: Vec<u8>) -> Result<(), PageError> {
        self.check_open()?;
        self.write(bytes).await
    }

    /// Complete the response.
    pub async fn complete(&mut self) -> Result<(), PageError> {
        self.inner
            .close()
            .await
            .map_err(|e| PageError::StreamError(e.to_string()))?;
        self.state = SinkState::Completed;
        self.timing.mark("complete");
        Ok(())
    }

    /// Names of the sections sent, in order.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Get the current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match self.state {
            SinkState::Initial => LifecyclePhase::Start,
            SinkState::ShellSent => match self.sections_sent.last() {
                Some(last) => LifecyclePhase::SectionSent(last.clone()),
                None => LifecyclePhase::ShellSent,
            },
            SinkState::Completed => LifecyclePhase::Completion,
        }
    }

    /// Get timing context reference.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn check_open(&self) -> Result<(), PageError> {
        match self.state {
            SinkState::Initial => Err(PageError::ShellNotSent),
            SinkState::Completed => Err(PageError::StreamError(
                "Sink already completed".to_string(),
            )),
            SinkState::ShellSent => Ok(()),
        }
    }

    async fn write(&mut self, bytes: Vec<u8>) -> Result<(), PageError> {
        self.inner
            .send(bytes)
            .await
            .map_err(|e| PageError::StreamError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use futures::executor::block_on;

    use super::*;

    fn sink() -> StreamingSink<Vec<Vec<u8>>, Infallible> {
        StreamingSink::new(Vec::new(), TimingContext::new())
    }

    #[test]
    fn test_section_before_shell_rejected() {
        let mut sink = sink();
        let err = block_on(sink.send_section("students", "<div></div>")).unwrap_err();
        assert!(matches!(err, PageError::ShellNotSent));
        assert_eq!(sink.phase(), LifecyclePhase::Start);
    }

    #[test]
    fn test_shell_then_sections() {
        let mut sink = sink();
        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            assert_eq!(sink.phase(), LifecyclePhase::ShellSent);
            sink.send_section("students", "<div>s</div>").await.unwrap();
            sink.send_section("courses", "<div>c</div>").await.unwrap();
            sink.send_raw(b"</html>".to_vec()).await.unwrap();
        });

        assert_eq!(sink.sections_sent(), ["students", "courses"]);
        assert_eq!(sink.phase(), LifecyclePhase::SectionSent("courses".to_string()));
        assert!(sink.timing().section_timing("students").is_some());

        let chunks = sink.into_inner();
        assert_eq!(chunks.concat(), b"<html><div>s</div><div>c</div></html>");
    }

    #[test]
    fn test_second_shell_and_writes_after_complete_rejected() {
        let mut sink = sink();
        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            assert!(sink.send_shell("<html>").await.is_err());
            sink.complete().await.unwrap();
            assert!(matches!(
                sink.send_raw(Vec::new()).await,
                Err(PageError::StreamError(_))
            ));
        });
        assert_eq!(sink.phase(), LifecyclePhase::Completion);
    }
}
