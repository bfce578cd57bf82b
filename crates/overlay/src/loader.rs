//! Adapter from the timeline's loader seam to the HTTP client and a sink.

use jiff::civil::Date;
use tracing::warn;
use usdm_timeline::OverlayLoader;

use crate::client::HttpOverlayClient;
use crate::data::OverlayData;

/// Display seam for a fetched boundary dataset.
pub trait OverlaySink {
    /// Renders `data` for `date`, replacing any previous rendering.
    fn render(&mut self, date: Date, data: &OverlayData);

    /// Removes any currently rendered overlay.
    fn clear(&mut self);
}

/// An [`OverlayLoader`] that fetches over HTTP and hands the result to a
/// sink. On any failure the sink is cleared and the condition logged; the
/// selection that requested the load stands.
#[derive(Debug)]
pub struct FetchingLoader<S> {
    client: HttpOverlayClient,
    sink: S,
}

impl<S: OverlaySink> FetchingLoader<S> {
    pub fn new(sink: S) -> Self {
        Self {
            client: HttpOverlayClient::new(),
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: OverlaySink> OverlayLoader for FetchingLoader<S> {
    fn load(&mut self, date: Date) {
        match self.client.fetch(date) {
            Ok(data) => self.sink.render(date, &data),
            Err(e) => {
                warn!(%date, error = %e, "boundary dataset unavailable; clearing overlay");
                self.sink.clear();
            }
        }
    }
}
