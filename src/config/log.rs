use educe::Educe;
use serde::{Deserialize, Serialize};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    #[default]
    Plain,
    /// One JSON object per event.
    Json,
}

/// `SONGBOOK_LOG__FORMAT` and `SONGBOOK_LOG__TIME`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Educe)]
#[educe(Default)]
#[serde(default)]
pub struct Log {
    #[educe(Default(expression = true))]
    pub time: bool,
    pub format: Format,
}

impl Log {
    pub fn layer<S>(&self) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        let layer = tracing_subscriber::fmt::layer();
        match (self.format, self.time) {
            (Format::Plain, true) => layer.boxed(),
            (Format::Plain, false) => layer.without_time().boxed(),
            (Format::Json, true) => layer.json().boxed(),
            (Format::Json, false) => layer.json().without_time().boxed(),
        }
    }
}
