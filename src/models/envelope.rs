use serde::Serialize;

use super::ErrorEvent;

/// The record published for a single reported event.
///
/// Envelopes borrow from the reporter and the event; they live only for the
/// duration of one `report` call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<'a> {
    /// The emitting service.
    pub source: &'a str,

    /// See [`ErrorEvent::message`].
    pub message: &'a str,

    /// See [`ErrorEvent::code`].
    pub code: &'a str,

    /// See [`ErrorEvent::severity`].
    pub severity: &'a str,

    /// See [`ErrorEvent::additional_info`].
    pub additional_info: &'a str,

    /// Rendered call stack of the reporting site. Omitted entirely when
    /// capture is disabled, empty when no trace was available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacktrace: Option<String>,
}

impl<'a> Envelope<'a> {
    /// Builds an envelope from the reporting service's name and an event.
    pub fn new(source: &'a str, event: &'a ErrorEvent, stacktrace: Option<String>) -> Self {
        Self {
            source,
            message: &event.message,
            code: &event.code,
            severity: &event.severity,
            additional_info: &event.additional_info,
            stacktrace,
        }
    }
}
