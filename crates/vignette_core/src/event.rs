//! Progress events streamed from the orchestrator to the caller.

use serde::{Deserialize, Serialize};

/// One event in a generation sequence's progress stream.
///
/// Events serialize to the line-delimited JSON wire shapes consumed by
/// callers. Ordering invariants: `PanelStarted`/`PanelDone` pairs appear
/// in strictly increasing position order, `SequenceComplete` is emitted
/// exactly once after three `PanelDone` events, and `Failed` terminates
/// the stream with nothing after it.
///
/// Variant order matters: deserialization is untagged, so more specific
/// shapes must be tried before shapes that are field subsets of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProgressEvent {
    /// The sequence failed; no further events follow.
    #[serde(rename_all = "camelCase")]
    Failed {
        /// Always `true` on the wire
        error: bool,
        /// Human-readable failure message
        message: String,
        /// Failing panel position, when the failure is panel-specific
        #[serde(default, skip_serializing_if = "Option::is_none")]
        panel_number: Option<u8>,
        /// Whether the provider rejected the prompt on policy grounds
        is_safety_error: bool,
    },
    /// All panels generated; terminal success event.
    #[serde(rename_all = "camelCase")]
    SequenceComplete {
        /// Always `true` on the wire
        complete: bool,
        /// Image URLs in panel order
        panels: Vec<String>,
        /// Panel captions, when caption generation was enabled and succeeded
        #[serde(default, skip_serializing_if = "Option::is_none")]
        captions: Option<[String; 3]>,
    },
    /// A panel finished generating.
    #[serde(rename_all = "camelCase")]
    PanelDone {
        /// Panel position, 1-3
        panel_number: u8,
        /// URL of the generated image
        image_url: String,
        /// Human-readable progress message
        message: String,
    },
    /// A panel generation call is starting.
    #[serde(rename_all = "camelCase")]
    PanelStarted {
        /// Panel position, 1-3
        panel_number: u8,
        /// Human-readable progress message
        message: String,
    },
    /// The sequence was admitted and sanitized.
    #[serde(rename_all = "camelCase")]
    Queued {
        /// Human-readable progress message
        message: String,
        /// Sanitizer warnings, omitted when empty
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        sanitization_warnings: Vec<String>,
    },
}

impl ProgressEvent {
    /// Build the `Queued` event carrying sanitizer warnings.
    pub fn queued(sanitization_warnings: Vec<String>) -> Self {
        ProgressEvent::Queued {
            message: "Starting comic generation...".to_string(),
            sanitization_warnings,
        }
    }

    /// Build the `PanelStarted` event for a position.
    pub fn panel_started(panel_number: u8) -> Self {
        ProgressEvent::PanelStarted {
            panel_number,
            message: format!("Generating panel {} of 3...", panel_number),
        }
    }

    /// Build the `PanelDone` event for a position.
    pub fn panel_done(panel_number: u8, image_url: impl Into<String>) -> Self {
        ProgressEvent::PanelDone {
            panel_number,
            image_url: image_url.into(),
            message: format!("Panel {} complete!", panel_number),
        }
    }

    /// Build the terminal success event.
    pub fn sequence_complete(panels: Vec<String>, captions: Option<[String; 3]>) -> Self {
        ProgressEvent::SequenceComplete {
            complete: true,
            panels,
            captions,
        }
    }

    /// Build the terminal failure event.
    pub fn failed(
        message: impl Into<String>,
        panel_number: Option<u8>,
        is_safety_error: bool,
    ) -> Self {
        ProgressEvent::Failed {
            error: true,
            message: message.into(),
            panel_number,
            is_safety_error,
        }
    }

    /// Panel position this event concerns, if any.
    pub fn panel_number(&self) -> Option<u8> {
        match self {
            ProgressEvent::PanelStarted { panel_number, .. }
            | ProgressEvent::PanelDone { panel_number, .. } => Some(*panel_number),
            ProgressEvent::Failed { panel_number, .. } => *panel_number,
            _ => None,
        }
    }

    /// Whether this event ends the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ProgressEvent::SequenceComplete { .. } | ProgressEvent::Failed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_omits_empty_warnings() {
        let json = serde_json::to_string(&ProgressEvent::queued(vec![])).unwrap();
        assert!(!json.contains("sanitizationWarnings"));

        let json =
            serde_json::to_string(&ProgressEvent::queued(vec!["rewrote a phrase".to_string()]))
                .unwrap();
        assert!(json.contains("sanitizationWarnings"));
    }

    #[test]
    fn wire_shapes_round_trip() {
        let events = vec![
            ProgressEvent::queued(vec!["note".to_string()]),
            ProgressEvent::panel_started(1),
            ProgressEvent::panel_done(1, "https://img.example/1.png"),
            ProgressEvent::sequence_complete(
                vec!["a".to_string(), "b".to_string(), "c".to_string()],
                None,
            ),
            ProgressEvent::failed("boom", Some(2), true),
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let back: ProgressEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(back, event, "failed round trip: {json}");
        }
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let json = serde_json::to_string(&ProgressEvent::panel_done(2, "u")).unwrap();
        assert!(json.contains("panelNumber"));
        assert!(json.contains("imageUrl"));

        let json = serde_json::to_string(&ProgressEvent::failed("m", None, false)).unwrap();
        assert!(json.contains("\"error\":true"));
        assert!(json.contains("isSafetyError"));
        assert!(!json.contains("panelNumber"));
    }
}
