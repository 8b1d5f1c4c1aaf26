//! Generation sequence and iteration error types.

/// Specific error conditions for generation sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    /// A panel generation call failed, aborting the sequence.
    ///
    /// Panels produced for earlier positions remain usable; only this
    /// panel and the ones after it are missing.
    PanelFailed {
        /// Panel position that failed (1-3)
        position: u8,
        /// Human-readable failure reason
        reason: String,
        /// Whether the provider rejected the prompt on policy grounds
        content_policy: bool,
    },
    /// A single-panel iteration call failed.
    IterationFailed {
        /// Panel position that failed (1-3)
        position: u8,
        /// Human-readable failure reason
        reason: String,
        /// Whether the provider rejected the prompt on policy grounds
        content_policy: bool,
    },
}

impl std::fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationErrorKind::PanelFailed {
                position,
                reason,
                content_policy,
            } => {
                if *content_policy {
                    write!(
                        f,
                        "Panel {} was rejected by the provider's safety system: {}. \
                         Try rephrasing the story with less charged language",
                        position, reason
                    )
                } else {
                    write!(f, "Failed to generate panel {}: {}", position, reason)
                }
            }
            GenerationErrorKind::IterationFailed {
                position,
                reason,
                content_policy,
            } => {
                if *content_policy {
                    write!(
                        f,
                        "Panel {} iteration was rejected by the provider's safety system: {}. \
                         Try rephrasing the refinement",
                        position, reason
                    )
                } else {
                    write!(f, "Failed to regenerate panel {}: {}", position, reason)
                }
            }
        }
    }
}

impl GenerationErrorKind {
    /// Check if this failure stems from a content-policy rejection.
    pub fn is_content_policy(&self) -> bool {
        match self {
            GenerationErrorKind::PanelFailed { content_policy, .. } => *content_policy,
            GenerationErrorKind::IterationFailed { content_policy, .. } => *content_policy,
        }
    }

    /// Panel position the failure concerns.
    pub fn position(&self) -> u8 {
        match self {
            GenerationErrorKind::PanelFailed { position, .. } => *position,
            GenerationErrorKind::IterationFailed { position, .. } => *position,
        }
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use vignette_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::PanelFailed {
///     position: 2,
///     reason: "timeout".to_string(),
///     content_policy: false,
/// });
/// assert!(format!("{}", err).contains("panel 2"));
/// ```
#[derive(Debug, Clone)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generation Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GenerationError {}
