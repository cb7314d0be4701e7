//! Backend classification for model identifiers.

/// Which adapter a model identifier selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    Gemini,
    Mock,
}

impl BackendKind {
    /// Infer the backend from a model identifier.
    ///
    /// Identifiers containing "gemini" select the Gemini backend; anything
    /// else falls back to the mock backend, which keeps unknown and
    /// test-only identifiers runnable without a real backend.
    ///
    /// # Examples
    ///
    /// ```
    /// use postline_core::runtime::BackendKind;
    ///
    /// assert_eq!(BackendKind::from_model_name("gemini-2.0-flash"), BackendKind::Gemini);
    /// assert_eq!(BackendKind::from_model_name("test-model"), BackendKind::Mock);
    /// ```
    pub fn from_model_name(model: &str) -> Self {
        if model.to_lowercase().contains("gemini") {
            Self::Gemini
        } else {
            Self::Mock
        }
    }

    /// Human-readable backend name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gemini => "Gemini",
            Self::Mock => "Mock",
        }
    }
}
