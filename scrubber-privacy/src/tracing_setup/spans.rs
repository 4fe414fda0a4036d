//! Span definitions for sanitization passes.

/// Span around one text sanitization pass.
#[macro_export]
macro_rules! sanitize_span {
    ($text_length:expr, $preserve_structure:expr) => {
        tracing::debug_span!(
            "scrubber.sanitize",
            text_length = $text_length,
            preserve_structure = $preserve_structure
        )
    };
}

/// Span around one detection pass.
#[macro_export]
macro_rules! detect_span {
    ($text_length:expr) => {
        tracing::debug_span!("scrubber.detect", text_length = $text_length)
    };
}
