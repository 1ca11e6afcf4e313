//! Rendering faults.

use thiserror::Error;

/// Failure to turn an icon token into a drawable glyph.
///
/// Never aborts a render: the badge falls back to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IconError {
    /// The glyph provider has no symbol for this token.
    #[error("missing symbol: no glyph for icon token '{0}'")]
    UnknownSymbol(String),
}
