//! module Icons
//!
//! Unicode icons used for the various message types.

pub(crate) const ICON_SUCCESS: &str = "\u{2611}"; // ✔
pub(crate) const ICON_FAILURE: &str = "\u{274C}"; // ✖
pub(crate) const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
pub(crate) const ICON_HINT: &str = "?";
pub(crate) const ICON_NEGATIVE: &str = "➖";
pub(crate) const ICON_POSITIVE: &str = "➕";
pub(crate) const ICON_CELEBRATE: &str = "🎉"; // U+1F389
pub(crate) const ICON_ENGINE: &str = "⚙";
pub(crate) const ICON_BOOST: &str = "»";
