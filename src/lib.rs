pub mod format;
pub mod gtin;
pub mod normalization;
pub mod slug;
pub mod weights;

pub use crate::format::{format_ean8, format_gtin};
pub use crate::gtin::{is_valid_ean13, is_valid_ean8, is_valid_gtin, Checked, GtinInfo, GtinKind};
pub use crate::normalization::normalize;
pub use crate::slug::slugify;
