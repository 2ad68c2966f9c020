use serde::Serialize;

use crate::format::{format_ean8, format_gtin};
use crate::normalization::{self, normalize};
use crate::weights::Weights;

pub fn is_valid_ean13(ean: &str) -> bool {
    check(ean, 13, Weights::ean13())
}

pub fn is_valid_ean8(ean8: &str) -> bool {
    check(ean8, 8, Weights::ean8())
}

/// Either symbology check. NB: this does not normalize, so a raw 12-digit
/// UPC-A fails both branches until the caller runs `normalize` first.
pub fn is_valid_gtin(code: &str) -> bool {
    is_valid_ean13(code) || is_valid_ean8(code)
}

fn check(value: &str, len: usize, weights: Weights) -> bool {
    let digits = match normalization::values(value) {
        Some(digits) if digits.len() == len => digits,
        _ => return false,
    };

    let folded_value = digits[..(len - 1)]
        .iter()
        .zip(weights)
        .fold(0, |a, (&value, weight)| (value * weight) + a);

    (10 - folded_value % 10) % 10 == digits[len - 1]
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum GtinKind {
    #[serde(rename = "EAN-8")]
    Ean8,
    #[serde(rename = "UPC-A")]
    UpcA,
    #[serde(rename = "EAN-13")]
    Ean13,
    #[serde(rename = "GTIN-14")]
    Gtin14,
    Unknown,
}

impl GtinKind {
    /// Keyed on length alone; says nothing about the check digit.
    pub fn of(value: &str) -> GtinKind {
        match value.chars().count() {
            8 => GtinKind::Ean8,
            12 => GtinKind::UpcA,
            13 => GtinKind::Ean13,
            14 => GtinKind::Gtin14,
            _ => GtinKind::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GtinKind::Ean8 => "EAN-8",
            GtinKind::UpcA => "UPC-A",
            GtinKind::Ean13 => "EAN-13",
            GtinKind::Gtin14 => "GTIN-14",
            GtinKind::Unknown => "Unknown",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Checked<T> {
    data: T,
    is_valid: bool,
}

impl<T> Checked<T> {
    pub fn new(s: impl Into<T>, is_valid: bool) -> Self {
        Checked {
            data: s.into(),
            is_valid,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }
}

/// Scan verdict for a single code, shaped for the product UI.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GtinInfo {
    raw: String,
    code: Checked<String>,
    kind: GtinKind,
    display: String,
}

impl GtinInfo {
    pub fn from_scan(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref();
        let code = normalize(raw);
        let kind = GtinKind::of(&code);
        let is_valid = is_valid_gtin(&code);

        let display = match kind {
            GtinKind::Ean13 => format_gtin(&code),
            GtinKind::Ean8 => format_ean8(&code),
            _ => code.clone(),
        };

        GtinInfo {
            raw: raw.into(),
            code: Checked::new(code, is_valid),
            kind,
            display,
        }
    }

    pub fn kind(&self) -> GtinKind {
        self.kind
    }

    pub fn is_valid(&self) -> bool {
        self.code.is_valid()
    }
}
