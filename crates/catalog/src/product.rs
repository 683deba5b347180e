use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_core::Money;

/// Monitor panel technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorPanel {
    Ips,
    Va,
    Tn,
    Oled,
}

/// Laptop operating-system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Windows,
    Mac,
    Linux,
}

/// Keyboard physical layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardLayout {
    Full,
    Tenkeyless,
    Compact,
}

/// Error raised when free-text input does not name a variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{input}' is not one of: {expected}")]
pub struct ParseVariantError {
    pub input: String,
    pub expected: String,
}

macro_rules! impl_variant_enum {
    ($t:ty, $all:expr, [$(($variant:path, $token:literal)),+ $(,)?]) => {
        impl $t {
            /// All variants, in menu order.
            pub const ALL: &'static [$t] = $all;

            /// Canonical input/display token (exact, case-sensitive match).
            pub fn token(&self) -> &'static str {
                match self {
                    $($variant => $token,)+
                }
            }

            /// `A/B/C` choice string for prompts.
            pub fn choices() -> String {
                Self::ALL
                    .iter()
                    .map(|v| v.token())
                    .collect::<Vec<_>>()
                    .join("/")
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.token())
            }
        }

        impl FromStr for $t {
            type Err = ParseVariantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($variant),)+
                    _ => Err(ParseVariantError {
                        input: s.to_string(),
                        expected: Self::choices(),
                    }),
                }
            }
        }
    };
}

impl_variant_enum!(
    MonitorPanel,
    &[
        MonitorPanel::Ips,
        MonitorPanel::Va,
        MonitorPanel::Tn,
        MonitorPanel::Oled,
    ],
    [
        (MonitorPanel::Ips, "IPS"),
        (MonitorPanel::Va, "VA"),
        (MonitorPanel::Tn, "TN"),
        (MonitorPanel::Oled, "OLED"),
    ]
);

impl_variant_enum!(
    OsFamily,
    &[OsFamily::Windows, OsFamily::Mac, OsFamily::Linux],
    [
        (OsFamily::Windows, "WINDOWS"),
        (OsFamily::Mac, "MAC"),
        (OsFamily::Linux, "LINUX"),
    ]
);

impl_variant_enum!(
    KeyboardLayout,
    &[
        KeyboardLayout::Full,
        KeyboardLayout::Tenkeyless,
        KeyboardLayout::Compact,
    ],
    [
        (KeyboardLayout::Full, "FULL"),
        (KeyboardLayout::Tenkeyless, "TENKEYLESS"),
        (KeyboardLayout::Compact, "COMPACT"),
    ]
);

/// Product category (the shop's top-level menu axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Monitor,
    Laptop,
    Keyboard,
}

impl ProductCategory {
    pub const ALL: &'static [ProductCategory] = &[
        ProductCategory::Monitor,
        ProductCategory::Laptop,
        ProductCategory::Keyboard,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Monitor => "Monitor",
            ProductCategory::Laptop => "Laptop",
            ProductCategory::Keyboard => "Keyboard",
        }
    }

    /// `A/B/C` choice string for this category's variant prompt.
    pub fn variant_choices(&self) -> String {
        match self {
            ProductCategory::Monitor => MonitorPanel::choices(),
            ProductCategory::Laptop => OsFamily::choices(),
            ProductCategory::Keyboard => KeyboardLayout::choices(),
        }
    }

    /// Map free-text input to a concrete product kind within this category.
    pub fn parse_variant(&self, input: &str) -> Result<ProductKind, ParseVariantError> {
        match self {
            ProductCategory::Monitor => input.parse().map(ProductKind::Monitor),
            ProductCategory::Laptop => input.parse().map(ProductKind::Laptop),
            ProductCategory::Keyboard => input.parse().map(ProductKind::Keyboard),
        }
    }
}

/// A sellable product: category plus its category-specific variant.
///
/// The set is closed; price lookup and display names are exhaustive matches,
/// so adding a variant fails to compile until it is priced and named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Monitor(MonitorPanel),
    Laptop(OsFamily),
    Keyboard(KeyboardLayout),
}

// Unit prices in smallest currency unit.
const MONITOR_UNIT_PRICE: u64 = 30_000;
const LAPTOP_UNIT_PRICE: u64 = 1_200_000;
const KEYBOARD_UNIT_PRICE: u64 = 100_000;

impl ProductKind {
    pub fn category(&self) -> ProductCategory {
        match self {
            ProductKind::Monitor(_) => ProductCategory::Monitor,
            ProductKind::Laptop(_) => ProductCategory::Laptop,
            ProductKind::Keyboard(_) => ProductCategory::Keyboard,
        }
    }

    /// Deterministic unit price for this variant.
    pub fn unit_price(&self) -> Money {
        let units = match self {
            ProductKind::Monitor(
                MonitorPanel::Ips | MonitorPanel::Va | MonitorPanel::Tn | MonitorPanel::Oled,
            ) => MONITOR_UNIT_PRICE,
            ProductKind::Laptop(OsFamily::Windows | OsFamily::Mac | OsFamily::Linux) => {
                LAPTOP_UNIT_PRICE
            }
            ProductKind::Keyboard(
                KeyboardLayout::Full | KeyboardLayout::Tenkeyless | KeyboardLayout::Compact,
            ) => KEYBOARD_UNIT_PRICE,
        };
        Money::new(units)
    }

    /// Item name for order listings, e.g. `"IPS Monitor"`.
    pub fn display_name(&self) -> String {
        match self {
            ProductKind::Monitor(panel) => format!("{} Monitor", panel.token()),
            ProductKind::Laptop(os) => format!("{} Laptop", os.token()),
            ProductKind::Keyboard(layout) => format!("{} Keyboard", layout.token()),
        }
    }
}
