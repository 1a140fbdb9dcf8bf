use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// Status given to a vendor created without one.
pub const DEFAULT_VENDOR_STATUS: &str = "considering";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VendorCategory {
    WeddingHall,
    Studio,
    Dress,
    Makeup,
    Bouquet,
    Invitation,
    Honeymoon,
    Other,
}

impl VendorCategory {
    pub const ALL: [VendorCategory; 8] = [
        VendorCategory::WeddingHall,
        VendorCategory::Studio,
        VendorCategory::Dress,
        VendorCategory::Makeup,
        VendorCategory::Bouquet,
        VendorCategory::Invitation,
        VendorCategory::Honeymoon,
        VendorCategory::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            VendorCategory::WeddingHall => "WEDDING_HALL",
            VendorCategory::Studio => "STUDIO",
            VendorCategory::Dress => "DRESS",
            VendorCategory::Makeup => "MAKEUP",
            VendorCategory::Bouquet => "BOUQUET",
            VendorCategory::Invitation => "INVITATION",
            VendorCategory::Honeymoon => "HONEYMOON",
            VendorCategory::Other => "OTHER",
        }
    }
}

impl fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VendorCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| DomainError::validation(format!("Unknown vendor category '{wanted}'")))
    }
}
