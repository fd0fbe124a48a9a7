use std::fmt::Display;

use serde::{Serialize, Serializer};
use url::Url;

/// A currency amount stored in cents (e.g., 9999 = $99.99)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u32,
}

impl Price {
    pub const fn from_cents(cents: u32) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> u32 {
        self.cents
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// Rendered as a decimal string so templates never see float artifacts
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single suggested product
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    /// Product name
    pub name: String,
    pub price: Price,
    /// Short blurb shown under the name
    pub description: String,
    /// Absolute link to the product page
    pub url: Url,
}

impl Recommendation {
    /// Creates a recommendation, rejecting links that are not absolute URLs
    pub fn new(
        name: impl Into<String>,
        price: Price,
        description: impl Into<String>,
        url: &str,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            name: name.into(),
            price,
            description: description.into(),
            url: Url::parse(url)?,
        })
    }
}
