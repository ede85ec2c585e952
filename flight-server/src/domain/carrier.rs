//! Airline carrier descriptors.

/// An airline as attached to a leg or a flown segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    /// Upstream numeric carrier id
    pub id: i64,
    /// Airline name, used as the filter and facet key
    pub name: String,
    /// Logo reference, if the upstream supplied one
    pub logo_url: Option<String>,
}

impl Carrier {
    /// Creates a carrier without a logo.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            logo_url: None,
        }
    }
}
