//! Display field catalog
//!
//! Static description of how each lead attribute is labeled and rendered.
//! The catalog is configuration, not something derived from the data.

/// How one record attribute is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayField {
    pub label: &'static str,
    pub source: &'static str,
    pub copyable: bool,
    pub is_link: bool,
    pub is_title: bool,
    pub is_grid: bool,
}

impl DisplayField {
    pub const fn new(label: &'static str, source: &'static str) -> Self {
        Self {
            label,
            source,
            copyable: false,
            is_link: false,
            is_title: false,
            is_grid: false,
        }
    }

    pub const fn copyable(mut self) -> Self {
        self.copyable = true;
        self
    }

    pub const fn link(mut self) -> Self {
        self.is_link = true;
        self
    }

    pub const fn title(mut self) -> Self {
        self.is_title = true;
        self
    }

    pub const fn grid(mut self) -> Self {
        self.is_grid = true;
        self
    }

    /// Copyable or link fields can take keyboard focus
    pub fn is_actionable(&self) -> bool {
        self.copyable || self.is_link
    }
}

pub const DISPLAY_FIELDS: &[DisplayField] = &[
    DisplayField::new("Business Name", "title").copyable().title(),
    DisplayField::new("Business Type", "categoryName"),
    DisplayField::new("Address", "address").copyable(),
    DisplayField::new("Phone Number", "phone").copyable(),
    DisplayField::new("Website", "website").copyable().link(),
    DisplayField::new("City", "city").grid(),
    DisplayField::new("State", "state").grid(),
    DisplayField::new("Rating", "totalScore").grid(),
    DisplayField::new("Reviews", "reviewsCount").grid(),
];

/// Fields that can take keyboard focus, in catalog order
pub fn actionable_fields() -> impl Iterator<Item = &'static DisplayField> {
    DISPLAY_FIELDS.iter().filter(|field| field.is_actionable())
}
