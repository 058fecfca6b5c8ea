//! Frontend Models
//!
//! Page-level types on top of the catalog records.

/// Top-level pages, one per resource collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceTab {
    Products,
    Categories,
    Suppliers,
}

impl ResourceTab {
    pub const ALL: [ResourceTab; 3] = [Self::Products, Self::Categories, Self::Suppliers];

    pub fn label(self) -> &'static str {
        match self {
            Self::Products => "Products",
            Self::Categories => "Categories",
            Self::Suppliers => "Suppliers",
        }
    }
}
