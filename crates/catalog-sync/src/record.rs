//! Catalog Records
//!
//! Typed records for each REST resource. The backend is not consistent about
//! the identifier field (`id` integers on some resources, `_id` strings on
//! others), so both are folded into a single [`RecordId`] at decode time.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Canonical identifier of a server-side record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Int(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Text(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId::Text(id)
    }
}

/// Contract shared by every resource the admin manages.
pub trait Resource: Clone + fmt::Debug + DeserializeOwned {
    /// Collection path segment, e.g. `products`.
    const PATH: &'static str;

    /// Body sent on create and update.
    type Draft: Serialize + fmt::Debug;

    fn id(&self) -> &RecordId;

    /// Human-readable label used in selects and messages.
    fn label(&self) -> &str;
}

/// Picks the canonical id, preferring `_id` when a payload carries both.
fn canonical_id(id: Option<RecordId>, mongo_id: Option<RecordId>) -> Result<RecordId, String> {
    mongo_id
        .or(id)
        .ok_or_else(|| "record has neither `_id` nor `id`".to_string())
}

/// Price after applying a percentage discount.
pub fn discounted_price(price: f64, discount: f64) -> f64 {
    price * (100.0 - discount) / 100.0
}

// ========================
// Embedded References
// ========================

/// `{ id, name }` of a category or supplier embedded in a product row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RecordRefWire")]
pub struct RecordRef {
    pub id: RecordId,
    pub name: String,
}

#[derive(Deserialize)]
struct RecordRefWire {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<RecordId>,
    #[serde(default)]
    name: String,
}

impl TryFrom<RecordRefWire> for RecordRef {
    type Error = String;

    fn try_from(wire: RecordRefWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: canonical_id(wire.id, wire.mongo_id)?,
            name: wire.name,
        })
    }
}

// ========================
// Product
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "ProductWire")]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub price: f64,
    /// Percentage in `0..=100`.
    pub discount: f64,
    pub stock: Option<i64>,
    pub description: Option<String>,
    pub category_id: Option<RecordId>,
    pub supplier_id: Option<RecordId>,
    pub category: Option<RecordRef>,
    pub supplier: Option<RecordRef>,
}

impl Product {
    pub fn discounted_price(&self) -> f64 {
        discounted_price(self.price, self.discount)
    }

    /// Category id, whether sent flat or as an embedded reference.
    pub fn category_ref_id(&self) -> Option<&RecordId> {
        self.category_id
            .as_ref()
            .or_else(|| self.category.as_ref().map(|c| &c.id))
    }

    pub fn supplier_ref_id(&self) -> Option<&RecordId> {
        self.supplier_id
            .as_ref()
            .or_else(|| self.supplier.as_ref().map(|s| &s.id))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductWire {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<RecordId>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    price: f64,
    #[serde(default)]
    discount: f64,
    #[serde(default)]
    stock: Option<i64>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category_id: Option<RecordId>,
    #[serde(default)]
    supplier_id: Option<RecordId>,
    #[serde(default)]
    category: Option<RecordRef>,
    #[serde(default)]
    supplier: Option<RecordRef>,
}

impl TryFrom<ProductWire> for Product {
    type Error = String;

    fn try_from(wire: ProductWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: canonical_id(wire.id, wire.mongo_id)?,
            name: wire.name,
            price: wire.price,
            discount: wire.discount,
            stock: wire.stock,
            description: wire.description,
            category_id: wire.category_id,
            supplier_id: wire.supplier_id,
            category: wire.category,
            supplier: wire.supplier,
        })
    }
}

/// Product body for `POST /products` and `PATCH /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub discount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<RecordId>,
}

impl Resource for Product {
    const PATH: &'static str = "products";
    type Draft = ProductDraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

// ========================
// Category
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "CategoryWire")]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
struct CategoryWire {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<RecordId>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<CategoryWire> for Category {
    type Error = String;

    fn try_from(wire: CategoryWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: canonical_id(wire.id, wire.mongo_id)?,
            name: wire.name,
            description: wire.description,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Resource for Category {
    const PATH: &'static str = "categories";
    type Draft = CategoryDraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

// ========================
// Supplier
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "SupplierWire")]
pub struct Supplier {
    pub id: RecordId,
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SupplierWire {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<RecordId>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    address: Option<String>,
}

impl TryFrom<SupplierWire> for Supplier {
    type Error = String;

    fn try_from(wire: SupplierWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: canonical_id(wire.id, wire.mongo_id)?,
            name: wire.name,
            email: wire.email,
            phone_number: wire.phone_number,
            address: wire.address,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Resource for Supplier {
    const PATH: &'static str = "suppliers";
    type Draft = SupplierDraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

// ========================
// Select Options
// ========================

/// `(value, label)` pair for a record picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: RecordId,
    pub label: String,
}

/// Maps a collection to picker options in collection order.
pub fn select_options<R: Resource>(records: &[R]) -> Vec<SelectOption> {
    records
        .iter()
        .map(|record| SelectOption {
            value: record.id().clone(),
            label: record.label().to_string(),
        })
        .collect()
}
