//! Resource Forms
//!
//! Field values for each resource form. Numeric inputs are kept as the
//! text the user typed and parsed on validation.

use crate::form::{format_amount, optional_count, optional_text, required_number, required_text, FieldError, FormModel};
use crate::record::{Category, CategoryDraft, Product, ProductDraft, RecordId, Supplier, SupplierDraft};

/// Longest accepted record name
pub const NAME_MAX_LEN: usize = 50;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: String,
    pub discount: String,
    pub stock: String,
    pub description: String,
    pub category_id: Option<RecordId>,
    pub supplier_id: Option<RecordId>,
}

impl FormModel for ProductFields {
    type Record = Product;

    fn from_record(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: format_amount(product.price),
            discount: format_amount(product.discount),
            stock: product.stock.map(|s| s.to_string()).unwrap_or_default(),
            description: product.description.clone().unwrap_or_default(),
            category_id: product.category_ref_id().cloned(),
            supplier_id: product.supplier_ref_id().cloned(),
        }
    }

    fn validate(&self) -> Result<ProductDraft, Vec<FieldError>> {
        let mut errors = Vec::new();
        let name = required_text("name", "Name", &self.name, NAME_MAX_LEN, &mut errors);
        let price = required_number("price", "Price", &self.price, 0.0, None, &mut errors);
        let discount = required_number("discount", "Discount", &self.discount, 0.0, Some(100.0), &mut errors);
        let stock = optional_count("stock", "Stock", &self.stock, &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ProductDraft {
            name,
            price,
            discount,
            stock,
            description: optional_text(&self.description),
            category_id: self.category_id.clone(),
            supplier_id: self.supplier_id.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFields {
    pub name: String,
    pub description: String,
}

impl FormModel for CategoryFields {
    type Record = Category;

    fn from_record(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<CategoryDraft, Vec<FieldError>> {
        let mut errors = Vec::new();
        let name = required_text("name", "Name", &self.name, NAME_MAX_LEN, &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CategoryDraft {
            name,
            description: optional_text(&self.description),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierFields {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
}

impl FormModel for SupplierFields {
    type Record = Supplier;

    fn from_record(supplier: &Supplier) -> Self {
        Self {
            name: supplier.name.clone(),
            email: supplier.email.clone().unwrap_or_default(),
            phone_number: supplier.phone_number.clone().unwrap_or_default(),
            address: supplier.address.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<SupplierDraft, Vec<FieldError>> {
        let mut errors = Vec::new();
        let name = required_text("name", "Name", &self.name, NAME_MAX_LEN, &mut errors);
        let email = optional_text(&self.email);
        if email.as_deref().is_some_and(|email| !email.contains('@')) {
            errors.push(FieldError::new("email", "Email must contain @"));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(SupplierDraft {
            name,
            email,
            phone_number: optional_text(&self.phone_number),
            address: optional_text(&self.address),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_fields(name: &str, price: &str, discount: &str) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            price: price.to_string(),
            discount: discount.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_discount_boundaries() {
        assert!(product_fields("Pen", "10", "0").validate().is_ok());
        assert!(product_fields("Pen", "10", "100").validate().is_ok());
        assert!(product_fields("Pen", "10", "-1").validate().is_err());
        assert!(product_fields("Pen", "10", "101").validate().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let errors = product_fields("Pen", "-0.5", "0").validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "price");
        assert_eq!(errors[0].message, "Price must be 0 or greater");
    }

    #[test]
    fn test_all_failures_reported_together() {
        let errors = ProductFields::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "price", "discount"]);
    }

    #[test]
    fn test_product_draft_values() {
        let mut fields = product_fields(" Pen ", "10", "12.5");
        fields.stock = "4".to_string();
        fields.category_id = Some(RecordId::Int(3));

        let draft = fields.validate().unwrap();
        assert_eq!(draft.name, "Pen");
        assert_eq!(draft.discount, 12.5);
        assert_eq!(draft.stock, Some(4));
        assert_eq!(draft.description, None);
        assert_eq!(draft.category_id, Some(RecordId::Int(3)));
    }

    #[test]
    fn test_product_round_trip_into_fields() {
        let product = Product {
            id: RecordId::Int(1),
            name: "Mug".into(),
            price: 100.0,
            discount: 10.0,
            stock: Some(2),
            description: Some("Blue".into()),
            category_id: None,
            supplier_id: Some(RecordId::Int(5)),
            category: None,
            supplier: None,
        };
        let fields = ProductFields::from_record(&product);
        assert_eq!(fields.price, "100");
        assert_eq!(fields.stock, "2");
        assert_eq!(fields.supplier_id, Some(RecordId::Int(5)));
    }

    #[test]
    fn test_supplier_email() {
        let fields = SupplierFields {
            name: "Acme".into(),
            email: "sales.acme.test".into(),
            ..Default::default()
        };
        let errors = fields.validate().unwrap_err();
        assert_eq!(errors[0].message, "Email must contain @");
    }

    #[test]
    fn test_category_name_required() {
        let errors = CategoryFields::default().validate().unwrap_err();
        assert_eq!(errors[0].message, "Name is required");
    }
}
