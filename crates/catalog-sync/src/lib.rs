//! Catalog Sync
//!
//! Client-side CRUD synchronization for the catalog admin: typed records,
//! a REST resource client, and the list, form, edit and notification state
//! that keeps a local view consistent with the server.
//!
//! Nothing here touches the browser. The UI crate supplies a [`Transport`]
//! and holds these state objects in its own reactive cells.

mod client;
mod config;
mod edit;
mod envelope;
mod error;
mod fields;
mod form;
mod list;
mod notify;
mod record;
mod transport;

#[cfg(test)]
mod memory_backend;

pub use client::{Mutation, ResourceClient};
pub use config::{ApiConfig, ConfigError, ConfigOverlay, DEFAULT_BASE_URL, DEFAULT_NOTICE_TTL_MS};
pub use edit::EditSession;
pub use error::{ClientError, ClientResult};
pub use fields::{CategoryFields, ProductFields, SupplierFields, NAME_MAX_LEN};
pub use form::{format_amount, FieldError, FormBinding, FormMode, FormModel, Submission, SubmitOutcome};
pub use list::{ListController, LoadOutcome, LoadState, LoadTicket, RefreshToken};
pub use notify::{Notice, NoticeKind, NotificationSink, Notifications};
pub use record::{
    discounted_price, select_options, Category, CategoryDraft, Product, ProductDraft, RecordId,
    RecordRef, Resource, SelectOption, Supplier, SupplierDraft,
};
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
