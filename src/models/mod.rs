pub mod order;
pub mod outcome;
pub mod table;
pub mod user;

pub use order::*;
pub use outcome::*;
pub use table::*;
pub use user::*;

use mongodb::bson::{Bson, Document};
use serde::Deserialize;
use serde_json::Value;

use crate::utils::error::AppError;
use crate::utils::value::{is_truthy, to_bson};

/// Envelope texts one collection answers with.
#[derive(Debug)]
pub struct Messages {
    pub registered: &'static str,
    pub register_failed: &'static str,
    pub read: &'static str,
    pub not_found: &'static str,
    pub updated: &'static str,
    pub update_failed: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
    /// Whether a delete that matched nothing still echoes the outcome.
    pub delete_failed_with_response: bool,
}

/// Static description of a collection: where it lives, which field callers
/// treat as its key, and which fields may appear in a selector or update.
#[derive(Debug)]
pub struct CollectionSpec {
    pub name: &'static str,
    pub id_field: &'static str,
    pub fields: &'static [&'static str],
    pub messages: Messages,
}

impl CollectionSpec {
    pub fn allows(&self, field: &str) -> bool {
        self.fields.contains(&field)
    }

    pub fn check_field(&self, field: &str) -> Result<(), AppError> {
        if self.allows(field) {
            Ok(())
        } else {
            Err(AppError::UnknownField {
                collection: self.name,
                field: field.to_string(),
            })
        }
    }
}

/// `(field, value)` pair naming the documents an operation applies to.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    pub field: String,
    pub value: Bson,
}

impl Selector {
    pub fn new(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self { field: field.into(), value: value.into() }
    }

    pub fn to_filter(&self) -> Document {
        let mut filter = Document::new();
        filter.insert(self.field.clone(), self.value.clone());
        filter
    }
}

/// Builds a creation document from a request body, collecting every
/// required field that is missing or falsy.
#[derive(Debug, Default)]
pub struct NewDocument {
    document: Document,
    missing: Vec<&'static str>,
}

impl NewDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, field: &'static str, value: Option<Value>) -> Self {
        match value.as_ref().filter(|v| is_truthy(Some(*v))).and_then(to_bson) {
            Some(bson) => {
                self.document.insert(field, bson);
            }
            None => self.missing.push(field),
        }
        self
    }

    pub fn optional(mut self, field: &'static str, value: Option<Value>) -> Self {
        if let Some(bson) = value.as_ref().filter(|v| !v.is_null()).and_then(to_bson) {
            self.document.insert(field, bson);
        }
        self
    }

    pub fn set(mut self, field: &'static str, value: impl Into<Bson>) -> Self {
        self.document.insert(field, value.into());
        self
    }

    pub fn finish(self, spec: &CollectionSpec) -> Result<Document, AppError> {
        if self.missing.is_empty() {
            Ok(self.document)
        } else {
            log::info!("{} (missing: {})", spec.messages.register_failed, self.missing.join(", "));
            Err(AppError::Validation(spec.messages.register_failed.to_string()))
        }
    }
}

/// Query string of the `GET /<collection>/get` routes.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SelectorQuery {
    /// Document field to match on
    pub field: String,
    /// Value the field must equal
    pub value: String,
}

/// Query string of the `GET /<collection>/get-one` routes. `field` defaults
/// to the collection's identifying field.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LookupQuery {
    pub field: Option<String>,
    pub value: String,
}

/// Collection-agnostic form of the update bodies.
#[derive(Debug, Default)]
pub struct UpdateCommand {
    pub key: Option<Value>,
    pub field: Option<Value>,
    pub value: Option<Value>,
}

/// Collection-agnostic form of the delete bodies. An explicit `field`
/// wins over the identifying-field shorthand.
#[derive(Debug, Default)]
pub struct DeleteCommand {
    pub key: Option<Value>,
    pub field: Option<Value>,
    pub value: Option<Value>,
}
