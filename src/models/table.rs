use mongodb::bson::Document;
use rand::Rng;
use serde::Deserialize;
use serde_json::Value;

use super::{CollectionSpec, DeleteCommand, Messages, NewDocument, UpdateCommand};
use crate::utils::error::AppError;

/// Floor-plan coordinates are drawn from `0..COORDINATE_RANGE`.
pub const COORDINATE_RANGE: u32 = 100;

pub static TABLES: CollectionSpec = CollectionSpec {
    name: "tables",
    id_field: "table_id",
    fields: &[
        "table_id",
        "shape",
        "owner",
        "x",
        "y",
        "total_price",
        "people_amount",
        "comments",
    ],
    messages: Messages {
        registered: "Successfully Registered",
        register_failed: "Unsuccessfully Registered :( , one of the body parameters is null",
        read: "Table(s) Read Successfully",
        not_found: "Table(s) Was Not Found",
        updated: "Table Successfully Updated",
        update_failed: "Table Unsuccessfully Updated , one of the parameters is null",
        deleted: "Successfully Deleted",
        delete_failed: "Cannot Find Object With Specipic Value :(",
        delete_failed_with_response: true,
    },
};

/// `x` and `y` are not part of the request: they are always generated.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateTableRequest {
    #[schema(value_type = Option<String>, example = "4")]
    pub table_id: Option<Value>,
    #[schema(value_type = Option<String>, example = "round")]
    pub shape: Option<Value>,
    #[schema(value_type = Option<String>, example = "Ariel")]
    pub owner: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub total_price: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub people_amount: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub comments: Option<Value>,
}

impl CreateTableRequest {
    pub fn into_document(self) -> Result<Document, AppError> {
        self.into_document_with(&mut rand::thread_rng())
    }

    pub fn into_document_with<R: Rng>(self, rng: &mut R) -> Result<Document, AppError> {
        NewDocument::new()
            .required("table_id", self.table_id)
            .required("shape", self.shape)
            .required("owner", self.owner)
            .set("x", rng.gen_range(0..COORDINATE_RANGE).to_string())
            .set("y", rng.gen_range(0..COORDINATE_RANGE).to_string())
            .optional("total_price", self.total_price)
            .optional("people_amount", self.people_amount)
            .optional("comments", self.comments)
            .finish(&TABLES)
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateTableRequest {
    #[schema(value_type = Option<String>, example = "4")]
    pub table_id: Option<Value>,
    #[schema(value_type = Option<String>, example = "people_amount")]
    pub field: Option<Value>,
    #[schema(value_type = Option<String>, example = "6")]
    pub value: Option<Value>,
}

impl From<UpdateTableRequest> for UpdateCommand {
    fn from(req: UpdateTableRequest) -> Self {
        UpdateCommand { key: req.table_id, field: req.field, value: req.value }
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct DeleteTableRequest {
    #[schema(value_type = Option<String>, example = "table_id")]
    pub field: Option<Value>,
    #[schema(value_type = Option<String>, example = "4")]
    pub value: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub table_id: Option<Value>,
}

impl From<DeleteTableRequest> for DeleteCommand {
    fn from(req: DeleteTableRequest) -> Self {
        DeleteCommand { key: req.table_id, field: req.field, value: req.value }
    }
}
