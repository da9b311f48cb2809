use mongodb::bson::Document;
use serde::Deserialize;
use serde_json::Value;

use super::{CollectionSpec, DeleteCommand, Messages, NewDocument, UpdateCommand};
use crate::utils::error::AppError;

/// `table_id` points at a table document but is never checked.
pub static ORDERS: CollectionSpec = CollectionSpec {
    name: "orders",
    id_field: "orderNumber",
    fields: &["orderName", "orderNumber", "orderBody", "table_id", "status", "time"],
    messages: Messages {
        registered: "Order Successfully Registered",
        register_failed: "Unsuccessfully Registered :( , one of the body parameters is null",
        read: "Object(s) Read Successfully",
        not_found: "Object(s) Was Not Found",
        updated: "Successfully Updated",
        update_failed: "Unsuccessfully Request",
        deleted: "Successfully Deleted",
        delete_failed: "Cannot Find Object With Specipic Value :(",
        delete_failed_with_response: true,
    },
};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateOrderRequest {
    #[serde(rename = "orderName")]
    #[schema(value_type = Option<String>, example = "Ariel")]
    pub order_name: Option<Value>,
    #[serde(rename = "orderNumber")]
    #[schema(value_type = Option<String>, example = "17")]
    pub order_number: Option<Value>,
    /// Free text or an itemized object
    #[serde(rename = "orderBody")]
    #[schema(value_type = Option<Object>)]
    pub order_body: Option<Value>,
    #[schema(value_type = Option<String>, example = "4")]
    pub table_id: Option<Value>,
    #[schema(value_type = Option<String>, example = "Pending")]
    pub status: Option<Value>,
    #[schema(value_type = Option<String>, example = "19:30")]
    pub time: Option<Value>,
}

impl CreateOrderRequest {
    pub fn into_document(self) -> Result<Document, AppError> {
        NewDocument::new()
            .required("orderName", self.order_name)
            .required("orderNumber", self.order_number)
            .required("orderBody", self.order_body)
            .required("table_id", self.table_id)
            .required("status", self.status)
            .required("time", self.time)
            .finish(&ORDERS)
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateOrderRequest {
    #[serde(rename = "orderNumber")]
    #[schema(value_type = Option<String>, example = "17")]
    pub order_number: Option<Value>,
    #[schema(value_type = Option<String>, example = "status")]
    pub field: Option<Value>,
    #[schema(value_type = Option<String>, example = "Served")]
    pub value: Option<Value>,
}

impl From<UpdateOrderRequest> for UpdateCommand {
    fn from(req: UpdateOrderRequest) -> Self {
        UpdateCommand { key: req.order_number, field: req.field, value: req.value }
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct DeleteOrderRequest {
    #[schema(value_type = Option<String>, example = "orderNumber")]
    pub field: Option<Value>,
    #[schema(value_type = Option<String>, example = "17")]
    pub value: Option<Value>,
    #[serde(rename = "orderNumber")]
    #[schema(value_type = Option<String>)]
    pub order_number: Option<Value>,
}

impl From<DeleteOrderRequest> for DeleteCommand {
    fn from(req: DeleteOrderRequest) -> Self {
        DeleteCommand { key: req.order_number, field: req.field, value: req.value }
    }
}
