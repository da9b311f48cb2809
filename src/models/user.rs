use mongodb::bson::Document;
use serde::Deserialize;
use serde_json::Value;

use super::{CollectionSpec, DeleteCommand, Messages, NewDocument, UpdateCommand};
use crate::utils::error::AppError;

/// Users are keyed by `userNumber`; older clients still select on `name`.
pub static USERS: CollectionSpec = CollectionSpec {
    name: "users",
    id_field: "userNumber",
    fields: &["name", "userNumber", "userType", "heName"],
    messages: Messages {
        registered: "Successfully Registered",
        register_failed: "Unsuccessfully Registered :( , one of the body parameters is null",
        read: "Object(s) Read Successfully",
        not_found: "Object(s) Was Not Found",
        updated: "Successfully Updated",
        update_failed: "Unsuccessfully Request",
        deleted: "Successfully Deleted",
        delete_failed: "Cannot Find Object With Specipic id :(",
        delete_failed_with_response: false,
    },
};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[schema(value_type = Option<String>, example = "Ariel")]
    pub name: Option<Value>,
    #[serde(rename = "userType")]
    #[schema(value_type = Option<String>, example = "Admin")]
    pub user_type: Option<Value>,
    #[serde(rename = "userNumber")]
    #[schema(value_type = Option<String>, example = "2402")]
    pub user_number: Option<Value>,
    #[serde(rename = "heName")]
    #[schema(value_type = Option<String>)]
    pub he_name: Option<Value>,
}

impl CreateUserRequest {
    pub fn into_document(self) -> Result<Document, AppError> {
        NewDocument::new()
            .required("name", self.name)
            .required("userType", self.user_type)
            .required("userNumber", self.user_number)
            .optional("heName", self.he_name)
            .finish(&USERS)
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserRequest {
    #[serde(rename = "userNumber")]
    #[schema(value_type = Option<String>, example = "2402")]
    pub user_number: Option<Value>,
    #[schema(value_type = Option<String>, example = "userType")]
    pub field: Option<Value>,
    #[schema(value_type = Option<String>, example = "Waiter")]
    pub value: Option<Value>,
}

impl From<UpdateUserRequest> for UpdateCommand {
    fn from(req: UpdateUserRequest) -> Self {
        UpdateCommand { key: req.user_number, field: req.field, value: req.value }
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct DeleteUserRequest {
    #[serde(rename = "userNumber")]
    #[schema(value_type = Option<String>, example = "2402")]
    pub user_number: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub field: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub value: Option<Value>,
}

impl From<DeleteUserRequest> for DeleteCommand {
    fn from(req: DeleteUserRequest) -> Self {
        DeleteCommand { key: req.user_number, field: req.field, value: req.value }
    }
}
