// Request conventions shared by the users, orders and tables routes:
// presence checks answer 404, each request makes exactly one store call,
// and store failures surface as 500 through `AppError`.

use actix_web::HttpResponse;
use mongodb::bson::Document;
use serde_json::Value;

use crate::{
    api::envelope::Envelope,
    database::StoreHandle,
    models::{CollectionSpec, DeleteCommand, LookupQuery, Selector, SelectorQuery, UpdateCommand},
    services::collection_service,
    utils::error::AppError,
    utils::value::{document_to_json, is_truthy, scalar_to_bson, to_bson},
};

fn warn_if_disconnected(db: &StoreHandle) {
    if !db.is_connected() {
        log::warn!("⚠️ Serving request while the database is {}", db.phase().as_str());
    }
}

fn field_name(spec: &CollectionSpec, field: Value) -> Result<String, AppError> {
    match field {
        Value::String(name) => Ok(name),
        other => Err(AppError::UnknownField {
            collection: spec.name,
            field: other.to_string(),
        }),
    }
}

pub async fn create(
    db: &StoreHandle,
    spec: &CollectionSpec,
    document: Result<Document, AppError>,
) -> Result<HttpResponse, AppError> {
    let document = document?;
    warn_if_disconnected(db);

    let outcome = collection_service::create(db, spec, document).await?;
    Ok(HttpResponse::Ok().json(Envelope::with(spec.messages.registered, outcome)))
}

pub async fn get_many(
    db: &StoreHandle,
    spec: &CollectionSpec,
    query: SelectorQuery,
) -> Result<HttpResponse, AppError> {
    warn_if_disconnected(db);

    let selector = Selector::new(query.field, query.value);
    let documents = collection_service::find_many(db, spec, &selector).await?;
    if documents.is_empty() {
        return Err(AppError::NotFound(spec.messages.not_found.to_string()));
    }

    let response: Vec<Value> = documents.into_iter().map(document_to_json).collect();
    Ok(HttpResponse::Ok().json(Envelope::with(spec.messages.read, response)))
}

pub async fn get_one(
    db: &StoreHandle,
    spec: &CollectionSpec,
    query: LookupQuery,
) -> Result<HttpResponse, AppError> {
    warn_if_disconnected(db);

    let field = query.field.unwrap_or_else(|| spec.id_field.to_string());
    let selector = Selector::new(field, query.value);
    match collection_service::find_one(db, spec, &selector).await? {
        Some(document) => Ok(HttpResponse::Ok().json(Envelope::with(
            spec.messages.read,
            document_to_json(document),
        ))),
        None => Err(AppError::NotFound(spec.messages.not_found.to_string())),
    }
}

pub async fn update(
    db: &StoreHandle,
    spec: &CollectionSpec,
    command: UpdateCommand,
) -> Result<HttpResponse, AppError> {
    let invalid = || AppError::Validation(spec.messages.update_failed.to_string());

    let (key, field, value) = match (command.key, command.field, command.value) {
        (Some(key), Some(field), Some(value))
            if is_truthy(Some(&key)) && is_truthy(Some(&field)) && is_truthy(Some(&value)) =>
        {
            (key, field, value)
        }
        _ => return Err(invalid()),
    };
    let field = field_name(spec, field)?;
    let key = scalar_to_bson(&key).ok_or_else(invalid)?;
    let value = to_bson(&value).ok_or_else(invalid)?;
    warn_if_disconnected(db);

    let selector = Selector::new(spec.id_field, key);
    log::info!("✏️  {} {} : {} -> {}", spec.name, selector.value, field, value);
    let outcome = collection_service::update(db, spec, &selector, &field, value).await?;
    if outcome.matched_count == 0 {
        return Err(AppError::NotFound(spec.messages.update_failed.to_string()));
    }

    Ok(HttpResponse::Ok().json(Envelope::with(spec.messages.updated, outcome)))
}

/// Resolves `{field, value}` or the `{<id_field>: value}` shorthand.
fn delete_selector(spec: &CollectionSpec, command: DeleteCommand) -> Result<Selector, AppError> {
    let not_found = || AppError::NotFound(spec.messages.delete_failed.to_string());

    let (field, value) = match command.field {
        None | Some(Value::Null) => (spec.id_field.to_string(), command.key),
        Some(field) => (field_name(spec, field)?, command.value),
    };
    let value = value.as_ref().and_then(scalar_to_bson).ok_or_else(not_found)?;
    Ok(Selector::new(field, value))
}

pub async fn delete(
    db: &StoreHandle,
    spec: &CollectionSpec,
    command: DeleteCommand,
) -> Result<HttpResponse, AppError> {
    let selector = delete_selector(spec, command)?;
    warn_if_disconnected(db);

    let outcome = collection_service::delete(db, spec, &selector).await?;
    if outcome.deleted_count == 0 {
        let envelope = if spec.messages.delete_failed_with_response {
            Envelope::with(spec.messages.delete_failed, outcome)
        } else {
            Envelope::message(spec.messages.delete_failed)
        };
        return Ok(HttpResponse::NotFound().json(envelope));
    }

    Ok(HttpResponse::Ok().json(Envelope::with(spec.messages.deleted, outcome)))
}
