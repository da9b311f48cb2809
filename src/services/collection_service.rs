// ==================== GENERIC COLLECTION ACCESS ====================
// One store call per function. Selector fields are checked against the
// collection's allow-list before anything reaches the store.

use crate::{
    database::StoreHandle,
    models::{CollectionSpec, DeleteOutcome, InsertOutcome, Selector, UpdateOutcome},
    utils::error::AppError,
};
use mongodb::bson::{doc, Bson, Document};

/// Inserts `document` unmodified.
pub async fn create(
    db: &StoreHandle,
    spec: &CollectionSpec,
    document: Document,
) -> Result<InsertOutcome, AppError> {
    let inserted_id = db.store().insert_one(spec.name, document).await?;
    log::info!("🆕 new {} document created with following id : {}", spec.name, inserted_id);
    Ok(InsertOutcome::new(inserted_id))
}

/// First document whose `selector.field` equals `selector.value`.
pub async fn find_one(
    db: &StoreHandle,
    spec: &CollectionSpec,
    selector: &Selector,
) -> Result<Option<Document>, AppError> {
    spec.check_field(&selector.field)?;

    let found = db.store().find_one(spec.name, selector.to_filter()).await?;
    match &found {
        Some(_) => log::info!(
            "🔍 Found a document in {} with {} : {}",
            spec.name, selector.field, selector.value
        ),
        None => log::info!(
            "🔍 Not found a document in {} with {} : {}",
            spec.name, selector.field, selector.value
        ),
    }
    Ok(found)
}

/// Every matching document in the store's natural order; empty when none match.
pub async fn find_many(
    db: &StoreHandle,
    spec: &CollectionSpec,
    selector: &Selector,
) -> Result<Vec<Document>, AppError> {
    spec.check_field(&selector.field)?;

    let documents = db.store().find_many(spec.name, selector.to_filter()).await?;
    log::info!(
        "🔍 Found {} document(s) in {} with the {} mention : {}",
        documents.len(), spec.name, selector.field, selector.value
    );
    Ok(documents)
}

/// `$set`s one field on the first document matching `key`. Setting the key
/// field itself is allowed and renames the document.
pub async fn update(
    db: &StoreHandle,
    spec: &CollectionSpec,
    key: &Selector,
    field: &str,
    value: Bson,
) -> Result<UpdateOutcome, AppError> {
    spec.check_field(&key.field)?;
    spec.check_field(field)?;

    let mut set = Document::new();
    set.insert(field, value);

    let counts = db
        .store()
        .update_one(spec.name, key.to_filter(), doc! { "$set": set })
        .await?;
    log::info!("✏️  {} document(s) matched the query criteria", counts.matched);
    log::info!("✏️  {} document(s) was/were updated", counts.modified);
    Ok(counts.into())
}

/// Removes the first matching document, if any.
pub async fn delete(
    db: &StoreHandle,
    spec: &CollectionSpec,
    selector: &Selector,
) -> Result<DeleteOutcome, AppError> {
    spec.check_field(&selector.field)?;

    let deleted = db.store().delete_one(spec.name, selector.to_filter()).await?;
    log::info!("🗑️  {} document(s) was/were deleted from {}", deleted, spec.name);
    Ok(DeleteOutcome::new(deleted))
}
