use actix_web::{web, HttpResponse};

use crate::{
    api::{crud, envelope::Envelope},
    database::StoreHandle,
    models::{
        CreateTableRequest, DeleteTableRequest, LookupQuery, SelectorQuery, UpdateTableRequest, TABLES,
    },
    utils::error::AppError,
};

/// POST /tables/create - `x`/`y` are drawn server-side
#[utoipa::path(
    post,
    path = "/tables/create",
    tag = "Tables",
    request_body = CreateTableRequest,
    responses(
        (status = 200, description = "Successfully Registered", body = Envelope),
        (status = 404, description = "A required field is missing or empty", body = Envelope),
        (status = 500, description = "Internal Server Error", body = Envelope)
    )
)]
pub async fn create_table(
    db: web::Data<StoreHandle>,
    body: web::Json<CreateTableRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /tables/create");
    crud::create(&db, &TABLES, body.into_inner().into_document()).await
}

#[utoipa::path(
    get,
    path = "/tables/get",
    tag = "Tables",
    params(SelectorQuery),
    responses(
        (status = 200, description = "Table(s) Read Successfully", body = Envelope),
        (status = 404, description = "Table(s) Was Not Found", body = Envelope),
        (status = 500, description = "Internal Server Error", body = Envelope)
    )
)]
pub async fn get_tables(
    db: web::Data<StoreHandle>,
    query: web::Query<SelectorQuery>,
) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /tables/get - {} = {}", query.field, query.value);
    crud::get_many(&db, &TABLES, query.into_inner()).await
}

#[utoipa::path(
    get,
    path = "/tables/get-one",
    tag = "Tables",
    params(LookupQuery),
    responses(
        (status = 200, description = "First matching table", body = Envelope),
        (status = 404, description = "Table(s) Was Not Found", body = Envelope),
        (status = 500, description = "Internal Server Error", body = Envelope)
    )
)]
pub async fn get_table(
    db: web::Data<StoreHandle>,
    query: web::Query<LookupQuery>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔍 GET /tables/get-one - {}", query.value);
    crud::get_one(&db, &TABLES, query.into_inner()).await
}

#[utoipa::path(
    put,
    path = "/tables/update",
    tag = "Tables",
    request_body = UpdateTableRequest,
    responses(
        (status = 200, description = "Table Successfully Updated", body = Envelope),
        (status = 404, description = "Missing parameters or no table matched", body = Envelope),
        (status = 500, description = "Internal Server Error", body = Envelope)
    )
)]
pub async fn update_table(
    db: web::Data<StoreHandle>,
    body: web::Json<UpdateTableRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔧 PUT /tables/update");
    crud::update(&db, &TABLES, body.into_inner().into()).await
}

#[utoipa::path(
    delete,
    path = "/tables/delete",
    tag = "Tables",
    request_body = DeleteTableRequest,
    responses(
        (status = 200, description = "Successfully Deleted", body = Envelope),
        (status = 404, description = "No table matched", body = Envelope),
        (status = 500, description = "Internal Server Error", body = Envelope)
    )
)]
pub async fn delete_table(
    db: web::Data<StoreHandle>,
    body: web::Json<DeleteTableRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("🗑️  DELETE /tables/delete");
    crud::delete(&db, &TABLES, body.into_inner().into()).await
}
