use actix_web::{web, HttpResponse};

use crate::{
    api::{crud, envelope::Envelope},
    database::StoreHandle,
    models::{
        CreateOrderRequest, DeleteOrderRequest, LookupQuery, SelectorQuery, UpdateOrderRequest, ORDERS,
    },
    utils::error::AppError,
};

#[utoipa::path(
    post,
    path = "/orders/create",
    tag = "Orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order Successfully Registered", body = Envelope),
        (status = 404, description = "A required field is missing or empty", body = Envelope),
        (status = 500, description = "Internal Server Error", body = Envelope)
    )
)]
pub async fn create_order(
    db: web::Data<StoreHandle>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /orders/create");
    crud::create(&db, &ORDERS, body.into_inner().into_document()).await
}

/// GET /orders/get - e.g. every order of a table with `field=table_id`
#[utoipa::path(
    get,
    path = "/orders/get",
    tag = "Orders",
    params(SelectorQuery),
    responses(
        (status = 200, description = "Object(s) Read Successfully", body = Envelope),
        (status = 404, description = "Object(s) Was Not Found", body = Envelope),
        (status = 500, description = "Internal Server Error", body = Envelope)
    )
)]
pub async fn get_orders(
    db: web::Data<StoreHandle>,
    query: web::Query<SelectorQuery>,
) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /orders/get - {} = {}", query.field, query.value);
    crud::get_many(&db, &ORDERS, query.into_inner()).await
}

#[utoipa::path(
    get,
    path = "/orders/get-one",
    tag = "Orders",
    params(LookupQuery),
    responses(
        (status = 200, description = "First matching order", body = Envelope),
        (status = 404, description = "Object(s) Was Not Found", body = Envelope),
        (status = 500, description = "Internal Server Error", body = Envelope)
    )
)]
pub async fn get_order(
    db: web::Data<StoreHandle>,
    query: web::Query<LookupQuery>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔍 GET /orders/get-one - {}", query.value);
    crud::get_one(&db, &ORDERS, query.into_inner()).await
}

/// PUT /orders/update - typically moves `status` along (Pending, Served, ...)
#[utoipa::path(
    put,
    path = "/orders/update",
    tag = "Orders",
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Successfully Updated", body = Envelope),
        (status = 404, description = "Missing parameters or no order matched", body = Envelope),
        (status = 500, description = "Internal Server Error", body = Envelope)
    )
)]
pub async fn update_order(
    db: web::Data<StoreHandle>,
    body: web::Json<UpdateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔧 PUT /orders/update");
    crud::update(&db, &ORDERS, body.into_inner().into()).await
}

#[utoipa::path(
    delete,
    path = "/orders/delete",
    tag = "Orders",
    request_body = DeleteOrderRequest,
    responses(
        (status = 200, description = "Successfully Deleted", body = Envelope),
        (status = 404, description = "No order matched", body = Envelope),
        (status = 500, description = "Internal Server Error", body = Envelope)
    )
)]
pub async fn delete_order(
    db: web::Data<StoreHandle>,
    body: web::Json<DeleteOrderRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("🗑️  DELETE /orders/delete");
    crud::delete(&db, &ORDERS, body.into_inner().into()).await
}
