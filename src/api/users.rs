use actix_web::{web, HttpResponse};

use crate::{
    api::{crud, envelope::Envelope},
    database::StoreHandle,
    models::{
        CreateUserRequest, DeleteUserRequest, LookupQuery, SelectorQuery, UpdateUserRequest, USERS,
    },
    utils::error::AppError,
};

/// POST /users/create - Registers a staff member (name, userType, userNumber)
#[utoipa::path(
    post,
    path = "/users/create",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Successfully Registered", body = Envelope),
        (status = 404, description = "A required field is missing or empty", body = Envelope),
        (status = 500, description = "Internal Server Error", body = Envelope)
    )
)]
pub async fn create_user(
    db: web::Data<StoreHandle>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /users/create");
    crud::create(&db, &USERS, body.into_inner().into_document()).await
}

#[utoipa::path(
    get,
    path = "/users/get",
    tag = "Users",
    params(SelectorQuery),
    responses(
        (status = 200, description = "Object(s) Read Successfully", body = Envelope),
        (status = 404, description = "Object(s) Was Not Found", body = Envelope),
        (status = 500, description = "Internal Server Error", body = Envelope)
    )
)]
pub async fn get_users(
    db: web::Data<StoreHandle>,
    query: web::Query<SelectorQuery>,
) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /users/get - {} = {}", query.field, query.value);
    crud::get_many(&db, &USERS, query.into_inner()).await
}

#[utoipa::path(
    get,
    path = "/users/get-one",
    tag = "Users",
    params(LookupQuery),
    responses(
        (status = 200, description = "First matching user", body = Envelope),
        (status = 404, description = "Object(s) Was Not Found", body = Envelope),
        (status = 500, description = "Internal Server Error", body = Envelope)
    )
)]
pub async fn get_user(
    db: web::Data<StoreHandle>,
    query: web::Query<LookupQuery>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔍 GET /users/get-one - {}", query.value);
    crud::get_one(&db, &USERS, query.into_inner()).await
}

#[utoipa::path(
    put,
    path = "/users/update",
    tag = "Users",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Successfully Updated", body = Envelope),
        (status = 404, description = "Missing parameters or no user matched", body = Envelope),
        (status = 500, description = "Internal Server Error", body = Envelope)
    )
)]
pub async fn update_user(
    db: web::Data<StoreHandle>,
    body: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔧 PUT /users/update");
    crud::update(&db, &USERS, body.into_inner().into()).await
}

/// DELETE /users/delete - Accepts `{userNumber}` or `{field, value}`
#[utoipa::path(
    delete,
    path = "/users/delete",
    tag = "Users",
    request_body = DeleteUserRequest,
    responses(
        (status = 200, description = "Successfully Deleted", body = Envelope),
        (status = 404, description = "No user matched", body = Envelope),
        (status = 500, description = "Internal Server Error", body = Envelope)
    )
)]
pub async fn delete_user(
    db: web::Data<StoreHandle>,
    body: web::Json<DeleteUserRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("🗑️  DELETE /users/delete");
    crud::delete(&db, &USERS, body.into_inner().into()).await
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};

    use crate::api::test_support::{memory_handle, test_app};
    use crate::database::StoreHandle;

    fn ariel() -> Value {
        json!({ "name": "Ariel", "userType": "Admin", "userNumber": "2402" })
    }

    #[actix_web::test]
    async fn test_create_then_get_by_user_number() {
        let (_, handle) = memory_handle();
        let app = test_app!(handle);

        let req = test::TestRequest::post().uri("/users/create").set_json(ariel()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Successfully Registered");
        assert!(body["response"]["insertedId"].is_string());

        let req = test::TestRequest::get()
            .uri("/users/get?field=userNumber&value=2402")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let users = body["response"].as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["name"], "Ariel");
        assert_eq!(users[0]["userType"], "Admin");
        assert_eq!(users[0]["userNumber"], "2402");
    }

    #[actix_web::test]
    async fn test_create_without_user_number_is_404_without_response() {
        let (store, handle) = memory_handle();
        let app = test_app!(handle);

        let req = test::TestRequest::post()
            .uri("/users/create")
            .set_json(json!({ "name": "Ariel", "userType": "Admin" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert!(!body["message"].as_str().unwrap().is_empty());
        assert!(body.get("response").is_none());
        assert_eq!(store.count("users"), 0);
    }

    #[actix_web::test]
    async fn test_get_with_no_match_is_404() {
        let (_, handle) = memory_handle();
        let app = test_app!(handle);

        let req = test::TestRequest::get()
            .uri("/users/get?field=userType&value=Chef")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Object(s) Was Not Found");
    }

    #[actix_web::test]
    async fn test_get_on_unlisted_field_is_rejected() {
        let (_, handle) = memory_handle();
        let app = test_app!(handle);

        let req = test::TestRequest::get()
            .uri("/users/get?field=password&value=x")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_update_then_get_one() {
        let (_, handle) = memory_handle();
        let app = test_app!(handle);

        let req = test::TestRequest::post().uri("/users/create").set_json(ariel()).to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/users/update")
            .set_json(json!({ "userNumber": "2402", "field": "userType", "value": "Waiter" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["response"]["matchedCount"], 1);

        let req = test::TestRequest::get().uri("/users/get-one?value=2402").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["response"]["userType"], "Waiter");
        assert_eq!(body["response"]["name"], "Ariel");
    }

    #[actix_web::test]
    async fn test_update_with_missing_value_or_no_match_is_404() {
        let (_, handle) = memory_handle();
        let app = test_app!(handle);

        let req = test::TestRequest::put()
            .uri("/users/update")
            .set_json(json!({ "userNumber": "2402", "field": "userType" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::put()
            .uri("/users/update")
            .set_json(json!({ "userNumber": "9999", "field": "userType", "value": "Cook" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Unsuccessfully Request");
    }

    #[actix_web::test]
    async fn test_delete_by_user_number() {
        let (_, handle) = memory_handle();
        let app = test_app!(handle);

        let req = test::TestRequest::post().uri("/users/create").set_json(ariel()).to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete()
            .uri("/users/delete")
            .set_json(json!({ "userNumber": "2402" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::delete()
            .uri("/users/delete")
            .set_json(json!({ "userNumber": "2402" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("response").is_none());
    }

    #[actix_web::test]
    async fn test_read_id_matches_inserted_id() {
        let (_, handle) = memory_handle();
        let app = test_app!(handle);

        let req = test::TestRequest::post().uri("/users/create").set_json(ariel()).to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let inserted_id = created["response"]["insertedId"].clone();
        assert!(inserted_id.is_string());

        let req = test::TestRequest::get().uri("/users/get-one?value=2402").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["response"]["_id"], inserted_id);

        let req = test::TestRequest::get()
            .uri("/users/get?field=userNumber&value=2402")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["response"][0]["_id"], inserted_id);
    }

    #[actix_web::test]
    async fn test_delete_with_operator_value_is_404_and_keeps_documents() {
        let (store, handle) = memory_handle();
        let app = test_app!(handle);

        let req = test::TestRequest::post().uri("/users/create").set_json(ariel()).to_request();
        test::call_service(&app, req).await;

        for body in [
            json!({ "field": "userNumber", "value": { "$ne": null } }),
            json!({ "userNumber": { "$gt": "" } }),
            json!({ "field": "userNumber", "value": ["2402"] }),
        ] {
            let req = test::TestRequest::delete().uri("/users/delete").set_json(body).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Cannot Find Object With Specipic id :(");
            assert_eq!(store.count("users"), 1);
        }
    }

    #[actix_web::test]
    async fn test_update_with_operator_key_is_404_and_keeps_document() {
        let (_, handle) = memory_handle();
        let app = test_app!(handle);

        let req = test::TestRequest::post().uri("/users/create").set_json(ariel()).to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/users/update")
            .set_json(json!({ "userNumber": { "$gt": "" }, "field": "userType", "value": "Waiter" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Unsuccessfully Request");

        let req = test::TestRequest::get().uri("/users/get-one?value=2402").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["response"]["userType"], "Admin");
    }

    #[actix_web::test]
    async fn test_store_failure_is_500() {
        let handle = StoreHandle::connect("not-a-mongo-uri", "RestManagerDB").await;
        let app = test_app!(handle);

        let req = test::TestRequest::post().uri("/users/create").set_json(ariel()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Internal Server Error");
    }
}
