pub mod crud;
pub mod envelope;
pub mod health;
pub mod orders;
pub mod swagger;
pub mod tables;
pub mod users;

use actix_web::web;

/// Route table shared by the server and the handler tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/users")
                .route("/create", web::post().to(users::create_user))
                .route("/get", web::get().to(users::get_users))
                .route("/get-one", web::get().to(users::get_user))
                .route("/update", web::put().to(users::update_user))
                .route("/delete", web::delete().to(users::delete_user)),
        )
        .service(
            web::scope("/orders")
                .route("/create", web::post().to(orders::create_order))
                .route("/get", web::get().to(orders::get_orders))
                .route("/get-one", web::get().to(orders::get_order))
                .route("/update", web::put().to(orders::update_order))
                .route("/delete", web::delete().to(orders::delete_order)),
        )
        .service(
            web::scope("/tables")
                .route("/create", web::post().to(tables::create_table))
                .route("/get", web::get().to(tables::get_tables))
                .route("/get-one", web::get().to(tables::get_table))
                .route("/update", web::put().to(tables::update_table))
                .route("/delete", web::delete().to(tables::delete_table)),
        );
}
