use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Restaurant Manager API",
        version = "1.0.0",
        description = "CRUD API over the users, orders and tables collections.\n\n**Conventions:**\n- Every response is a `{message, response?}` envelope\n- Missing or empty required fields answer 404, same as a selector that matched nothing; read `message` to tell them apart\n- `field` selectors are limited to each collection's known fields"
    ),
    paths(
        crate::api::health::health_check,

        crate::api::users::create_user,
        crate::api::users::get_users,
        crate::api::users::get_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        crate::api::orders::create_order,
        crate::api::orders::get_orders,
        crate::api::orders::get_order,
        crate::api::orders::update_order,
        crate::api::orders::delete_order,

        crate::api::tables::create_table,
        crate::api::tables::get_tables,
        crate::api::tables::get_table,
        crate::api::tables::update_table,
        crate::api::tables::delete_table,
    ),
    components(
        schemas(
            crate::api::envelope::Envelope,
            crate::api::health::HealthResponse,
            crate::models::CreateUserRequest,
            crate::models::UpdateUserRequest,
            crate::models::DeleteUserRequest,
            crate::models::CreateOrderRequest,
            crate::models::UpdateOrderRequest,
            crate::models::DeleteOrderRequest,
            crate::models::CreateTableRequest,
            crate::models::UpdateTableRequest,
            crate::models::DeleteTableRequest,
            crate::models::InsertOutcome,
            crate::models::UpdateOutcome,
            crate::models::DeleteOutcome,
        )
    ),
    tags(
        (name = "Health", description = "Service and database connection status."),
        (name = "Users", description = "Staff members, keyed by `userNumber`."),
        (name = "Orders", description = "Orders placed at a table, keyed by `orderNumber`."),
        (name = "Tables", description = "Floor-plan tables, keyed by `table_id`. Coordinates are assigned on creation."),
    )
)]
pub struct ApiDoc;
