//! `OpenAPI` documentation configuration.
//!
//! Sets up utoipa for `OpenAPI` spec generation. The raw spec is served at
//! `/api-docs/openapi.json`.

use axum::{routing::get, Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Security scheme modifier for Bearer authentication.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// `OpenAPI` documentation for the fibu ledger API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "fibu API",
        version = "0.1.0",
        description = "Project-scoped bookkeeping ledger with batch reconciliation"
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server")
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Accounts", description = "Account listing and batch reconciliation"),
        (name = "Bookings", description = "Booking listing and batch reconciliation")
    ),
    paths(
        fibu_api_ledger::handlers::accounts::list_accounts_handler,
        fibu_api_ledger::handlers::accounts::update_accounts_handler,
        fibu_api_ledger::handlers::bookings::list_bookings_handler,
        fibu_api_ledger::handlers::bookings::update_bookings_handler,
    ),
    components(schemas(
        fibu_api_ledger::models::AccountResponse,
        fibu_api_ledger::models::AccountUpdate,
        fibu_api_ledger::models::BookingResponse,
        fibu_api_ledger::models::BookingUpdate,
        fibu_api_ledger::models::UpdateAccountsRequest,
        fibu_api_ledger::models::UpdateBookingsRequest,
        fibu_api_ledger::error::ErrorResponse,
    ))
)]
pub struct ApiDoc;

/// Routes serving the generated `OpenAPI` spec.
pub fn openapi_routes() -> Router {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_contains_ledger_paths_and_security_scheme() {
        let spec = ApiDoc::openapi();
        let json = serde_json::to_value(&spec).unwrap();

        assert!(json["paths"].get("/accounts").is_some());
        assert!(json["paths"].get("/bookings").is_some());
        assert!(json["components"]["securitySchemes"]
            .get("bearerAuth")
            .is_some());
    }
}
