//! Test service builder: given an AppState, build an initialized Actix
//! **test service** wired with the production middleware and routes.

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::Error as ActixError;
use actix_web::{web, App};

use game_archive::middleware::{RequestContext, StructuredLogger};
use game_archive::AppState;

/// Return type is `impl Service<...>` so callers don't have to name the opaque service type.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    let app = App::new()
        .wrap(StructuredLogger)
        .wrap(RequestContext)
        .app_data(web::Data::new(state))
        .configure(game_archive::routes::configure);

    actix_web::test::init_service(app).await
}
