pub mod get;
pub mod post;

pub use get::*;
pub use post::*;

use crate::helpers::JsonResponse;
use actix_web::HttpResponse;

/// Default handler for the contact resource: anything but GET/POST is 405.
pub async fn method_not_allowed() -> HttpResponse {
    JsonResponse::method_not_allowed("Method not allowed")
}
