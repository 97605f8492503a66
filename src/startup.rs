use crate::configuration::Settings;
use crate::helpers::JsonResponse;
use crate::routes;
use crate::services::GeminiClient;
use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let gemini_client = GeminiClient::new(settings.gemini.clone())
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let gemini_client = web::Data::new(gemini_client);

    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let server = HttpServer::new(move || {
        let json_config =
            web::JsonConfig::default().error_handler(|err, _req| bad_request(err.to_string()));
        let form_config =
            web::FormConfig::default().error_handler(|err, _req| bad_request(err.to_string()));
        let query_config =
            web::QueryConfig::default().error_handler(|err, _req| bad_request(err.to_string()));

        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(settings.clone())
            .app_data(pg_pool.clone())
            .app_data(gemini_client.clone())
            .app_data(json_config.clone())
            .app_data(form_config.clone())
            .app_data(query_config.clone())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/contacts")
                    .service(routes::contact::list_handler)
                    .service(routes::contact::mutate_handler)
                    .default_service(web::route().to(routes::contact::method_not_allowed)),
            )
            .service(routes::ask::ask_handler)
            .service(actix_files::Files::new("/", "./static").index_file("index.html"))
    })
    .listen(listener)?
    .run();

    Ok(server)
}

// Malformed bodies and query strings answer with the envelope, not actix's
// default text/plain.
fn bad_request(message: String) -> actix_web::Error {
    JsonResponse::bad_request(&message)
}
