use crate::error::ApiError;
use crate::filter::FilterCriteria;
use crate::form::{first_value, non_blank, parse_pairs};
use crate::service::ReviewService;
use actix_web::dev::Server;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use tracing::{debug, info, warn};

// Every path is the same endpoint; only the method decides what happens.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{tail:.*}")
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                ApiError::MalformedForm(err.to_string()).into()
            }))
            .route(web::get().to(get_reviews))
            .route(web::post().to(create_review))
            .default_service(web::to(reject_method)),
    );
}

/// Binds the listener and returns the server future. Nothing is logged as
/// listening unless the bind succeeded.
pub fn serve(service: web::Data<ReviewService>, addr: (String, u16)) -> std::io::Result<Server> {
    let server = HttpServer::new(move || App::new().app_data(service.clone()).configure(configure))
        .bind(addr)?;
    for bound in server.addrs() {
        info!("Listening on http://{}", bound);
    }
    Ok(server.run())
}

pub async fn get_reviews(
    service: web::Data<ReviewService>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, ApiError> {
    let pairs = non_blank(query.into_inner());
    debug!("[API] Received review query: {:?}", pairs);

    let criteria = FilterCriteria::from_pairs(&pairs).map_err(|e| {
        warn!("[API] Rejected query {:?}: {}", pairs, e);
        e
    })?;

    let reviews = service.query(&criteria).await;
    Ok(HttpResponse::Ok().json(reviews))
}

// The body is read as urlencoded whatever Content-Type the client sent.
pub async fn create_review(
    service: web::Data<ReviewService>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let form = parse_pairs(&String::from_utf8_lossy(&body))?;
    debug!("[API] Received review submission with {} fields", form.len());

    let review = service
        .submit(first_value(&form, "Location"), first_value(&form, "ReviewBody"))
        .await?;
    Ok(HttpResponse::Created().json(review))
}

async fn reject_method(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    warn!("[API] Method {} not allowed on {}", req.method(), req.path());
    Err(ApiError::MethodNotAllowed)
}
