mod config;
mod services;

use crate::services::recipe::{ChatCompletionsGenerator, RecipeGenerator};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    serve_from(&STATIC_DIR, req.path())
}

/// Resolves a request path against the bundled frontend. Unknown paths get
/// `index.html` so the single-page app can handle them.
fn serve_from(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    let path = request_path.trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let settings = config::load_settings();
    let url = settings.url();

    if settings.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    if settings.hf_token.is_none() {
        warn!("HF_ACCESS_TOKEN is not set, recipe generation will answer 503");
    }
    let generator: Arc<dyn RecipeGenerator> =
        Arc::new(ChatCompletionsGenerator::from_settings(&settings));
    let generator = web::Data::from(generator);

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(64 * 1024))
            .app_data(generator.clone())
            .service(services::recipe::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((settings.host.as_str(), settings.port))?
        .run()
        .await
}
