use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use coursehub::auth::{self, rate_limit::RateLimiter};
use coursehub::{db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:data/app.db".to_string());
    if database_url.starts_with("sqlite:") {
        std::fs::create_dir_all("data").expect("Failed to create data directory");
    }

    let pool = db::init_pool(&database_url).await;
    db::run_migrations(&pool).await;

    // Default staff account on first start
    let admin_hash =
        auth::password::hash_password("admin123").expect("Failed to hash default password");
    db::seed_admin(&pool, &admin_hash).await;

    // Session encryption key from SESSION_KEY env var for persistent sessions across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+), generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let limiter = RateLimiter::new();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_secure(false)
                .cookie_http_only(true)
                .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(limiter.clone()))
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Public routes
            .route("/", web::get().to(handlers::home_handlers::index))
            .route("/login", web::get().to(handlers::auth_handlers::login_page))
            .route("/login", web::post().to(handlers::auth_handlers::login_submit))
            .route("/register", web::get().to(handlers::auth_handlers::register_page))
            .route("/register", web::post().to(handlers::auth_handlers::register_submit))
            // Profile creation is auth-only; /students/new BEFORE /students/{id}
            // to avoid routing conflict
            .service(
                web::resource("/students/new")
                    .wrap(middleware::from_fn(auth::middleware::require_auth))
                    .route(web::get().to(handlers::student_handlers::new_form))
                    .route(web::post().to(handlers::student_handlers::create)),
            )
            .route("/students", web::get().to(handlers::student_handlers::list))
            .route("/students/{id}", web::get().to(handlers::student_handlers::read))
            .route(
                "/students/{id}/courses",
                web::get().to(handlers::student_handlers::courses),
            )
            .route(
                "/students/{id}/edit",
                web::get().to(handlers::student_handlers::edit_form),
            )
            .route(
                "/students/{id}/edit",
                web::post().to(handlers::student_handlers::update),
            )
            .route(
                "/students/{id}/delete",
                web::post().to(handlers::student_handlers::delete),
            )
            .route("/courses", web::get().to(handlers::course_handlers::list))
            .route(
                "/courses/{id}/students",
                web::get().to(handlers::course_handlers::students),
            )
            .route(
                "/courses/{id}/reviews",
                web::get().to(handlers::course_handlers::reviews),
            )
            .route(
                "/courses/{id}/edit",
                web::get().to(handlers::course_handlers::edit_form),
            )
            .route(
                "/courses/{id}/edit",
                web::post().to(handlers::course_handlers::update),
            )
            .route(
                "/courses/{id}/delete",
                web::post().to(handlers::course_handlers::delete),
            )
            .route("/reviews", web::get().to(handlers::review_handlers::list))
            .route("/reviews/{id}", web::get().to(handlers::review_handlers::read))
            .route(
                "/reviews/{id}/edit",
                web::get().to(handlers::review_handlers::edit_form),
            )
            .route(
                "/reviews/{id}/edit",
                web::post().to(handlers::review_handlers::update),
            )
            .route(
                "/reviews/{id}/delete",
                web::post().to(handlers::review_handlers::delete),
            )
            // Protected routes
            .service(
                web::scope("")
                    .wrap(middleware::from_fn(auth::middleware::require_auth))
                    .route("/logout", web::post().to(handlers::auth_handlers::logout))
                    // /courses/new BEFORE /courses/{id}
                    .route("/courses/new", web::get().to(handlers::course_handlers::new_form))
                    .route("/courses/new", web::post().to(handlers::course_handlers::create))
                    .route("/courses/{id}", web::get().to(handlers::course_handlers::detail))
                    .route(
                        "/courses/{id}/enroll",
                        web::post().to(handlers::course_handlers::enroll),
                    )
                    .route(
                        "/courses/{id}/unenroll",
                        web::post().to(handlers::course_handlers::unenroll),
                    )
                    .route(
                        "/courses/{id}/reviews/new",
                        web::get().to(handlers::review_handlers::new_form),
                    )
                    .route(
                        "/courses/{id}/reviews/new",
                        web::post().to(handlers::review_handlers::create),
                    ),
            )
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(include_str!("../templates/errors/404.html"))
            }))
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
