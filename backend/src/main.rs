use backend::{
    build_rocket,
    config::ServiceConfig,
    cors::CORS,
    routes::AppState,
    store::PgCountStore,
};
use rocket::{routes, fs::NamedFile};
use shuttle_runtime::CustomError;
use sqlx::PgPool;
use tracing::info;
use include_dir::{include_dir, Dir};
use uuid::Uuid;

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

#[rocket::get("/<path..>")]
async fn static_handler(path: std::path::PathBuf, temp_dir: &rocket::State<std::path::PathBuf>) -> Option<NamedFile> {
    let file_path = temp_dir.join(&path);
    if file_path.exists() && file_path.is_file() {
        NamedFile::open(&file_path).await.ok()
    } else {
        NamedFile::open(temp_dir.join("index.html")).await.ok()
    }
}

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    let config = ServiceConfig::from_lookup(|key| secret_store.get(key));
    info!("🚀 Starting visitor counter for site '{}'", config.site_id);

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(CustomError::new)?;

    info!("📋 Migrations complete");

    let temp_dir = std::env::temp_dir().join(format!("visitor_counter_static_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&temp_dir).map_err(CustomError::new)?;
    STATIC_DIR.extract(&temp_dir).map_err(CustomError::new)?;

    let state = AppState::new(PgCountStore::new(pool), config.site_id);
    let rocket = build_rocket(state, CORS::new(config.allowed_origins))
        .manage(temp_dir)
        .mount("/", routes![static_handler]);

    Ok(rocket.into())
}
