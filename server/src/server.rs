use log::{debug, info};
use rocket::response::status::Created;
use rocket::serde::json::{self, Json};
use rocket::serde::Serialize;
use rocket::{get, post, routes, Build, Responder, Rocket, State};
use std::env::VarError;
use std::sync::Arc;

use crate::builder::RecordBuilder;
use crate::error::{ConfigError, NewsError};
use crate::id::IdStrategy;
use crate::news::{News, NewsId, NewsInfo};
use crate::store::NewsStore;

pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Responder, Debug)]
pub enum ApiError {
    #[response(status = 400)]
    BadRequest(String),
    #[response(status = 404)]
    NotFound(String),
}

impl From<NewsError> for ApiError {
    fn from(e: NewsError) -> Self {
        match e {
            NewsError::NotFound(id) => {
                debug!("news {} not found", id);
                ApiError::NotFound(String::from("News not found"))
            }
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StoreStats {
    pub records: usize,
}

#[get("/")]
fn health_check() -> &'static str {
    "Healthy\n"
}

#[get("/stats")]
fn store_stats(store: &State<Arc<NewsStore>>) -> Json<StoreStats> {
    Json(StoreStats {
        records: store.len(),
    })
}

#[post("/news", data = "<info>")]
fn create_news(
    info: Result<Json<NewsInfo>, json::Error<'_>>,
    store: &State<Arc<NewsStore>>,
    builder: &State<Arc<RecordBuilder>>,
) -> Result<Created<Json<News>>, ApiError> {
    let info = info.map_err(|e| {
        debug!("rejected news submission: {}", e);
        ApiError::BadRequest(String::from("Failed to decode news data"))
    })?;
    let news = builder.create(store, info.into_inner());
    Ok(Created::new(format!("/news/{}", news.id)).body(Json(news)))
}

#[get("/news/<id>")]
fn get_news(id: Result<NewsId, &str>, store: &State<Arc<NewsStore>>) -> Result<Json<News>, ApiError> {
    let id = id.map_err(|raw| {
        debug!("invalid news id {:?}", raw);
        ApiError::BadRequest(String::from("Invalid news ID"))
    })?;
    debug!("get_news: {}", id);
    Ok(Json(store.get(id)?))
}

/// Picks the listening port: the `--port` flag wins, then the `NEWS_PORT`
/// variable, then [`DEFAULT_PORT`]. A value that is present but not a valid
/// port is an error rather than a silent fallback.
pub fn resolve_port(flag: Option<&str>, env: Result<String, VarError>) -> Result<u16, ConfigError> {
    let (name, value) = match (flag, env) {
        (Some(flag), _) => ("--port", flag.to_string()),
        (None, Ok(value)) => ("NEWS_PORT", value),
        (None, Err(VarError::NotPresent)) => return Ok(DEFAULT_PORT),
        (None, Err(VarError::NotUnicode(raw))) => ("NEWS_PORT", raw.to_string_lossy().into_owned()),
    };
    match value.trim().parse::<u16>() {
        Ok(port) => Ok(port),
        Err(_) => Err(ConfigError::InvalidPort {
            name: name.to_string(),
            value,
        }),
    }
}

pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub id_strategy: IdStrategy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            address: String::from(DEFAULT_ADDRESS),
            port: DEFAULT_PORT,
            id_strategy: IdStrategy::Random,
        }
    }
}

pub struct ServerNode {
    config: ServerConfig,
    store: Arc<NewsStore>,
    builder: Arc<RecordBuilder>,
}

impl ServerNode {
    pub fn new(config: ServerConfig) -> Self {
        info!("Using {:?} news ids.", config.id_strategy);
        let builder = Arc::new(RecordBuilder::new(config.id_strategy.generator()));
        ServerNode {
            config,
            store: Arc::new(NewsStore::new()),
            builder,
        }
    }

    pub fn store(&self) -> Arc<NewsStore> {
        self.store.clone()
    }

    pub fn build(&self) -> Rocket<Build> {
        rocket::build()
            .configure(
                rocket::Config::figment()
                    .merge(("address", self.config.address.clone()))
                    .merge(("port", self.config.port)),
            )
            .manage(self.store.clone())
            .manage(self.builder.clone())
            .mount(
                "/",
                routes![health_check, store_stats, create_news, get_news],
            )
    }
}
