use crate::{database::DatabaseProbe, services::normalize::normalize_name};
use actix_files::NamedFile;
use actix_web::{HttpResponse, Responder, web};
use connect_status_core::{FAILURE_MESSAGE, SUCCESS_MESSAGE};
use log::{debug, info, warn};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize)]
pub struct NormalizeForm {
    name: String,
}

#[derive(Clone)]
pub struct Api<Probe>
where
    Probe: DatabaseProbe,
{
    pub database_probe: Probe,
    pub ui_dist_dir: PathBuf,
}

impl<Probe> Api<Probe>
where
    Probe: DatabaseProbe,
{
    pub fn new(database_probe: Probe, ui_dist_dir: PathBuf) -> Self {
        Api {
            database_probe,
            ui_dist_dir,
        }
    }

    pub async fn index(api: web::Data<Self>) -> actix_web::Result<NamedFile> {
        debug!("index() called");
        Ok(NamedFile::open(api.ui_dist_dir.join("index.html"))?)
    }

    /// Answers the page's connectivity probe with one of the two status sentences
    pub async fn connect(api: web::Data<Self>) -> impl Responder {
        debug!("connect() called");

        let body = match api.database_probe.check().await {
            Ok(()) => {
                info!("database reachable");
                SUCCESS_MESSAGE
            }
            Err(e) => {
                warn!("database unreachable: {e:#}");
                FAILURE_MESSAGE
            }
        };

        HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(body)
    }

    pub async fn normalize(form: web::Form<NormalizeForm>) -> impl Responder {
        debug!("normalize() called");
        HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(normalize_name(&form.name))
    }

    pub async fn version() -> impl Responder {
        HttpResponse::Ok().body(env!("CARGO_PKG_VERSION"))
    }
}
