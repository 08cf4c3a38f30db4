use actix_cors::Cors;
use actix_server::ServerHandle;
use actix_web::{
    App, HttpServer,
    web::{self, Data},
};
use anyhow::{Context, Result};
use connect_status::{
    api::Api,
    config::{AppConfig, CertificateConfig},
    database::TcpDatabaseProbe,
    logging,
};
use log::{debug, error, info};
use rustls::crypto::{CryptoProvider, ring::default_provider};
use tokio::signal::unix::{SignalKind, signal};

type UiApi = Api<TcpDatabaseProbe>;

#[actix_web::main]
async fn main() {
    if let Err(e) = run().await {
        error!("application error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    initialize()?;

    let mut sigterm =
        signal(SignalKind::terminate()).context("failed to install SIGTERM handler")?;

    let (server_handle, server_task) = run_server()?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            debug!("ctrl-c received");
        },
        _ = sigterm.recv() => {
            debug!("SIGTERM received");
        },
        result = server_task => {
            match result {
                Ok(Ok(())) => debug!("server stopped normally"),
                Ok(Err(e)) => error!("server stopped with error: {e}"),
                Err(e) => error!("server task panicked: {e}"),
            }
        },
    }

    info!("shutting down");
    server_handle.stop(true).await;
    info!("shutdown complete");

    Ok(())
}

fn initialize() -> Result<()> {
    logging::init();

    info!(
        "module version: {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_SHORT_REV")
    );

    let config = AppConfig::load().context("failed to load application configuration")?;
    info!(
        "probing database at {} (timeout {:?})",
        config.database.address, config.database.connect_timeout
    );

    CryptoProvider::install_default(default_provider())
        .map_err(|_| anyhow::anyhow!("crypto provider already installed"))?;

    Ok(())
}

fn run_server() -> Result<(
    ServerHandle,
    tokio::task::JoinHandle<Result<(), std::io::Error>>,
)> {
    let config = AppConfig::get();
    let dist_dir = config.ui.dist_dir.clone();
    let api = Data::new(UiApi::new(
        TcpDatabaseProbe::new(&config.database),
        dist_dir.clone(),
    ));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_header()
                    .allowed_methods(vec!["GET", "POST"])
                    .max_age(3600),
            )
            .app_data(api.clone())
            .route("/", web::get().to(UiApi::index))
            .route("/connect", web::get().to(UiApi::connect))
            .route("/normalize", web::post().to(UiApi::normalize))
            .route("/version", web::get().to(UiApi::version))
            .service(actix_files::Files::new("/static", dist_dir.join("static")))
            .default_service(web::route().to(UiApi::index))
    });

    let address = format!("0.0.0.0:{}", config.ui.port);
    let server = match &config.certificate {
        Some(certificate) => {
            let tls_config = load_tls_config(certificate).context("failed to load tls config")?;
            info!("serving https on {address}");
            server.bind_rustls_0_23(&address, tls_config)
        }
        None => {
            info!("serving http on {address}");
            server.bind(&address)
        }
    }
    .context("failed to bind server")?
    .disable_signals()
    .run();

    Ok((server.handle(), tokio::spawn(server)))
}

fn load_tls_config(paths: &CertificateConfig) -> Result<rustls::ServerConfig> {
    let mut tls_certs = std::io::BufReader::new(
        std::fs::File::open(&paths.cert_path).context("failed to open certificate file")?,
    );

    let mut tls_key = std::io::BufReader::new(
        std::fs::File::open(&paths.key_path).context("failed to open key file")?,
    );

    let tls_certs = rustls_pemfile::certs(&mut tls_certs)
        .collect::<Result<Vec<_>, _>>()
        .context("failed to parse certificate pem")?;

    let key = rustls_pemfile::private_key(&mut tls_key)
        .context("failed to read key pem file")?
        .context("no valid key found in pem file")?;

    rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(tls_certs, key)
        .context("failed to create tls config")
}
