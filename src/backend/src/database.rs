use crate::config::DatabaseConfig;
use anyhow::{Context, Result};
use log::debug;
#[cfg(any(test, feature = "mock"))]
use mockall::automock;
use std::time::Duration;
use tokio::net::TcpStream;
use trait_variant::make;

/// Checks whether the database server can be reached from this host
#[make(Send)]
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait DatabaseProbe {
    async fn check(&self) -> Result<()>;
}

/// Probe opening a TCP connection to the database server.
///
/// Without the VPN the server is unroutable, so the connect attempt is bounded
/// by `connect_timeout`.
#[derive(Clone, Debug)]
pub struct TcpDatabaseProbe {
    address: String,
    connect_timeout: Duration,
}

impl TcpDatabaseProbe {
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            address: config.address.clone(),
            connect_timeout: config.connect_timeout,
        }
    }
}

impl DatabaseProbe for TcpDatabaseProbe {
    async fn check(&self) -> Result<()> {
        debug!("connecting to database at {}", self.address);

        let stream = tokio::time::timeout(self.connect_timeout, TcpStream::connect(self.address.as_str()))
            .await
            .with_context(|| {
                format!(
                    "failed to reach database at {} within {:?}",
                    self.address, self.connect_timeout
                )
            })?
            .with_context(|| format!("failed to connect to database at {}", self.address))?;

        debug!("database reachable via {:?}", stream.local_addr());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    fn probe(address: String) -> TcpDatabaseProbe {
        TcpDatabaseProbe::new(&DatabaseConfig {
            address,
            connect_timeout: Duration::from_secs(2),
        })
    }

    #[tokio::test]
    async fn check_succeeds_when_listener_accepts() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();

        assert!(probe(address).check().await.is_ok());
    }

    #[tokio::test]
    async fn check_fails_when_nothing_listens() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();
        drop(listener);

        let err = probe(address).check().await.unwrap_err();
        assert!(format!("{err:#}").contains("failed to connect to database"));
    }
}
