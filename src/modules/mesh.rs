//! Search mesh discovery client handle.
//!
//! # Responsibilities
//! - Parse and validate the mesh DSN
//! - Expose the resolved endpoint to apps that publish or query the mesh

use thiserror::Error;
use url::Url;

/// Errors building a [`MeshClient`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    #[error("invalid mesh DSN '{dsn}': {reason}")]
    InvalidDsn { dsn: String, reason: String },

    #[error("unsupported mesh scheme '{0}' (expected local, etcd or grpc)")]
    UnsupportedScheme(String),
}

/// Transport used to reach the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshBackend {
    /// In-process mesh, no network.
    Local,
    Etcd,
    Grpc,
}

/// Handle to the search mesh discovery service.
#[derive(Debug, Clone)]
pub struct MeshClient {
    dsn: Url,
    backend: MeshBackend,
}

impl MeshClient {
    pub fn new(dsn: &str) -> Result<Self, MeshError> {
        let url = Url::parse(dsn).map_err(|e| MeshError::InvalidDsn {
            dsn: dsn.to_string(),
            reason: e.to_string(),
        })?;

        let backend = match url.scheme() {
            "local" => MeshBackend::Local,
            "etcd" => MeshBackend::Etcd,
            "grpc" => MeshBackend::Grpc,
            other => return Err(MeshError::UnsupportedScheme(other.to_string())),
        };

        if backend != MeshBackend::Local && url.host_str().map_or(true, str::is_empty) {
            return Err(MeshError::InvalidDsn {
                dsn: dsn.to_string(),
                reason: "missing host".to_string(),
            });
        }

        Ok(Self { dsn: url, backend })
    }

    pub fn backend(&self) -> MeshBackend {
        self.backend
    }

    /// `host:port` of the mesh, or `None` for the in-process mesh.
    pub fn endpoint(&self) -> Option<String> {
        let host = self.dsn.host_str().filter(|h| !h.is_empty())?;
        Some(match self.dsn.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        })
    }

    /// Namespace path segment of the DSN (e.g., `/eos-mainnet`), without the slash.
    pub fn namespace(&self) -> Option<&str> {
        let path = self.dsn.path().trim_start_matches('/');
        (!path.is_empty()).then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_dsn() {
        let client = MeshClient::new("local://").unwrap();
        assert_eq!(client.backend(), MeshBackend::Local);
        assert_eq!(client.endpoint(), None);
    }

    #[test]
    fn test_etcd_dsn_with_namespace() {
        let client = MeshClient::new("etcd://etcd.mesh:2379/eos-mainnet").unwrap();
        assert_eq!(client.backend(), MeshBackend::Etcd);
        assert_eq!(client.endpoint().as_deref(), Some("etcd.mesh:2379"));
        assert_eq!(client.namespace(), Some("eos-mainnet"));
    }

    #[test]
    fn test_rejects_unknown_scheme() {
        let err = MeshClient::new("redis://localhost").unwrap_err();
        assert_eq!(err, MeshError::UnsupportedScheme("redis".into()));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            MeshClient::new("not a dsn"),
            Err(MeshError::InvalidDsn { .. })
        ));
    }
}
