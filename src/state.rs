use crate::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionPool, Hashing, JwtConfig, UploadStorage},
    di::{DependenciesInject, DependenciesInjectDeps},
};
use anyhow::{Context, Result};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
    pub upload_storage: Arc<UploadStorage>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &"<DependenciesInject>")
            .field("jwt_config", &"<dyn JwtService>")
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hashing = Arc::new(Hashing::new()) as DynHashing;

        let upload_storage = Arc::new(
            UploadStorage::new(&config.upload_dir)
                .context("Failed to prepare upload directory")?,
        );

        let di_container = DependenciesInject::new(DependenciesInjectDeps {
            pool,
            hash: hashing,
            jwt_config: jwt_config.clone(),
        });

        Ok(Self {
            di_container,
            jwt_config,
            upload_storage,
        })
    }
}
