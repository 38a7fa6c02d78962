//! App catalog and mount registry.
//!
//! Window titles, dock labels, and icons come from each app crate's `app.manifest.toml`, which
//! `build.rs` folds into [`APP_MANIFEST_CATALOG_JSON`]. Mounting is a static table of
//! [`AppModule`]s keyed by [`AppId`].

use desktop_app_contract::AppModule;
use serde::Deserialize;
use thiserror::Error;

use crate::model::AppId;

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct AppManifest {
    schema_version: u32,
    app_id: String,
    display_name: String,
    window_title: String,
    dock_icon: String,
    single_instance: bool,
}

#[derive(Debug, Error)]
/// Failures decoding the embedded app catalog.
pub enum CatalogError {
    /// The catalog JSON does not match the manifest schema.
    #[error("app catalog decode failed: {0}")]
    Decode(#[from] serde_json::Error),
    /// A manifest names an app the runtime cannot mount.
    #[error("app catalog names unknown app `{0}`")]
    UnknownApp(String),
    /// A mountable app has no manifest.
    #[error("app catalog is missing `{0}`")]
    MissingApp(&'static str),
    /// A manifest was written for a different schema.
    #[error("manifest `{app_id}` has schema version {found}, expected 1")]
    SchemaMismatch {
        /// Offending manifest id.
        app_id: String,
        /// Declared schema version.
        found: u32,
    },
    /// A manifest asks for multiple windows, which the window registry does not support.
    #[error("manifest `{0}` must declare single_instance = true")]
    MultiInstance(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Presentation metadata for one app.
pub struct AppDescriptor {
    pub app_id: AppId,
    pub display_name: String,
    pub window_title: String,
    pub dock_icon: String,
}

/// Decodes a catalog JSON document into descriptors in dock order.
///
/// # Errors
///
/// Returns [`CatalogError`] when the JSON is malformed, names an unknown app, declares a
/// multi-instance app, or leaves a mountable app without a manifest.
pub fn parse_app_catalog(raw: &str) -> Result<Vec<AppDescriptor>, CatalogError> {
    let manifests: Vec<AppManifest> = serde_json::from_str(raw)?;
    let mut descriptors = Vec::with_capacity(manifests.len());
    for manifest in manifests {
        if manifest.schema_version != 1 {
            return Err(CatalogError::SchemaMismatch {
                app_id: manifest.app_id,
                found: manifest.schema_version,
            });
        }
        let app_id = AppId::from_manifest_id(&manifest.app_id)
            .ok_or_else(|| CatalogError::UnknownApp(manifest.app_id.clone()))?;
        if !manifest.single_instance {
            return Err(CatalogError::MultiInstance(manifest.app_id));
        }
        descriptors.push(AppDescriptor {
            app_id,
            display_name: manifest.display_name,
            window_title: manifest.window_title,
            dock_icon: manifest.dock_icon,
        });
    }

    let mut ordered = Vec::with_capacity(AppId::ALL.len());
    for app_id in AppId::ALL {
        let descriptor = descriptors
            .iter()
            .find(|descriptor| descriptor.app_id == app_id)
            .cloned()
            .ok_or(CatalogError::MissingApp(app_id.manifest_id()))?;
        ordered.push(descriptor);
    }
    Ok(ordered)
}

/// Decodes the catalog embedded at build time.
///
/// # Errors
///
/// See [`parse_app_catalog`].
pub fn app_catalog() -> Result<Vec<AppDescriptor>, CatalogError> {
    parse_app_catalog(APP_MANIFEST_CATALOG_JSON)
}

/// Mount module for an app.
pub fn app_module(app_id: AppId) -> AppModule {
    match app_id {
        AppId::Terminal => AppModule::new(desktop_app_terminal::mount),
        AppId::ChatGbt => AppModule::new(desktop_app_chatgbt::mount),
        AppId::Casino => AppModule::new(desktop_app_casino::mount),
    }
}
