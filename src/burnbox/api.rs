//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Every UI (the CLI
//! today, an HTTP handler tomorrow) goes through [`BurnApi`].
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Normalizes inputs**: raw form strings become [`Limits`], raw identifiers
//!   or share links become [`DocId`]s
//! - **Dispatches** to the matching command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Business rules live in the lifecycle engine; presentation lives in the UI.
//!
//! ## Unavailable documents
//!
//! A read of an identifier that can't name a document (bad characters, too
//! long) reports `NotFound`, the same as a well-formed id with no record.
//! Delete of such an identifier succeeds, since there is nothing to remove.
//!
//! ## Generic Over DocumentStore
//!
//! `BurnApi<S: DocumentStore>` is generic over the storage backend:
//! - Production: `BurnApi<FileStore>`
//! - Testing: `BurnApi<MemoryStore>`

use crate::commands;
use crate::error::{BurnError, Result};
use crate::id::DocId;
use crate::lifecycle::Lifecycle;
use crate::model::Limits;
use crate::store::DocumentStore;

/// The main API facade for burnbox operations.
pub struct BurnApi<S: DocumentStore> {
    engine: Lifecycle<S>,
    paths: commands::BurnPaths,
}

impl<S: DocumentStore> BurnApi<S> {
    pub fn new(engine: Lifecycle<S>, paths: commands::BurnPaths) -> Self {
        Self { engine, paths }
    }

    pub fn create_document(
        &self,
        content: String,
        max_views: Option<&str>,
        ttl_minutes: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let limits = Limits::parse(max_views, ttl_minutes)?;
        commands::create::run(&self.engine, content, limits)
    }

    pub fn read_document(&self, reference: &str) -> Result<commands::CmdResult> {
        let id = parse_reference(reference)
            .map_err(|_| BurnError::NotFound(reference.trim().to_string()))?;
        commands::read::run(&self.engine, &id)
    }

    pub fn delete_document(&self, reference: &str) -> Result<commands::CmdResult> {
        match parse_reference(reference) {
            Ok(id) => commands::delete::run(&self.engine, &id),
            Err(_) => {
                let mut result = commands::CmdResult::default();
                result.add_message(commands::CmdMessage::success(format!(
                    "Document deleted: {}",
                    reference.trim()
                )));
                Ok(result)
            }
        }
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn engine(&self) -> &Lifecycle<S> {
        &self.engine
    }
}

/// Accepts a bare identifier or a share link ending in `/doc/<id>`.
pub fn parse_reference(reference: &str) -> Result<DocId> {
    let trimmed = reference.trim().trim_end_matches('/');
    let raw = match trimmed.rfind("/doc/") {
        Some(pos) => &trimmed[pos + "/doc/".len()..],
        None => trimmed,
    };
    DocId::parse(raw)
}

/// Share link for `id` under `base_url`, in the `<base>/doc/<id>` form.
pub fn share_link(base_url: &str, id: &DocId) -> String {
    format!("{}/doc/{}", base_url.trim_end_matches('/'), id)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{BurnPaths, CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use tempfile::TempDir;

    fn api() -> (BurnApi<MemoryStore>, TempDir) {
        let tmp = TempDir::new().unwrap();
        let api = BurnApi::new(
            Lifecycle::new(MemoryStore::new()),
            BurnPaths::new(tmp.path()),
        );
        (api, tmp)
    }

    #[test]
    fn create_parses_raw_limits() {
        let (api, _tmp) = api();
        let created = api
            .create_document("hello".into(), Some("2"), Some(""))
            .unwrap();
        let id = created.created.unwrap();

        let read = api.read_document(id.as_str()).unwrap();
        let doc = read.document.unwrap();
        assert_eq!(doc.remaining_views, Some(1));
        assert_eq!(doc.remaining_time_ms, None);
    }

    #[test]
    fn create_rejects_negative_views_without_persisting() {
        let (api, _tmp) = api();
        let err = api
            .create_document("hello".into(), Some("-1"), None)
            .unwrap_err();
        assert!(matches!(err, BurnError::Validation(_)));
        assert!(api.engine().store().is_empty());
    }

    #[test]
    fn read_accepts_share_links() {
        let (api, _tmp) = api();
        let id = api
            .create_document("linked".into(), None, None)
            .unwrap()
            .created
            .unwrap();
        let link = share_link("https://burn.example/", &id);
        assert_eq!(link, format!("https://burn.example/doc/{}", id));

        let read = api.read_document(&link).unwrap();
        assert_eq!(read.document.unwrap().content, "linked");
    }

    #[test]
    fn malformed_ids_read_as_not_found() {
        let (api, _tmp) = api();
        let err = api.read_document("../../etc/passwd").unwrap_err();
        assert!(matches!(err, BurnError::NotFound(_)));
    }

    #[test]
    fn delete_always_succeeds() {
        let (api, _tmp) = api();
        assert!(api.delete_document("nothing-here").is_ok());
        assert!(api.delete_document("not/an id").is_ok());
    }

    #[test]
    fn parse_reference_forms() {
        assert_eq!(parse_reference("abc123").unwrap().as_str(), "abc123");
        assert_eq!(
            parse_reference("http://host/doc/abc123/").unwrap().as_str(),
            "abc123"
        );
        assert!(parse_reference("http://host/doc/").is_err());
    }
}
