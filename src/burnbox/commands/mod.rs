use crate::config::BurnConfig;
use crate::id::DocId;
use crate::model::DocumentView;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod init;
pub mod read;

#[derive(Debug, Clone)]
pub struct BurnPaths {
    /// Directory holding `config.json` and the file store's documents.
    pub data_dir: PathBuf,
}

impl BurnPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub created: Option<DocId>,
    pub document: Option<DocumentView>,
    pub config: Option<BurnConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_created(mut self, id: DocId) -> Self {
        self.created = Some(id);
        self
    }

    pub fn with_document(mut self, document: DocumentView) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_config(mut self, config: BurnConfig) -> Self {
        self.config = Some(config);
        self
    }
}
