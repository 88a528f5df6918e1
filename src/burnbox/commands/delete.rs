use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::id::DocId;
use crate::lifecycle::Lifecycle;
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(engine: &Lifecycle<S>, id: &DocId) -> Result<CmdResult> {
    engine.delete(id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Document deleted: {}", id)));
    Ok(result)
}
