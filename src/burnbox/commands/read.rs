use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::id::DocId;
use crate::lifecycle::Lifecycle;
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(engine: &Lifecycle<S>, id: &DocId) -> Result<CmdResult> {
    let view = engine.read(id)?;

    let mut result = CmdResult::default();
    if view.remaining_views == Some(0) {
        result.add_message(CmdMessage::warning(
            "That was the last view. The document has been destroyed.",
        ));
    }
    Ok(result.with_document(view))
}
