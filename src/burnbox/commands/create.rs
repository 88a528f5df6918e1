use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lifecycle::Lifecycle;
use crate::model::Limits;
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(
    engine: &Lifecycle<S>,
    content: String,
    limits: Limits,
) -> Result<CmdResult> {
    let id = engine.create(content, limits)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Document created: {}", id)));
    if let Some(views) = limits.max_views {
        result.add_message(CmdMessage::info(match views {
            0 | 1 => "Destroyed after the first view".to_string(),
            n => format!("Destroyed after {} views", n),
        }));
    }
    if let Some(ttl) = limits.ttl {
        result.add_message(CmdMessage::info(format!(
            "Expires in {} minute(s)",
            ttl.minutes()
        )));
    }
    Ok(result.with_created(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TtlMinutes;
    use crate::store::memory::MemoryStore;

    #[test]
    fn creates_and_reports_limits() {
        let engine = Lifecycle::new(MemoryStore::new());
        let limits = Limits::views(3).with_ttl(TtlMinutes::new(10.0).unwrap());
        let result = run(&engine, "hello".into(), limits).unwrap();

        let id = result.created.expect("id");
        assert!(engine.store().get(&id).unwrap().is_some());
        assert_eq!(result.messages.len(), 3);
        assert!(result.messages[1].content.contains("3 views"));
        assert!(result.messages[2].content.contains("10 minute"));
    }

    #[test]
    fn unlimited_document_has_single_message() {
        let engine = Lifecycle::new(MemoryStore::new());
        let result = run(&engine, "hello".into(), Limits::unlimited()).unwrap();
        assert_eq!(result.messages.len(), 1);
    }
}
