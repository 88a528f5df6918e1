use crate::commands::{BurnPaths, CmdMessage, CmdResult};
use crate::error::Result;
use std::fs;

pub fn run(paths: &BurnPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized burnbox store at {}",
        paths.data_dir.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_data_dir() {
        let tmp = TempDir::new().unwrap();
        let paths = BurnPaths::new(tmp.path().join("a").join("b"));
        run(&paths).unwrap();
        assert!(paths.data_dir.is_dir());
    }
}
