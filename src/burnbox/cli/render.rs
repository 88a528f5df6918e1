use burnbox::api::{share_link, CmdMessage, MessageLevel};
use burnbox::config::BurnConfig;
use burnbox::id::DocId;
use burnbox::model::DocumentView;
use colored::Colorize;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// The first line is the bare identifier (or link) so scripts can capture it.
pub(super) fn print_created(id: &DocId, base_url: Option<&str>) {
    match base_url {
        Some(base) => println!("{}", share_link(base, id)),
        None => println!("{}", id),
    }
}

/// Content goes to stdout untouched; the status line goes to stderr so the
/// content can be piped.
pub(super) fn print_document(doc: &DocumentView) {
    println!("{}", doc.content);
    eprintln!(
        "{} {}   {} {}",
        "views left:".dimmed(),
        format_remaining_views(doc.remaining_views),
        "time left:".dimmed(),
        format_remaining_time(doc.remaining_time_ms)
    );
}

pub(super) fn print_config(config: &BurnConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key, value);
    }
}

pub(super) fn format_remaining_views(views: Option<u64>) -> String {
    match views {
        Some(n) => n.to_string(),
        None => "unlimited".to_string(),
    }
}

pub(super) fn format_remaining_time(ms: Option<i64>) -> String {
    match ms {
        Some(ms) => {
            let ms = ms.max(0);
            format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1_000)
        }
        None => "unlimited".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_remaining_time() {
        assert_eq!(format_remaining_time(None), "unlimited");
        assert_eq!(format_remaining_time(Some(0)), "0m 0s");
        assert_eq!(format_remaining_time(Some(61_999)), "1m 1s");
        assert_eq!(format_remaining_time(Some(600_000)), "10m 0s");
    }

    #[test]
    fn formats_remaining_views() {
        assert_eq!(format_remaining_views(None), "unlimited");
        assert_eq!(format_remaining_views(Some(0)), "0");
    }
}
