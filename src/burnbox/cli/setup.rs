use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "burnbox", bin_name = "burnbox", version = get_version())]
#[command(about = "Share text that burns after reading", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding documents and config.json
    #[arg(
        long,
        global = true,
        env = "BURNBOX_DATA",
        value_name = "PATH",
        help_heading = "Options"
    )]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store a new document (reads stdin when no content is given)
    #[command(alias = "n")]
    Create {
        /// Document content
        content: Option<String>,

        /// Destroy the document after this many views (0 and 1 both mean one view)
        #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
        max_views: Option<String>,

        /// Destroy the document this many minutes from now
        #[arg(short, long = "ttl", value_name = "MINUTES", allow_hyphen_values = true)]
        ttl_minutes: Option<String>,

        /// Print a share link under this URL instead of the bare identifier
        #[arg(long, env = "BURNBOX_BASE_URL", value_name = "URL")]
        base_url: Option<String>,
    },

    /// Read a document. Counts as one view.
    #[command(alias = "v")]
    Read {
        /// Identifier or share link
        id: String,
    },

    /// Delete a document now
    #[command(alias = "rm")]
    Delete {
        /// Identifier or share link
        id: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (id-length, id-attempts, max-content-bytes, consistency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory
    Init,
}
