use std::path::PathBuf;

/// Everything a run needs, resolved once from the command line.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Lighthouse export directory, holding `tickets/` and `milestones/`.
    pub source_dir: PathBuf,
    /// Output directory; must not exist yet or be empty.
    pub dest_dir: PathBuf,
    /// Highest ticket number the renumbering applies to.
    pub remap_until: Option<u64>,
    /// Amount added to renumbered tickets.
    pub remap_offset: Option<u64>,
    /// Optional tab-separated author-name to username table.
    pub user_map: Option<PathBuf>,
    /// Base URL of the source project, cited when tickets are renumbered.
    pub project_url: Option<String>,
}
