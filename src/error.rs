use thiserror::Error;

/// How a failure is reported: bad invocation, bad export data, or something
/// nobody anticipated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Data,
    Unexpected,
}

#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("destination '{0}' must not exist yet or be an empty directory")]
    DestNotEmpty(String),

    #[error("--remap-until and --remap-offset must be given together")]
    RemapHalfConfigured,

    #[error("user map {0}:{1}: expected 'name<TAB>username', got '{2}'")]
    UserMapSyntax(String, usize, String),

    #[error("ticket {0} references unknown milestone {1}")]
    UnknownMilestone(u64, u64),

    #[error("tickets {0} and {1} both map to issue number {2}")]
    NumberCollision(u64, u64, u64),

    #[error("source entry '{0}' has no numeric id prefix")]
    MissingIdPrefix(String),

    #[error("cannot read '{0}': {1}")]
    Read(String, #[source] std::io::Error),

    #[error("cannot write '{0}': {1}")]
    Write(String, #[source] std::io::Error),

    #[error("malformed record '{0}': {1}")]
    Record(String, #[source] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MigrateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DestNotEmpty(_) | Self::RemapHalfConfigured | Self::UserMapSyntax(..) => {
                ErrorKind::Config
            }
            Self::UnknownMilestone(..) | Self::NumberCollision(..) | Self::MissingIdPrefix(_) => {
                ErrorKind::Data
            }
            Self::Read(..) | Self::Write(..) | Self::Record(..) | Self::Io(_) | Self::Json(_) => {
                ErrorKind::Unexpected
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MigrateError>;
