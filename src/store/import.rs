use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::convert::ConvertedTicket;
use crate::error::{MigrateError, Result};
use crate::model::github::Milestone;

/// The destination must not exist yet, or must be an empty directory.
pub fn check_dest(dest_dir: &Path) -> Result<()> {
    if !dest_dir.exists() {
        return Ok(());
    }
    if dest_dir.is_dir() {
        let mut entries = fs::read_dir(dest_dir)
            .map_err(|e| MigrateError::Read(dest_dir.display().to_string(), e))?;
        if entries.next().is_none() {
            return Ok(());
        }
    }
    Err(MigrateError::DestNotEmpty(dest_dir.display().to_string()))
}

/// Write `issues/<n>.json` for every issue, plus `issues/<n>.comments.json`
/// beside it when the issue has comments.
pub fn save_issues(dest_dir: &Path, converted: &[ConvertedTicket]) -> Result<()> {
    let dir = dest_dir.join("issues");
    fs::create_dir_all(&dir).map_err(|e| MigrateError::Write(dir.display().to_string(), e))?;
    for ticket in converted {
        let issue = &ticket.issue;
        info!("saving issue {} - {}", issue.number, truncate_title(&issue.title, 40));
        write_record(&dir.join(format!("{}.json", issue.number)), issue)?;
        if !ticket.comments.is_empty() {
            write_record(
                &dir.join(format!("{}.comments.json", issue.number)),
                &ticket.comments,
            )?;
        }
    }
    Ok(())
}

/// Write `milestones/<n>.json` for every milestone.
pub fn save_milestones(dest_dir: &Path, milestones: &[Milestone]) -> Result<()> {
    let dir = dest_dir.join("milestones");
    fs::create_dir_all(&dir).map_err(|e| MigrateError::Write(dir.display().to_string(), e))?;
    for milestone in milestones {
        info!("saving milestone {} - {}", milestone.number, milestone.title);
        write_record(&dir.join(format!("{}.json", milestone.number)), milestone)?;
    }
    Ok(())
}

fn write_record<T: Serialize>(path: &Path, record: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path, json).map_err(|e| MigrateError::Write(path.display().to_string(), e))
}

fn truncate_title(title: &str, max_len: usize) -> String {
    if title.chars().count() > max_len {
        let truncated: String = title.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    } else {
        title.to_string()
    }
}
