use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{MigrateError, Result};
use crate::model::lighthouse::{Milestone, MilestoneFile, Ticket, TicketFile};

/// Read every `tickets/<id>-<slug>/ticket.json` under the export root, keyed
/// by ticket id. Records the exporter dumped as JSON `null` are skipped.
pub fn read_tickets(source_dir: &Path) -> Result<BTreeMap<u64, Ticket>> {
    let dir = source_dir.join("tickets");
    let mut tickets = BTreeMap::new();
    for entry in list_entries(&dir)? {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        debug!("importing ticket {name}");
        let id = id_prefix(&entry.path(), &name)?;
        match read_record::<TicketFile>(&entry.path().join("ticket.json"))? {
            Some(file) => {
                tickets.insert(id, file.ticket);
            }
            None => debug!("no record in {name}, skipped"),
        }
    }
    Ok(tickets)
}

/// Read every `milestones/<id>-<slug>.json` under the export root, keyed by
/// milestone id.
pub fn read_milestones(source_dir: &Path) -> Result<BTreeMap<u64, Milestone>> {
    let dir = source_dir.join("milestones");
    let mut milestones = BTreeMap::new();
    for entry in list_entries(&dir)? {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        debug!("importing milestone {name}");
        let id = id_prefix(&entry.path(), &name)?;
        match read_record::<MilestoneFile>(&entry.path())? {
            Some(file) => {
                milestones.insert(id, file.milestone);
            }
            None => debug!("no record in {name}, skipped"),
        }
    }
    Ok(milestones)
}

fn list_entries(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    fs::read_dir(dir)
        .and_then(|entries| entries.collect())
        .map_err(|e| MigrateError::Read(dir.display().to_string(), e))
}

/// Export entries carry their record's id up front: `77-version-2-0.json`.
fn id_prefix(path: &Path, name: &str) -> Result<u64> {
    let end = name
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(name.len());
    name[..end]
        .parse()
        .map_err(|_| MigrateError::MissingIdPrefix(path.display().to_string()))
}

fn read_record<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let data = fs::read_to_string(path)
        .map_err(|e| MigrateError::Read(path.display().to_string(), e))?;
    serde_json::from_str(&data).map_err(|e| MigrateError::Record(path.display().to_string(), e))
}
