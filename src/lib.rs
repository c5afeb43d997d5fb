//! Convert issues exported from Lighthouse to the GitHub import format.
//!
//! A Lighthouse export is a tree of per-ticket and per-milestone JSON files;
//! the output is one JSON file per issue, comment list, and milestone, shaped
//! for GitHub's bulk issue importer.

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod remap;
pub mod rewrite;
pub mod store;
pub mod usermap;

use std::collections::HashMap;

use crate::config::Config;
use crate::convert::{TicketConverter, convert_milestones};
use crate::error::{MigrateError, Result};
use crate::remap::IdRemap;
use crate::usermap::UserMap;

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub issues: usize,
    pub comments: usize,
    pub milestones: usize,
    pub skipped_spam: usize,
}

/// Run a whole migration: load the export, convert it, save the results.
pub fn run(config: &Config) -> Result<RunSummary> {
    let users = match &config.user_map {
        Some(path) => UserMap::from_file(path)?,
        None => UserMap::default(),
    };
    let remap = IdRemap::new(config.remap_until, config.remap_offset)?;

    store::check_dest(&config.dest_dir)?;

    let milestones = store::read_milestones(&config.source_dir)?;
    let set = convert_milestones(&milestones);

    let tickets = store::read_tickets(&config.source_dir)?;
    let converter =
        TicketConverter::new(&users, remap, &set.numbers, config.project_url.as_deref());

    let mut converted = Vec::new();
    let mut skipped_spam = 0;
    // destination number -> source number, to catch renumbering collisions
    let mut sources = HashMap::new();
    for src in tickets.values() {
        let Some(ticket) = converter.convert(src)? else {
            skipped_spam += 1;
            continue;
        };
        if let Some(&first) = sources.get(&ticket.issue.number) {
            return Err(MigrateError::NumberCollision(
                first,
                src.number,
                ticket.issue.number,
            ));
        }
        sources.insert(ticket.issue.number, src.number);
        converted.push(ticket);
    }

    store::save_issues(&config.dest_dir, &converted)?;
    store::save_milestones(&config.dest_dir, &set.milestones)?;

    Ok(RunSummary {
        issues: converted.len(),
        comments: converted.iter().map(|ticket| ticket.comments.len()).sum(),
        milestones: set.milestones.len(),
        skipped_spam,
    })
}
