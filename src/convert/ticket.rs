use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::error::{MigrateError, Result};
use crate::model::github::{Comment, Issue, State};
use crate::model::lighthouse::{Ticket, Version};
use crate::remap::IdRemap;
use crate::rewrite::Rewriter;
use crate::usermap::UserMap;

/// `Submitted by: <name>`, a blank line, then the real text. The source
/// tracker prepended this header to tickets opened through the public web
/// form, crediting them all to the site account instead of the visitor.
static SUBMITTED_BY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^Submitted by:\s+([^\n]+)\n\n(.*)").unwrap());

/// One converted ticket: the issue record plus its comments, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedTicket {
    pub issue: Issue,
    pub comments: Vec<Comment>,
}

pub struct TicketConverter<'a> {
    users: &'a UserMap,
    remap: IdRemap,
    rewriter: Rewriter,
    /// Source milestone id -> destination milestone number.
    milestones: &'a HashMap<u64, u64>,
    project_url: Option<&'a str>,
}

impl<'a> TicketConverter<'a> {
    pub fn new(
        users: &'a UserMap,
        remap: IdRemap,
        milestones: &'a HashMap<u64, u64>,
        project_url: Option<&'a str>,
    ) -> Self {
        Self {
            users,
            remap,
            rewriter: Rewriter::new(remap),
            milestones,
            project_url,
        }
    }

    /// Convert one source ticket. Spam converts to nothing.
    pub fn convert(&self, src: &Ticket) -> Result<Option<ConvertedTicket>> {
        if src.spam {
            info!("ignoring spam ticket {} - {}", src.number, src.title);
            return Ok(None);
        }

        let number = self.remap.remap(src.number);
        let (author, body) = split_submitted_by(&src.latest_body)
            .unwrap_or((src.creator_name.as_str(), src.latest_body.as_str()));
        let user = self.users.resolve(author);

        let mut parts = Vec::new();
        if user.fallback {
            parts.push(format!("Originally submitted by: {author}"));
        }
        if number != src.number {
            parts.push(self.renumber_note(src.number));
        }
        parts.push(body.to_string());

        let milestone = src
            .milestone_id
            .map(|id| self.milestone_number(src.number, id))
            .transpose()?;

        let issue = Issue {
            number,
            title: src.title.clone(),
            body: self.rewriter.rewrite(&parts.join("\n\n")),
            user: user.username.to_string(),
            state: if src.closed { State::Closed } else { State::Open },
            created_at: src.created_at,
            updated_at: src.updated_at,
            closed_at: first_closed_at(&src.versions),
            assignee: src
                .assigned_user_name
                .as_deref()
                .map(|name| self.users.resolve(name).username.to_string()),
            milestone,
            labels: labels_for(&src.state, src.tag.as_deref()),
        };

        let comments = src
            .versions
            .iter()
            .skip(1)
            .filter_map(|ver| self.convert_version(ver))
            .collect();

        Ok(Some(ConvertedTicket { issue, comments }))
    }

    /// Every revision past the original submission becomes a comment, unless
    /// it only changed metadata and carries no text.
    fn convert_version(&self, ver: &Version) -> Option<Comment> {
        let body = ver.body.as_deref().filter(|body| !body.is_empty())?;
        let user = self.users.resolve(&ver.user_name);
        let body = if user.fallback {
            format!("Originally submitted by: {}\n\n{}", ver.user_name, body)
        } else {
            body.to_string()
        };
        Some(Comment {
            body: self.rewriter.rewrite(&body),
            user: user.username.to_string(),
            created_at: ver.created_at,
            updated_at: ver.updated_at,
        })
    }

    fn milestone_number(&self, ticket: u64, id: u64) -> Result<u64> {
        self.milestones
            .get(&id)
            .copied()
            .ok_or(MigrateError::UnknownMilestone(ticket, id))
    }

    /// Points readers of a renumbered issue back at the source ticket.
    fn renumber_note(&self, number: u64) -> String {
        match self.project_url {
            Some(url) => format!(
                "Originally submitted as number {number} - {}/tickets/{number}",
                url.trim_end_matches('/')
            ),
            None => format!("Originally submitted as number {number}"),
        }
    }
}

/// Peel the web-form header off a ticket body, returning the embedded author
/// name and the text that follows it.
fn split_submitted_by(body: &str) -> Option<(&str, &str)> {
    let caps = SUBMITTED_BY.captures(body)?;
    let author = caps.get(1)?.as_str().trim_end();
    let rest = caps.get(2)?.as_str().trim_start();
    Some((author, rest))
}

/// The first transition to closed wins, even if the ticket was later
/// reopened and closed again.
fn first_closed_at(versions: &[Version]) -> Option<DateTime<FixedOffset>> {
    versions.iter().find(|ver| ver.closed).map(|ver| ver.created_at)
}

/// Coarse workflow-state label plus whatever the tag text implies.
fn labels_for(state: &str, tag: Option<&str>) -> Vec<String> {
    let mut labels = Vec::new();
    let state_label = match state {
        "open" => Some("confirmed"),
        "hold" => Some("hold"),
        "invalid" => Some("invalid"),
        _ => None,
    };
    labels.extend(state_label.map(String::from));
    let tag = tag.unwrap_or("");
    if tag.contains("feature") {
        labels.push("enhancement".into());
    }
    if tag.contains("question") {
        labels.push("question".into());
    }
    labels
}
