use std::collections::{BTreeMap, HashMap};

use crate::model::{github, lighthouse};

/// Milestones ready to save, plus the id translation ticket conversion needs.
/// Source ids disappear from the output; they only survive in `numbers`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MilestoneSet {
    /// Destination records, in saving order.
    pub milestones: Vec<github::Milestone>,
    /// Source milestone id -> destination milestone number.
    pub numbers: HashMap<u64, u64>,
}

/// Number milestones 1..N in ascending source-id order, the order they were
/// created in. The destination tracker hands out numbers the same way.
pub fn convert_milestones(sources: &BTreeMap<u64, lighthouse::Milestone>) -> MilestoneSet {
    let mut set = MilestoneSet::default();
    for (i, (&id, src)) in sources.iter().enumerate() {
        let number = i as u64 + 1;
        set.numbers.insert(id, number);
        set.milestones.push(convert_milestone(src, number));
    }
    set
}

fn convert_milestone(src: &lighthouse::Milestone, number: u64) -> github::Milestone {
    github::Milestone {
        number,
        state: if src.open_tickets_count > 0 {
            github::State::Open
        } else {
            github::State::Closed
        },
        title: src.title.clone(),
        description: src.goals.clone(),
        created_at: src.created_at,
        due_on: src.due_on,
    }
}
