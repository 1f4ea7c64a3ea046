//! Vote and reaction arithmetic
//!
//! Pure functions over counters. The persistence layer applies the deltas
//! computed here inside the same transaction that writes the vote row.

use serde::Serialize;

use super::options::VoteOption;

/// Agree/disagree share of a debate's votes, in percent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct VotePercent {
    pub agree: f64,
    pub disagree: f64,
}

/// Counter snapshot of a debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteTally {
    pub vote_count: i64,
    pub agree_count: i64,
    pub disagree_count: i64,
}

impl VoteTally {
    pub fn new(agree_count: i64, disagree_count: i64) -> Self {
        Self {
            vote_count: agree_count + disagree_count,
            agree_count,
            disagree_count,
        }
    }

    /// Percentages from raw counts; both are 0.0 when nobody voted
    pub fn percentages_of(agree: i64, disagree: i64) -> VotePercent {
        let total = agree + disagree;
        if total <= 0 {
            return VotePercent::default();
        }
        VotePercent {
            agree: agree as f64 * 100.0 / total as f64,
            disagree: disagree as f64 * 100.0 / total as f64,
        }
    }

    pub fn percentages(&self) -> VotePercent {
        Self::percentages_of(self.agree_count, self.disagree_count)
    }

    /// Resolve a vote request against the caller's previous vote and apply it
    pub fn apply(&mut self, previous: Option<VoteOption>, requested: VoteOption) -> VoteTransition {
        let transition = VoteTransition::resolve(previous, requested);
        self.apply_transition(transition);
        transition
    }

    pub fn apply_transition(&mut self, transition: VoteTransition) {
        self.vote_count += i64::from(transition.vote_delta());
        self.agree_count += i64::from(transition.option_delta(VoteOption::Agree));
        self.disagree_count += i64::from(transition.option_delta(VoteOption::Disagree));
    }

    /// Absolute agree/disagree gap, used to rank balanced debates
    pub fn imbalance(&self) -> i64 {
        (self.agree_count - self.disagree_count).abs()
    }
}

/// What a vote request does to the stored vote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTransition {
    /// No previous vote
    Cast(VoteOption),
    /// Same option again removes the vote
    Retract(VoteOption),
    /// Previous vote on the other option
    Switch { from: VoteOption, to: VoteOption },
}

impl VoteTransition {
    pub fn resolve(previous: Option<VoteOption>, requested: VoteOption) -> Self {
        match previous {
            None => Self::Cast(requested),
            Some(prev) if prev == requested => Self::Retract(prev),
            Some(prev) => Self::Switch {
                from: prev,
                to: requested,
            },
        }
    }

    /// Change to the debate's total vote counter
    pub const fn vote_delta(self) -> i32 {
        match self {
            Self::Cast(_) => 1,
            Self::Retract(_) => -1,
            Self::Switch { .. } => 0,
        }
    }

    /// Change to one option's counter
    pub fn option_delta(self, option: VoteOption) -> i32 {
        match self {
            Self::Cast(o) if o == option => 1,
            Self::Retract(o) if o == option => -1,
            Self::Switch { from, .. } if from == option => -1,
            Self::Switch { to, .. } if to == option => 1,
            _ => 0,
        }
    }

    /// Option stored after the transition, `None` when the vote was removed
    pub const fn stored_option(self) -> Option<VoteOption> {
        match self {
            Self::Cast(o) | Self::Switch { to: o, .. } => Some(o),
            Self::Retract(_) => None,
        }
    }
}

/// Exclusive toggle rule for reactions (debate emotions, comment likes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionToggle<T> {
    Add(T),
    Remove(T),
    /// A different reaction is already present
    Reject { existing: T },
}

impl<T: Copy + PartialEq> ReactionToggle<T> {
    pub fn resolve(existing: Option<T>, requested: T) -> Self {
        match existing {
            None => Self::Add(requested),
            Some(current) if current == requested => Self::Remove(current),
            Some(current) => Self::Reject { existing: current },
        }
    }

    /// Counter change for the requested option
    pub fn delta(&self) -> i32 {
        match self {
            Self::Add(_) => 1,
            Self::Remove(_) => -1,
            Self::Reject { .. } => 0,
        }
    }
}

/// Nation with the most votes; ties go to the lexicographically smallest name
pub fn top_nation<I, S>(counts: I) -> Option<String>
where
    I: IntoIterator<Item = (S, i64)>,
    S: AsRef<str>,
{
    let mut best: Option<(String, i64)> = None;
    for (nation, count) in counts {
        let nation = nation.as_ref();
        if count <= 0 || nation.is_empty() {
            continue;
        }
        let replace = match &best {
            None => true,
            Some((best_nation, best_count)) => {
                count > *best_count || (count == *best_count && nation < best_nation.as_str())
            }
        };
        if replace {
            best = Some((nation.to_string(), count));
        }
    }
    best.map(|(nation, _)| nation)
}
