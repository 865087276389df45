//! Query builder for the two balance aggregations
//!
//! A [`BalanceQuery`] is the storage-agnostic description of one grouped-sum
//! read over ledger entries. A predicate left as `None` is omitted entirely,
//! never turned into a match-nothing filter: no journal selection means all
//! journals, no state filter means all states.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{LedgerEntry, PostingState, ReportParameters};

/// Filter for one grouped debit/credit aggregation over ledger entries
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BalanceQuery {
    /// Restrict to entries of this company
    pub company_id: Option<String>,
    /// Restrict to entries in one of these posting states
    pub states: Option<Vec<PostingState>>,
    /// Restrict to entries of these journals
    pub journal_ids: Option<Vec<String>>,
    /// Entries dated strictly before this day
    pub date_before: Option<NaiveDate>,
    /// Entries dated on or after this day
    pub date_from: Option<NaiveDate>,
    /// Entries dated on or before this day
    pub date_to: Option<NaiveDate>,
}

impl BalanceQuery {
    /// Query for the beginning balances: entries strictly before the start date
    pub fn beginning(params: &ReportParameters) -> Self {
        Self {
            date_before: params.start_date,
            ..Self::base(params)
        }
    }

    /// Query for the period activity: entries within the date range, inclusive
    pub fn period(params: &ReportParameters) -> Self {
        Self {
            date_from: params.start_date,
            date_to: params.end_date,
            ..Self::base(params)
        }
    }

    /// Predicates shared by both aggregations
    fn base(params: &ReportParameters) -> Self {
        Self {
            company_id: params.company_id.clone(),
            states: params.posting_filter.map(|f| f.states()),
            journal_ids: if params.journals.is_empty() {
                None
            } else {
                Some(params.journal_ids())
            },
            ..Self::default()
        }
    }

    /// Whether an entry satisfies every present predicate
    ///
    /// This is the reference semantics for the filter; SQL-backed
    /// repositories translate it into bound query parameters.
    pub fn matches(&self, entry: &LedgerEntry) -> bool {
        if let Some(company_id) = &self.company_id {
            if &entry.company_id != company_id {
                return false;
            }
        }
        if let Some(states) = &self.states {
            if !states.contains(&entry.state) {
                return false;
            }
        }
        if let Some(journal_ids) = &self.journal_ids {
            if !journal_ids.contains(&entry.journal_id) {
                return false;
            }
        }
        if let Some(before) = self.date_before {
            if entry.date >= before {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if entry.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if entry.date > to {
                return false;
            }
        }
        true
    }
}
