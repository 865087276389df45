//! Core types and data structures for trial balance reporting

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Posting state of a single ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostingState {
    /// Finalized entry, part of the official books
    Posted,
    /// Entry still editable, not yet posted
    Draft,
    /// Entry that has been cancelled
    Cancelled,
}

/// Report-level posting state filter
///
/// Selects which entry states contribute to the report. When no filter is
/// supplied the report applies no state predicate at all, so every state is
/// included (cancelled entries too, unless storage already excludes them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostingFilter {
    /// Posted entries only
    Posted,
    /// Posted and draft entries
    DraftOrPosted,
}

impl PostingFilter {
    /// Entry states admitted by this filter
    pub fn states(&self) -> Vec<PostingState> {
        match self {
            PostingFilter::Posted => vec![PostingState::Posted],
            PostingFilter::DraftOrPosted => vec![PostingState::Posted, PostingState::Draft],
        }
    }
}

/// A journal as selected in the host UI
///
/// The selection carries the display name alongside the id so the report
/// header can list the chosen journals without a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    /// Unique identifier for the journal
    pub id: String,
    /// Human-readable journal name
    pub name: String,
}

impl Journal {
    /// Create a new journal reference
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Parameters for one trial balance report run
///
/// Immutable per run. No validation is applied here: a start date after the
/// end date simply yields an empty period, and absent fields omit the
/// corresponding query predicate entirely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportParameters {
    /// First day of the report period; entries before it form the beginning balance
    pub start_date: Option<NaiveDate>,
    /// Last day of the report period, inclusive
    pub end_date: Option<NaiveDate>,
    /// Journals to include; empty means all journals
    pub journals: Vec<Journal>,
    /// Company the report is restricted to
    pub company_id: Option<String>,
    /// Posting state filter
    pub posting_filter: Option<PostingFilter>,
}

impl ReportParameters {
    /// Ids of the selected journals, in selection order
    pub fn journal_ids(&self) -> Vec<String> {
        self.journals.iter().map(|j| j.id.clone()).collect()
    }

    /// Comma-joined names of the selected journals for the report header
    pub fn journal_names(&self) -> String {
        self.journals
            .iter()
            .map(|j| j.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Chart of accounts metadata for one account
///
/// `account_type` is the raw type code as stored in the chart (for example
/// `asset_receivable`). Unknown codes are legal and fall into the generic
/// report group during classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Unique identifier for the account
    pub id: String,
    /// Account code used for ordering within the report
    pub code: String,
    /// Human-readable account name
    pub name: String,
    /// Raw account type code from the chart of accounts
    pub account_type: String,
}

impl AccountRecord {
    /// Create a new account record
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        name: impl Into<String>,
        account_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: name.into(),
            account_type: account_type.into(),
        }
    }
}

/// Report group an account is classified into
///
/// Five main buckets plus the off-balance bucket; account type codes outside
/// the fixed mapping fall into [`AccountGroup::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountGroup {
    Assets,
    Liabilities,
    Equity,
    Income,
    Expenses,
    OffBalance,
    Other,
}

impl AccountGroup {
    /// Classify a raw account type code into its report group
    pub fn classify(account_type: &str) -> Self {
        match account_type {
            "asset_receivable" | "asset_cash" | "asset_current" | "asset_non_current"
            | "asset_prepayments" | "asset_fixed" => AccountGroup::Assets,
            "liability_payable" | "liability_credit_card" | "liability_current"
            | "liability_non_current" => AccountGroup::Liabilities,
            "equity" | "equity_unaffected" => AccountGroup::Equity,
            "income" | "income_other" => AccountGroup::Income,
            "expense" | "expense_depreciation" | "expense_direct_cost" => AccountGroup::Expenses,
            "off_balance" => AccountGroup::OffBalance,
            _ => AccountGroup::Other,
        }
    }
}

/// One debit/credit line within a journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier for the entry line
    pub id: Uuid,
    /// Account the line is booked against
    pub account_id: String,
    /// Journal the line belongs to
    pub journal_id: String,
    /// Company the line belongs to
    pub company_id: String,
    /// Accounting date of the line
    pub date: NaiveDate,
    /// Posting state of the parent journal entry
    pub state: PostingState,
    /// Debit amount
    pub debit: BigDecimal,
    /// Credit amount
    pub credit: BigDecimal,
}

impl LedgerEntry {
    /// Create a new ledger entry line with a fresh id
    pub fn new(
        account_id: impl Into<String>,
        journal_id: impl Into<String>,
        company_id: impl Into<String>,
        date: NaiveDate,
        state: PostingState,
        debit: BigDecimal,
        credit: BigDecimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id: account_id.into(),
            journal_id: journal_id.into(),
            company_id: company_id.into(),
            date,
            state,
            debit,
            credit,
        }
    }
}

/// Aggregated debit/credit sums for one account
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BalanceSums {
    /// Sum of debit amounts
    pub debit: BigDecimal,
    /// Sum of credit amounts
    pub credit: BigDecimal,
}

/// Company identity fields shown on the report header
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Company {
    /// Company display name
    pub name: String,
    /// Tax identification number
    pub vat: Option<String>,
    /// Street line of the address
    pub street: Option<String>,
    /// City line of the address
    pub city: Option<String>,
    /// Country name
    pub country: Option<String>,
}

impl Company {
    /// Compose the address line from the non-blank parts
    pub fn address_line(&self) -> String {
        [&self.street, &self.city, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Ambient state made explicit for one report run
///
/// Passing the preparer and the wall-clock time in keeps generation a pure
/// function of its inputs: two runs with the same context and parameters over
/// an unchanged ledger produce identical payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportContext {
    /// Company shown on the report header
    pub company: Company,
    /// Currency symbol of the reporting company
    pub currency_symbol: String,
    /// Name of the user preparing the report
    pub prepared_by: String,
    /// Wall-clock time of generation
    pub prepared_at: NaiveDateTime,
}

/// Errors that can occur while generating a report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;
