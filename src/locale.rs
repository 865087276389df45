//! Localization table for report labels
//!
//! The report never looks strings up dynamically; every label it can emit is
//! listed here and the table is injected into the generator. Hosts replace
//! the defaults wholesale to relabel the report.

use serde::{Deserialize, Serialize};

use crate::types::{AccountGroup, PostingFilter};

/// Fixed set of localized labels used by the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localization {
    /// Label for the assets group
    pub assets: String,
    /// Label for the liabilities group
    pub liabilities: String,
    /// Label for the equity group
    pub equity: String,
    /// Label for the income group
    pub income: String,
    /// Label for the expenses group
    pub expenses: String,
    /// Label for off-balance accounts
    pub off_balance: String,
    /// Label for accounts outside the fixed type mapping
    pub other: String,
    /// Label for the posted-only state filter
    pub posted_only: String,
    /// Label for the posted-or-draft state filter
    pub include_unposted: String,
}

impl Default for Localization {
    fn default() -> Self {
        Self {
            assets: "Activos".to_string(),
            liabilities: "Pasivos".to_string(),
            equity: "Patrimonio".to_string(),
            income: "Ingresos".to_string(),
            expenses: "Gastos".to_string(),
            off_balance: "Cuentas de Orden".to_string(),
            other: "Otros".to_string(),
            posted_only: "Posted Entries only".to_string(),
            include_unposted: "Include UnPosted Entries".to_string(),
        }
    }
}

impl Localization {
    /// Label for an account group
    pub fn group_label(&self, group: AccountGroup) -> &str {
        match group {
            AccountGroup::Assets => &self.assets,
            AccountGroup::Liabilities => &self.liabilities,
            AccountGroup::Equity => &self.equity,
            AccountGroup::Income => &self.income,
            AccountGroup::Expenses => &self.expenses,
            AccountGroup::OffBalance => &self.off_balance,
            AccountGroup::Other => &self.other,
        }
    }

    /// Label for a posting state filter
    pub fn posting_filter_label(&self, filter: PostingFilter) -> &str {
        match filter {
            PostingFilter::Posted => &self.posted_only,
            PostingFilter::DraftOrPosted => &self.include_unposted,
        }
    }
}
