//! Traits for storage abstraction and report rendering

use async_trait::async_trait;
use std::collections::HashMap;

use crate::report::query::BalanceQuery;
use crate::types::*;

/// Read-only aggregate access to ledger entry storage
///
/// This trait allows the report core to work with any storage backend
/// (PostgreSQL, MySQL, SQLite, in-memory, etc.) by implementing a single
/// grouped-sum query. Implementations must bind every user-controlled value
/// in `query` safely; interpolating values into query text is not acceptable.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Sum debit and credit amounts per account for entries matching `query`
    ///
    /// Returns a map keyed by account id. An account with no matching entries
    /// is simply absent from the map, which the aggregation layer treats as
    /// zero activity.
    async fn sum_balances(&self, query: &BalanceQuery)
        -> ReportResult<HashMap<String, BalanceSums>>;
}

/// Batch lookup into the chart of accounts
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Fetch account records for the given ids
    ///
    /// Ids with no matching record are omitted from the result rather than
    /// reported as an error.
    async fn find_by_ids(&self, ids: &[String]) -> ReportResult<Vec<AccountRecord>>;
}

/// Rendering seam for the host PDF engine
///
/// The report core assembles the payload; how the host turns it into a PDF
/// is its own concern. `template_ref` identifies the report template on the
/// host side.
#[async_trait]
pub trait ReportRenderer: Send + Sync {
    /// Render the assembled report data with the given template
    async fn render(
        &self,
        template_ref: &str,
        data: &crate::report::assemble::ReportData,
    ) -> ReportResult<()>;
}
