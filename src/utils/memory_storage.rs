//! In-memory repository implementation for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::report::query::BalanceQuery;
use crate::traits::{AccountRepository, LedgerRepository};
use crate::types::*;

/// In-memory ledger and chart of accounts for testing and development
///
/// Applies [`BalanceQuery`] predicates exactly as an SQL backend would bind
/// them; an omitted predicate filters nothing.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    accounts: Arc<RwLock<HashMap<String, AccountRecord>>>,
    entries: Arc<RwLock<Vec<LedgerEntry>>>,
}

impl MemoryLedger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.accounts.write().unwrap().clear();
        self.entries.write().unwrap().clear();
    }

    /// Register an account in the chart of accounts
    pub fn add_account(&self, account: AccountRecord) {
        self.accounts
            .write()
            .unwrap()
            .insert(account.id.clone(), account);
    }

    /// Append a ledger entry line
    pub fn add_entry(&self, entry: LedgerEntry) {
        self.entries.write().unwrap().push(entry);
    }
}

#[async_trait]
impl LedgerRepository for MemoryLedger {
    async fn sum_balances(
        &self,
        query: &BalanceQuery,
    ) -> ReportResult<HashMap<String, BalanceSums>> {
        let entries = self.entries.read().unwrap();
        let mut sums: HashMap<String, BalanceSums> = HashMap::new();

        for entry in entries.iter().filter(|entry| query.matches(entry)) {
            let account_sums = sums.entry(entry.account_id.clone()).or_default();
            account_sums.debit += &entry.debit;
            account_sums.credit += &entry.credit;
        }

        Ok(sums)
    }
}

#[async_trait]
impl AccountRepository for MemoryLedger {
    async fn find_by_ids(&self, ids: &[String]) -> ReportResult<Vec<AccountRecord>> {
        let accounts = self.accounts.read().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| accounts.get(id).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn sums_entries_per_account() {
        let ledger = MemoryLedger::new();
        ledger.add_entry(LedgerEntry::new(
            "A1",
            "J1",
            "C1",
            date(2024, 1, 10),
            PostingState::Posted,
            BigDecimal::from(100),
            BigDecimal::from(0),
        ));
        ledger.add_entry(LedgerEntry::new(
            "A1",
            "J1",
            "C1",
            date(2024, 1, 20),
            PostingState::Posted,
            BigDecimal::from(0),
            BigDecimal::from(40),
        ));
        ledger.add_entry(LedgerEntry::new(
            "A2",
            "J1",
            "C1",
            date(2024, 1, 15),
            PostingState::Posted,
            BigDecimal::from(7),
            BigDecimal::from(0),
        ));

        let sums = ledger.sum_balances(&BalanceQuery::default()).await.unwrap();
        assert_eq!(sums.len(), 2);
        assert_eq!(sums["A1"].debit, BigDecimal::from(100));
        assert_eq!(sums["A1"].credit, BigDecimal::from(40));
        assert_eq!(sums["A2"].debit, BigDecimal::from(7));
    }

    #[tokio::test]
    async fn accounts_without_matches_are_absent() {
        let ledger = MemoryLedger::new();
        ledger.add_entry(LedgerEntry::new(
            "A1",
            "J1",
            "C1",
            date(2024, 1, 10),
            PostingState::Draft,
            BigDecimal::from(100),
            BigDecimal::from(0),
        ));

        let query = BalanceQuery {
            states: Some(vec![PostingState::Posted]),
            ..Default::default()
        };
        let sums = ledger.sum_balances(&query).await.unwrap();
        assert!(sums.is_empty());
    }

    #[tokio::test]
    async fn find_by_ids_skips_unknown_accounts() {
        let ledger = MemoryLedger::new();
        ledger.add_account(AccountRecord::new("A1", "1000", "Cash", "asset_cash"));

        let found = ledger
            .find_by_ids(&["A1".to_string(), "missing".to_string()])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "1000");
    }
}
