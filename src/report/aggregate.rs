//! Merge of balance aggregates with chart metadata into trial balance rows

use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::locale::Localization;
use crate::types::{AccountGroup, AccountRecord, BalanceSums};
use crate::utils::format::round2;

/// One account's line on the trial balance
///
/// Derived balances are rounded to two decimal places on the row; the raw
/// debit/credit sums are kept at full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalanceRow {
    /// Account identifier
    pub account_id: String,
    /// Account code the report is ordered by
    pub code: String,
    /// Account name
    pub name: String,
    /// Raw account type code from the chart
    pub account_type: String,
    /// Report group the account was classified into
    pub group: AccountGroup,
    /// Debit sum before the period
    pub beginning_debit: BigDecimal,
    /// Credit sum before the period
    pub beginning_credit: BigDecimal,
    /// Debit sum within the period
    pub period_debit: BigDecimal,
    /// Credit sum within the period
    pub period_credit: BigDecimal,
    /// Net balance carried into the period
    pub beginning_balance: BigDecimal,
    /// Net movement within the period
    pub period_change: BigDecimal,
    /// Net balance at the end of the period
    pub ending_balance: BigDecimal,
    /// Beginning balance minus ending balance
    pub net_balance: BigDecimal,
}

/// Sums across all included rows
///
/// Balances are accumulated at full precision; rounding happens only when the
/// payload is assembled for display.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Sum of beginning balances
    pub beginning_balance: BigDecimal,
    /// Sum of ending balances
    pub ending_balance: BigDecimal,
    /// Sum of period changes
    pub period_change: BigDecimal,
    /// Sum of net balances
    pub net_balance: BigDecimal,
    /// Sum of raw period debits
    pub debits: BigDecimal,
    /// Sum of raw period credits
    pub credits: BigDecimal,
}

impl ReportTotals {
    /// Absolute difference between total debits and credits
    pub fn balance_difference(&self) -> BigDecimal {
        (&self.debits - &self.credits).abs()
    }

    /// Whether debits and credits agree within the accounting tolerance
    ///
    /// A mismatch is data to report, not an error to raise.
    pub fn is_balanced(&self) -> bool {
        // 0.01
        self.balance_difference() < BigDecimal::new(BigInt::from(1), 2)
    }
}

/// Aggregator output: flat rows, grouped rows and totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalanceSheet {
    /// All included rows, ordered ascending by account code
    pub rows: Vec<AccountBalanceRow>,
    /// Rows per localized group label, each in account code order
    pub grouped: BTreeMap<String, Vec<AccountBalanceRow>>,
    /// Running totals over the included rows
    pub totals: ReportTotals,
}

/// Merge the two balance result sets with chart metadata
///
/// Accounts missing from either result set contribute zero on that side. An
/// account is included only when its beginning balance or period activity is
/// nonzero; the check is literal numeric equality, not tolerance-based.
pub fn aggregate(
    accounts: &[AccountRecord],
    beginning: &HashMap<String, BalanceSums>,
    period: &HashMap<String, BalanceSums>,
    locale: &Localization,
) -> TrialBalanceSheet {
    let zero_sums = BalanceSums::default();
    let zero = BigDecimal::from(0);

    let mut rows = Vec::new();
    let mut totals = ReportTotals::default();

    for account in accounts {
        let begin = beginning.get(&account.id).unwrap_or(&zero_sums);
        let activity = period.get(&account.id).unwrap_or(&zero_sums);

        let beginning_balance = &begin.debit - &begin.credit;
        let period_change = &activity.debit - &activity.credit;
        let ending_balance = &beginning_balance + &period_change;
        let net_balance = &beginning_balance - &ending_balance;

        if beginning_balance == zero && activity.debit == zero && activity.credit == zero {
            continue;
        }

        totals.beginning_balance += &beginning_balance;
        totals.ending_balance += &ending_balance;
        totals.period_change += &period_change;
        totals.net_balance += &net_balance;
        totals.debits += &activity.debit;
        totals.credits += &activity.credit;

        rows.push(AccountBalanceRow {
            account_id: account.id.clone(),
            code: account.code.clone(),
            name: account.name.clone(),
            account_type: account.account_type.clone(),
            group: AccountGroup::classify(&account.account_type),
            beginning_debit: begin.debit.clone(),
            beginning_credit: begin.credit.clone(),
            period_debit: activity.debit.clone(),
            period_credit: activity.credit.clone(),
            beginning_balance: round2(&beginning_balance),
            period_change: round2(&period_change),
            ending_balance: round2(&ending_balance),
            net_balance: round2(&net_balance),
        });
    }

    // Empty codes compare lowest, so uncoded accounts lead the report
    rows.sort_by(|a, b| a.code.cmp(&b.code));

    let mut grouped: BTreeMap<String, Vec<AccountBalanceRow>> = BTreeMap::new();
    for row in &rows {
        grouped
            .entry(locale.group_label(row.group).to_string())
            .or_default()
            .push(row.clone());
    }

    tracing::debug!(
        rows = rows.len(),
        groups = grouped.len(),
        "aggregated trial balance rows"
    );

    TrialBalanceSheet {
        rows,
        grouped,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sums(debit: i64, credit: i64) -> BalanceSums {
        BalanceSums {
            debit: BigDecimal::from(debit),
            credit: BigDecimal::from(credit),
        }
    }

    fn account(id: &str, code: &str, account_type: &str) -> AccountRecord {
        AccountRecord::new(id, code, format!("Account {code}"), account_type)
    }

    #[test]
    fn derives_the_four_balances() {
        let accounts = vec![account("A", "1000", "asset_cash")];
        let beginning = HashMap::from([("A".to_string(), sums(100, 0))]);
        let period = HashMap::from([("A".to_string(), sums(50, 0))]);

        let sheet = aggregate(&accounts, &beginning, &period, &Localization::default());
        assert_eq!(sheet.rows.len(), 1);

        let row = &sheet.rows[0];
        assert_eq!(row.beginning_balance, BigDecimal::from(100).with_scale(2));
        assert_eq!(row.period_change, BigDecimal::from(50).with_scale(2));
        assert_eq!(row.ending_balance, BigDecimal::from(150).with_scale(2));
        assert_eq!(row.net_balance, BigDecimal::from(-50).with_scale(2));
    }

    #[test]
    fn suppresses_zero_activity_zero_balance_accounts() {
        let accounts = vec![
            account("A", "1000", "asset_cash"),
            account("B", "2000", "liability_payable"),
        ];
        let beginning = HashMap::from([("A".to_string(), sums(100, 0))]);
        let period = HashMap::new();

        let sheet = aggregate(&accounts, &beginning, &period, &Localization::default());
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.rows[0].account_id, "A");
    }

    #[test]
    fn keeps_accounts_with_offsetting_period_activity() {
        // Beginning balance nets to zero but the period moved, so the row stays
        let accounts = vec![account("A", "1000", "asset_cash")];
        let beginning = HashMap::from([("A".to_string(), sums(75, 75))]);
        let period = HashMap::from([("A".to_string(), sums(20, 20))]);

        let sheet = aggregate(&accounts, &beginning, &period, &Localization::default());
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(
            sheet.rows[0].ending_balance,
            BigDecimal::from(0).with_scale(2)
        );
    }

    #[test]
    fn rows_sorted_by_code_with_empty_code_first() {
        let accounts = vec![
            account("B", "2000", "liability_payable"),
            account("A", "1000", "asset_cash"),
            account("C", "", "income"),
        ];
        let period = HashMap::from([
            ("A".to_string(), sums(10, 0)),
            ("B".to_string(), sums(0, 5)),
            ("C".to_string(), sums(0, 5)),
        ]);

        let sheet = aggregate(&accounts, &HashMap::new(), &period, &Localization::default());
        let codes: Vec<&str> = sheet.rows.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["", "1000", "2000"]);
    }

    #[test]
    fn groups_rows_under_localized_labels() {
        let accounts = vec![
            account("A", "1000", "asset_cash"),
            account("B", "4000", "income"),
            account("C", "9000", "mystery_type"),
        ];
        let period = HashMap::from([
            ("A".to_string(), sums(10, 0)),
            ("B".to_string(), sums(0, 10)),
            ("C".to_string(), sums(5, 5)),
        ]);

        let sheet = aggregate(&accounts, &HashMap::new(), &period, &Localization::default());
        assert_eq!(sheet.grouped["Activos"].len(), 1);
        assert_eq!(sheet.grouped["Ingresos"].len(), 1);
        assert_eq!(sheet.grouped["Otros"].len(), 1);
    }

    #[test]
    fn totals_sum_included_rows() {
        let accounts = vec![
            account("A", "1000", "asset_cash"),
            account("B", "4000", "income"),
        ];
        let beginning = HashMap::from([("A".to_string(), sums(100, 0))]);
        let period = HashMap::from([
            ("A".to_string(), sums(50, 0)),
            ("B".to_string(), sums(0, 50)),
        ]);

        let sheet = aggregate(&accounts, &beginning, &period, &Localization::default());
        assert_eq!(sheet.totals.beginning_balance, BigDecimal::from(100));
        assert_eq!(sheet.totals.period_change, BigDecimal::from(0));
        assert_eq!(sheet.totals.ending_balance, BigDecimal::from(100));
        assert_eq!(sheet.totals.debits, BigDecimal::from(50));
        assert_eq!(sheet.totals.credits, BigDecimal::from(50));
        assert!(sheet.totals.is_balanced());
    }

    #[test]
    fn unbalanced_totals_report_the_difference() {
        let accounts = vec![account("A", "1000", "asset_cash")];
        let period = HashMap::from([("A".to_string(), sums(50, 0))]);

        let sheet = aggregate(&accounts, &HashMap::new(), &period, &Localization::default());
        assert!(!sheet.totals.is_balanced());
        assert_eq!(sheet.totals.balance_difference(), BigDecimal::from(50));
    }

    #[test]
    fn empty_input_is_balanced_trivially() {
        let sheet = aggregate(&[], &HashMap::new(), &HashMap::new(), &Localization::default());
        assert!(sheet.rows.is_empty());
        assert!(sheet.grouped.is_empty());
        assert!(sheet.totals.is_balanced());
        assert_eq!(sheet.totals.ending_balance, BigDecimal::from(0));
    }
}
