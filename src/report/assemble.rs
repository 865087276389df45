//! Payload assembly and the report generator
//!
//! [`ReportData`] is the contract the host PDF template relies on: renaming
//! or dropping any field breaks template compatibility.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::locale::Localization;
use crate::report::aggregate::{aggregate, AccountBalanceRow, TrialBalanceSheet};
use crate::report::query::BalanceQuery;
use crate::traits::{AccountRepository, LedgerRepository, ReportRenderer};
use crate::types::{ReportContext, ReportParameters, ReportResult};
use crate::utils::format::{format_amount, round2};

/// Host-side identifier of the trial balance PDF template
pub const REPORT_TEMPLATE_REF: &str = "trial_balance_pdf.action_report_trial_balance";

/// Template-facing row with display strings alongside the rounded balances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Account code
    pub code: String,
    /// Account name
    #[serde(rename = "ac_name")]
    pub name: String,
    /// Raw account type code
    pub account_type: String,
    /// Localized group label
    pub account_type_name: String,
    /// Balance carried into the period
    pub beginning_balance: BigDecimal,
    /// Balance at the end of the period
    pub ending_balance: BigDecimal,
    /// Net movement within the period
    pub period_change: BigDecimal,
    /// Beginning minus ending balance
    pub net_balance: BigDecimal,
    /// Display form of the beginning balance
    pub beginning_balance_formatted: String,
    /// Display form of the ending balance
    pub ending_balance_formatted: String,
    /// Display form of the period change
    pub period_change_formatted: String,
    /// Display form of the net balance
    pub net_balance_formatted: String,
}

impl ReportRow {
    fn from_balance_row(row: &AccountBalanceRow, locale: &Localization) -> Self {
        Self {
            code: row.code.clone(),
            name: row.name.clone(),
            account_type: row.account_type.clone(),
            account_type_name: locale.group_label(row.group).to_string(),
            beginning_balance: row.beginning_balance.clone(),
            ending_balance: row.ending_balance.clone(),
            period_change: row.period_change.clone(),
            net_balance: row.net_balance.clone(),
            beginning_balance_formatted: format_amount(&row.beginning_balance),
            ending_balance_formatted: format_amount(&row.ending_balance),
            period_change_formatted: format_amount(&row.period_change),
            net_balance_formatted: format_amount(&row.net_balance),
        }
    }
}

/// Complete payload handed to the PDF rendering action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    /// All included rows in account code order
    pub query: Vec<ReportRow>,
    /// Rows per localized group label
    pub grouped_query: BTreeMap<String, Vec<ReportRow>>,
    /// Report period start
    pub start_date: Option<NaiveDate>,
    /// Report period end
    pub end_date: Option<NaiveDate>,
    /// Sum of beginning balances, rounded for display
    pub total_beginning_balance: BigDecimal,
    /// Sum of ending balances, rounded for display
    pub total_ending_balance: BigDecimal,
    /// Sum of period changes, rounded for display
    pub total_period_change: BigDecimal,
    /// Sum of net balances, rounded for display
    pub total_net_balance: BigDecimal,
    /// Display form of the beginning balance total
    pub total_beginning_balance_formatted: String,
    /// Display form of the ending balance total
    pub total_ending_balance_formatted: String,
    /// Display form of the period change total
    pub total_period_change_formatted: String,
    /// Display form of the net balance total
    pub total_net_balance_formatted: String,
    /// Sum of period debits, rounded for display
    pub total_debits: BigDecimal,
    /// Sum of period credits, rounded for display
    pub total_credits: BigDecimal,
    /// Display form of the debit total
    pub total_debits_formatted: String,
    /// Display form of the credit total
    pub total_credits_formatted: String,
    /// Whether debits and credits agree within tolerance
    pub is_balanced: bool,
    /// Absolute debit/credit difference, rounded
    pub balance_difference: BigDecimal,
    /// Currency symbol of the reporting company
    pub currency: String,
    /// Localized posting filter label, empty when no filter was set
    pub state: String,
    /// Comma-joined names of the selected journals
    pub journals_name: String,
    /// Company display name
    pub company_name: String,
    /// Company tax id
    pub company_vat: String,
    /// Company address composed from its non-blank parts
    pub company_address: String,
    /// Name of the preparing user
    pub prepared_by: String,
    /// Generation timestamp, day/month/year hour:minute
    pub prepared_date: String,
}

/// Build the template payload from aggregated rows and the run context
pub fn assemble(
    sheet: &TrialBalanceSheet,
    params: &ReportParameters,
    ctx: &ReportContext,
    locale: &Localization,
) -> ReportData {
    let rows: Vec<ReportRow> = sheet
        .rows
        .iter()
        .map(|row| ReportRow::from_balance_row(row, locale))
        .collect();

    let grouped_query: BTreeMap<String, Vec<ReportRow>> = sheet
        .grouped
        .iter()
        .map(|(label, group_rows)| {
            (
                label.clone(),
                group_rows
                    .iter()
                    .map(|row| ReportRow::from_balance_row(row, locale))
                    .collect(),
            )
        })
        .collect();

    let totals = &sheet.totals;
    let state = params
        .posting_filter
        .map(|filter| locale.posting_filter_label(filter).to_string())
        .unwrap_or_default();

    ReportData {
        query: rows,
        grouped_query,
        start_date: params.start_date,
        end_date: params.end_date,
        total_beginning_balance: round2(&totals.beginning_balance),
        total_ending_balance: round2(&totals.ending_balance),
        total_period_change: round2(&totals.period_change),
        total_net_balance: round2(&totals.net_balance),
        total_beginning_balance_formatted: format_amount(&totals.beginning_balance),
        total_ending_balance_formatted: format_amount(&totals.ending_balance),
        total_period_change_formatted: format_amount(&totals.period_change),
        total_net_balance_formatted: format_amount(&totals.net_balance),
        total_debits: round2(&totals.debits),
        total_credits: round2(&totals.credits),
        total_debits_formatted: format_amount(&totals.debits),
        total_credits_formatted: format_amount(&totals.credits),
        is_balanced: totals.is_balanced(),
        balance_difference: round2(&totals.balance_difference()),
        currency: ctx.currency_symbol.clone(),
        state,
        journals_name: params.journal_names(),
        company_name: ctx.company.name.clone(),
        company_vat: ctx.company.vat.clone().unwrap_or_default(),
        company_address: ctx.company.address_line(),
        prepared_by: ctx.prepared_by.clone(),
        prepared_date: ctx.prepared_at.format("%d/%m/%Y %H:%M").to_string(),
    }
}

/// Trial balance report generator
///
/// Holds the storage seams and the localization table; one instance serves
/// any number of report runs. Each run is a single-shot, idempotent
/// transformation of its parameters and context.
pub struct TrialBalanceReport<L, A> {
    ledger: L,
    accounts: A,
    locale: Localization,
}

impl<L: LedgerRepository, A: AccountRepository> TrialBalanceReport<L, A> {
    /// Create a generator with the shipped localization
    pub fn new(ledger: L, accounts: A) -> Self {
        Self::with_localization(ledger, accounts, Localization::default())
    }

    /// Create a generator with a custom localization table
    pub fn with_localization(ledger: L, accounts: A, locale: Localization) -> Self {
        Self {
            ledger,
            accounts,
            locale,
        }
    }

    /// Generate the report payload for one run
    ///
    /// Issues the beginning and period aggregations, fetches chart metadata
    /// for every account either result set mentions, and assembles the
    /// payload. Repository errors propagate unmodified.
    pub async fn generate(
        &self,
        params: &ReportParameters,
        ctx: &ReportContext,
    ) -> ReportResult<ReportData> {
        let beginning_query = BalanceQuery::beginning(params);
        let period_query = BalanceQuery::period(params);

        let beginning = self.ledger.sum_balances(&beginning_query).await?;
        let period = self.ledger.sum_balances(&period_query).await?;

        // Union of account ids seen by either aggregation, in stable order
        let mut account_ids: Vec<String> = beginning.keys().chain(period.keys()).cloned().collect();
        account_ids.sort();
        account_ids.dedup();

        tracing::debug!(
            accounts = account_ids.len(),
            "fetching chart metadata for trial balance"
        );

        let accounts = self.accounts.find_by_ids(&account_ids).await?;
        let sheet = aggregate(&accounts, &beginning, &period, &self.locale);

        Ok(assemble(&sheet, params, ctx, &self.locale))
    }

    /// Generate the payload and hand it to the host PDF action
    pub async fn render_pdf<R: ReportRenderer>(
        &self,
        renderer: &R,
        params: &ReportParameters,
        ctx: &ReportContext,
    ) -> ReportResult<()> {
        let data = self.generate(params, ctx).await?;
        renderer.render(REPORT_TEMPLATE_REF, &data).await
    }
}
