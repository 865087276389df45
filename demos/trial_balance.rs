//! Trial balance report example

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, Utc};

use trial_balance_core::utils::MemoryLedger;
use trial_balance_core::{
    AccountRecord, Company, Journal, LedgerEntry, PostingFilter, PostingState, ReportContext,
    ReportParameters, TrialBalanceReport,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Trial Balance Core - Report Example\n");

    // 1. Seed an in-memory ledger with a small chart of accounts
    let ledger = MemoryLedger::new();
    ledger.add_account(AccountRecord::new("cash", "1000", "Cash", "asset_cash"));
    ledger.add_account(AccountRecord::new(
        "capital",
        "3000",
        "Owner's Capital",
        "equity",
    ));
    ledger.add_account(AccountRecord::new(
        "revenue",
        "4000",
        "Sales Revenue",
        "income",
    ));
    ledger.add_account(AccountRecord::new("rent", "5000", "Rent", "expense"));

    // 2. Book a prior-year investment and some January activity
    let booked = [
        ("cash", 50_000, 0, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()),
        ("capital", 0, 50_000, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()),
        ("cash", 15_000, 0, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
        ("revenue", 0, 15_000, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
        ("rent", 2_500, 0, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()),
        ("cash", 0, 2_500, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()),
    ];
    for (account, debit, credit, day) in booked {
        ledger.add_entry(LedgerEntry::new(
            account,
            "J1",
            "C1",
            day,
            PostingState::Posted,
            BigDecimal::from(debit),
            BigDecimal::from(credit),
        ));
    }

    // 3. Generate the January report
    let report = TrialBalanceReport::new(ledger.clone(), ledger);
    let params = ReportParameters {
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        end_date: NaiveDate::from_ymd_opt(2024, 1, 31),
        journals: vec![Journal::new("J1", "General Journal")],
        company_id: Some("C1".to_string()),
        posting_filter: Some(PostingFilter::Posted),
    };
    let ctx = ReportContext {
        company: Company {
            name: "Demo Trading S.A.".to_string(),
            vat: Some("8-123-456".to_string()),
            street: Some("Calle 50".to_string()),
            city: Some("Panama City".to_string()),
            country: Some("Panama".to_string()),
        },
        currency_symbol: "$".to_string(),
        prepared_by: "Demo User".to_string(),
        prepared_at: Utc::now().naive_utc(),
    };

    let data = report.generate(&params, &ctx).await?;

    println!(
        "📊 {} — {} to {}\n",
        data.company_name,
        params.start_date.unwrap(),
        params.end_date.unwrap()
    );
    for (group, rows) in &data.grouped_query {
        println!("{group}");
        for row in rows {
            println!(
                "  {:<6} {:<18} begin {:>12}  change {:>12}  end {:>12}",
                row.code,
                row.name,
                row.beginning_balance_formatted,
                row.period_change_formatted,
                row.ending_balance_formatted
            );
        }
    }
    println!(
        "\nTotals: debits {} / credits {} — balanced: {}",
        data.total_debits_formatted, data.total_credits_formatted, data.is_balanced
    );

    Ok(())
}
