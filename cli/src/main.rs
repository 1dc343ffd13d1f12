//! trip-settle CLI entry point.
//!
//! Loads a trip ledger snapshot from a JSON file and prints the budget
//! report, net balances, and suggested transfers.

use std::env;
use std::fs;
use std::process;

use tracing_subscriber::EnvFilter;

use trip_settle_core::money::format_cents;
use trip_settle_core::settlement::{compute_balances, settlement_plan};
use trip_settle_core::{budget, LedgerSnapshot, TripLedger};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: trip-settle <ledger.json>");
        process::exit(2);
    };

    if let Err(err) = run(&path) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    let snapshot: LedgerSnapshot = serde_json::from_str(&raw)?;
    let ledger = snapshot.restore()?;
    tracing::info!(
        people = ledger.num_people(),
        expenses = ledger.expenses().len(),
        settlements = ledger.settlements().len(),
        "ledger loaded"
    );

    print_report(&ledger)?;
    Ok(())
}

fn print_report(ledger: &TripLedger) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "Trip budget: {} (spent {})",
        format_cents(budget::trip_budget(ledger)),
        format_cents(budget::total_spent(ledger)),
    );

    println!("\nPer person:");
    for status in budget::budget_status(ledger) {
        let name = ledger
            .person(&status.person_id)
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| status.person_id.clone());
        let marker = if status.over_budget { "  OVER BUDGET" } else { "" };
        println!(
            "  {:<12} spent {:>10} of {:>10}{}",
            name,
            format_cents(status.spent),
            format_cents(status.limit),
            marker,
        );
    }

    let totals = budget::category_totals(ledger);
    if !totals.is_empty() {
        println!("\nBy category:");
        for (category, total) in &totals {
            println!("  {:<16} {:>10}", category.as_str(), format_cents(*total));
        }
    }

    println!("\nNet balances:");
    for (person_id, balance) in compute_balances(ledger) {
        let name = ledger
            .person(&person_id)
            .map(|p| p.name().to_string())
            .unwrap_or(person_id);
        println!("  {:<12} {:>10}", name, format_cents(balance));
    }

    let transfers = settlement_plan(ledger)?;
    if transfers.is_empty() {
        println!("\nAll settled up.");
    } else {
        println!("\nSuggested transfers:");
        for transfer in &transfers {
            println!(
                "  {} -> {}  {}",
                transfer.from,
                transfer.to,
                format_cents(transfer.amount),
            );
        }
    }

    Ok(())
}
