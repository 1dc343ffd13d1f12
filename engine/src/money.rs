//! Money helpers
//!
//! CRITICAL: All money values are i64 (cents). Balances and transfers are
//! compared against a one-cent epsilon, the integer equivalent of the 0.01
//! tolerance the budgeting UI works with.

/// Amounts within this many cents of zero count as settled.
///
/// Used everywhere a balance is compared to zero: partitioning people into
/// creditors/debtors and suppressing residual transfers.
pub const EPSILON_CENTS: i64 = 1;

/// Divide an amount into `parts` even shares, exact in cents.
///
/// The remainder cents are distributed one each to the earliest shares, so
/// the shares always sum to exactly `amount` and no share differs from
/// another by more than one cent.
///
/// # Panics
/// Panics if `parts` is zero or `amount` is negative.
///
/// # Example
/// ```
/// use trip_settle_core::money::divide_evenly;
///
/// let shares = divide_evenly(10_000, 3); // $100.00 among three
/// assert_eq!(shares, vec![3_334, 3_333, 3_333]);
/// assert_eq!(shares.iter().sum::<i64>(), 10_000);
/// ```
pub fn divide_evenly(amount: i64, parts: usize) -> Vec<i64> {
    assert!(parts > 0, "cannot divide among zero people");
    assert!(amount >= 0, "amount must be non-negative");

    let parts_i64 = parts as i64;
    let base = amount / parts_i64;
    let remainder = (amount % parts_i64) as usize;

    (0..parts)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

/// Format cents as a dollar string, e.g. `12345` → `"$123.45"`.
///
/// Negative amounts render with a leading minus: `-5` → `"-$0.05"`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}
