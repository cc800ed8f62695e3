//! Summing transaction amounts into [Totals].

use std::{collections::HashMap, hash::Hash};

use rust_decimal::Decimal;

use crate::{
    Error,
    totals::Totals,
    transaction::{Transaction, TransactionKind},
};

/// Sums transaction amounts by kind for each key produced by `key_of`.
///
/// # Returns
/// HashMap mapping each key with at least one transaction to its totals.
///
/// # Errors
/// Returns an [Error::TotalsOverflow] if a sum does not fit in a [Decimal].
pub(super) fn aggregate_by<K, F>(
    transactions: &[Transaction],
    key_of: F,
) -> Result<HashMap<K, Totals>, Error>
where
    K: Eq + Hash,
    F: Fn(&Transaction) -> K,
{
    let mut totals: HashMap<K, Totals> = HashMap::new();

    for transaction in transactions {
        let amount = transaction.amount.value();
        let contribution = match transaction.kind {
            TransactionKind::Revenue => Totals::new(amount, Decimal::ZERO)?,
            TransactionKind::Expense => Totals::new(Decimal::ZERO, amount)?,
        };

        let entry = totals.entry(key_of(transaction)).or_default();
        *entry = entry.checked_add(contribution)?;
    }

    Ok(totals)
}

/// Adds up per-entry totals into grand totals.
pub(super) fn sum_totals<'a>(
    entries: impl IntoIterator<Item = &'a Totals>,
) -> Result<Totals, Error> {
    entries
        .into_iter()
        .try_fold(Totals::default(), |grand_totals, totals| {
            grand_totals.checked_add(*totals)
        })
}
