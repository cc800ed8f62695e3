//! Report types returned by the totals queries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Error, category::CategoryId, person::PersonId};

/// Revenue and expense sums and the balance between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    #[serde(rename = "totalReceitas")]
    pub total_revenue: Decimal,
    #[serde(rename = "totalDespesas")]
    pub total_expense: Decimal,
    /// Always `total_revenue - total_expense`.
    #[serde(rename = "saldo")]
    pub balance: Decimal,
}

impl Totals {
    /// Create totals from the revenue and expense sums.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::TotalsOverflow] if the balance
    /// does not fit in a [Decimal].
    pub fn new(total_revenue: Decimal, total_expense: Decimal) -> Result<Self, Error> {
        let balance = total_revenue
            .checked_sub(total_expense)
            .ok_or(Error::TotalsOverflow)?;

        Ok(Self {
            total_revenue,
            total_expense,
            balance,
        })
    }

    /// Add two sets of totals, recomputing the balance.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::TotalsOverflow] if any sum does
    /// not fit in a [Decimal].
    pub fn checked_add(self, other: Self) -> Result<Self, Error> {
        let total_revenue = self
            .total_revenue
            .checked_add(other.total_revenue)
            .ok_or(Error::TotalsOverflow)?;
        let total_expense = self
            .total_expense
            .checked_add(other.total_expense)
            .ok_or(Error::TotalsOverflow)?;

        Totals::new(total_revenue, total_expense)
    }
}

/// One person's line in [TotalsByPerson].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonTotals {
    #[serde(rename = "pessoaId")]
    pub person_id: PersonId,
    #[serde(rename = "pessoaNome")]
    pub person_name: String,
    #[serde(flatten)]
    pub totals: Totals,
}

/// Totals for every person, ordered by name, and the grand totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsByPerson {
    #[serde(rename = "totaisPorPessoa")]
    pub people: Vec<PersonTotals>,
    #[serde(rename = "totalGeralReceitas")]
    pub grand_total_revenue: Decimal,
    #[serde(rename = "totalGeralDespesas")]
    pub grand_total_expense: Decimal,
    #[serde(rename = "saldoLiquidoGeral")]
    pub grand_balance: Decimal,
}

/// One category's line in [TotalsByCategory].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    #[serde(rename = "categoriaId")]
    pub category_id: CategoryId,
    #[serde(rename = "categoriaDescricao")]
    pub category_description: String,
    #[serde(flatten)]
    pub totals: Totals,
}

/// Totals for every category, ordered by description, and the grand totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsByCategory {
    #[serde(rename = "totaisPorCategoria")]
    pub categories: Vec<CategoryTotals>,
    #[serde(rename = "totalGeralReceitas")]
    pub grand_total_revenue: Decimal,
    #[serde(rename = "totalGeralDespesas")]
    pub grand_total_expense: Decimal,
    #[serde(rename = "saldoLiquidoGeral")]
    pub grand_balance: Decimal,
}

#[cfg(test)]
mod totals_tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::Totals;
    use crate::Error;

    #[test]
    fn balance_is_revenue_minus_expense() {
        let totals = Totals::new(dec!(5000.00), dec!(150.50)).unwrap();

        assert_eq!(totals.balance, dec!(4849.50));
    }

    #[test]
    fn new_fails_when_balance_overflows() {
        assert_eq!(
            Totals::new(Decimal::MAX, -Decimal::ONE),
            Err(Error::TotalsOverflow)
        );
    }

    #[test]
    fn checked_add_recomputes_balance() {
        let totals = Totals::new(dec!(100), dec!(40)).unwrap();

        let totals = totals
            .checked_add(Totals::new(dec!(0), dec!(80)).unwrap())
            .unwrap();

        assert_eq!(totals, Totals::new(dec!(100), dec!(120)).unwrap());
        assert_eq!(totals.balance, dec!(-20));
    }

    #[test]
    fn checked_add_fails_on_revenue_overflow() {
        let totals = Totals::new(Decimal::MAX, Decimal::ZERO).unwrap();

        assert_eq!(totals.checked_add(totals), Err(Error::TotalsOverflow));
    }

    #[test]
    fn checked_add_fails_on_expense_overflow() {
        let totals = Totals::new(Decimal::ZERO, Decimal::MAX).unwrap();

        assert_eq!(totals.checked_add(totals), Err(Error::TotalsOverflow));
    }
}
