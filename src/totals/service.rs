//! Totals queries.
//!
//! The entity list and the transactions are read in one SQLite transaction so
//! that both come from the same snapshot.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{
    Error,
    category::get_all_categories,
    person::get_all_people,
    totals::{
        CategoryTotals, PersonTotals, TotalsByCategory, TotalsByPerson,
        aggregation::{aggregate_by, sum_totals},
    },
    transaction::get_all_transactions,
};

/// Compute revenue, expense and balance for every person, ordered by name.
///
/// People without transactions are included with zero totals.
pub fn get_totals_by_person(connection: &Connection) -> Result<TotalsByPerson, Error> {
    let snapshot = SqlTransaction::new_unchecked(connection, TransactionBehavior::Deferred)?;
    let people = get_all_people(&snapshot)?;
    let transactions = get_all_transactions(&snapshot)?;
    snapshot.commit()?;

    let by_person = aggregate_by(&transactions, |transaction| transaction.person_id)?;

    let people: Vec<PersonTotals> = people
        .into_iter()
        .map(|person| PersonTotals {
            totals: by_person.get(&person.id).copied().unwrap_or_default(),
            person_id: person.id,
            person_name: person.name.to_string(),
        })
        .collect();

    let grand_totals = sum_totals(people.iter().map(|entry| &entry.totals))?;
    tracing::debug!(
        "Computed totals for {} people from {} transactions",
        people.len(),
        transactions.len()
    );

    Ok(TotalsByPerson {
        people,
        grand_total_revenue: grand_totals.total_revenue,
        grand_total_expense: grand_totals.total_expense,
        grand_balance: grand_totals.balance,
    })
}

/// Compute revenue, expense and balance for every category, ordered by
/// description.
///
/// Categories without transactions are included with zero totals.
pub fn get_totals_by_category(connection: &Connection) -> Result<TotalsByCategory, Error> {
    let snapshot = SqlTransaction::new_unchecked(connection, TransactionBehavior::Deferred)?;
    let categories = get_all_categories(&snapshot)?;
    let transactions = get_all_transactions(&snapshot)?;
    snapshot.commit()?;

    let by_category = aggregate_by(&transactions, |transaction| transaction.category_id)?;

    let categories: Vec<CategoryTotals> = categories
        .into_iter()
        .map(|category| CategoryTotals {
            totals: by_category.get(&category.id).copied().unwrap_or_default(),
            category_id: category.id,
            category_description: category.description.to_string(),
        })
        .collect();

    let grand_totals = sum_totals(categories.iter().map(|entry| &entry.totals))?;
    tracing::debug!(
        "Computed totals for {} categories from {} transactions",
        categories.len(),
        transactions.len()
    );

    Ok(TotalsByCategory {
        categories,
        grand_total_revenue: grand_totals.total_revenue,
        grand_total_expense: grand_totals.total_expense,
        grand_balance: grand_totals.balance,
    })
}

#[cfg(test)]
mod totals_service_tests {
    use rusqlite::Connection;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::{
        Error,
        category::{Category, CategoryPurpose},
        person::{Person, delete_person},
        test_utils::{
            get_test_connection, must_create_category, must_create_person,
            must_create_transaction,
        },
        totals::{Totals, get_totals_by_category, get_totals_by_person},
        transaction::TransactionKind,
    };

    /// Insert a revenue row directly, skipping the amount bounds check.
    fn insert_raw_revenue(
        amount: Decimal,
        category: &Category,
        person: &Person,
        connection: &Connection,
    ) {
        connection
            .execute(
                "INSERT INTO \"transaction\" (id, description, amount, kind, category_id, person_id)
                VALUES (?1, 'Raw', ?2, 2, ?3, ?4)",
                (Uuid::new_v4(), amount.to_string(), category.id, person.id),
            )
            .unwrap();
    }

    #[test]
    fn empty_database_has_zero_totals() {
        let connection = get_test_connection();

        let by_person = get_totals_by_person(&connection).unwrap();
        let by_category = get_totals_by_category(&connection).unwrap();

        assert!(by_person.people.is_empty());
        assert_eq!(by_person.grand_balance, Decimal::ZERO);
        assert!(by_category.categories.is_empty());
        assert_eq!(by_category.grand_total_revenue, Decimal::ZERO);
    }

    #[test]
    fn totals_by_person_for_joao_and_maria() {
        let connection = get_test_connection();
        let joao = must_create_person("João", 25, &connection);
        let maria = must_create_person("Maria", 17, &connection);
        let salary = must_create_category("Salário", CategoryPurpose::Revenue, &connection);
        let food = must_create_category("Alimentação", CategoryPurpose::Expense, &connection);
        must_create_transaction(
            "Salário de janeiro",
            dec!(5000.00),
            TransactionKind::Revenue,
            &salary,
            &joao,
            &connection,
        );
        must_create_transaction(
            "Compra no supermercado",
            dec!(150.50),
            TransactionKind::Expense,
            &food,
            &joao,
            &connection,
        );

        let totals = get_totals_by_person(&connection).unwrap();

        assert_eq!(totals.people.len(), 2);
        assert_eq!(totals.people[0].person_id, joao.id);
        assert_eq!(totals.people[0].person_name, "João");
        assert_eq!(totals.people[0].totals, Totals::new(dec!(5000.00), dec!(150.50)).unwrap());
        assert_eq!(totals.people[0].totals.balance, dec!(4849.50));
        assert_eq!(totals.people[1].person_id, maria.id);
        assert_eq!(totals.people[1].totals, Totals::default());
        assert_eq!(totals.grand_total_revenue, dec!(5000.00));
        assert_eq!(totals.grand_total_expense, dec!(150.50));
        assert_eq!(totals.grand_balance, dec!(4849.50));
    }

    #[test]
    fn totals_by_category_orders_by_description() {
        let connection = get_test_connection();
        let joao = must_create_person("João", 25, &connection);
        let maria = must_create_person("Maria", 17, &connection);
        let salary = must_create_category("Salário", CategoryPurpose::Revenue, &connection);
        let food = must_create_category("Alimentação", CategoryPurpose::Expense, &connection);
        let leisure = must_create_category("Lazer", CategoryPurpose::Both, &connection);
        must_create_transaction(
            "Salário de janeiro",
            dec!(5000.00),
            TransactionKind::Revenue,
            &salary,
            &joao,
            &connection,
        );
        must_create_transaction(
            "Compra no supermercado",
            dec!(150.50),
            TransactionKind::Expense,
            &food,
            &joao,
            &connection,
        );
        must_create_transaction(
            "Lanche",
            dec!(20.00),
            TransactionKind::Expense,
            &food,
            &maria,
            &connection,
        );

        let totals = get_totals_by_category(&connection).unwrap();

        let descriptions: Vec<_> = totals
            .categories
            .iter()
            .map(|entry| entry.category_description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Alimentação", "Lazer", "Salário"]);
        assert_eq!(totals.categories[0].category_id, food.id);
        assert_eq!(totals.categories[0].totals, Totals::new(dec!(0), dec!(170.50)).unwrap());
        assert_eq!(totals.categories[1].category_id, leisure.id);
        assert_eq!(totals.categories[1].totals, Totals::default());
        assert_eq!(totals.categories[2].totals, Totals::new(dec!(5000.00), dec!(0)).unwrap());
        assert_eq!(totals.grand_total_revenue, dec!(5000.00));
        assert_eq!(totals.grand_total_expense, dec!(170.50));
        assert_eq!(totals.grand_balance, dec!(4829.50));
    }

    #[test]
    fn grand_totals_equal_sum_of_entries() {
        let connection = get_test_connection();
        let food = must_create_category("Alimentação", CategoryPurpose::Both, &connection);
        for (index, age) in [25, 40, 17].into_iter().enumerate() {
            let person = must_create_person(&format!("Pessoa {index}"), age, &connection);
            must_create_transaction(
                "Despesa",
                dec!(12.34) * Decimal::from(index + 1),
                TransactionKind::Expense,
                &food,
                &person,
                &connection,
            );
            if age >= 18 {
                must_create_transaction(
                    "Receita",
                    dec!(100.01),
                    TransactionKind::Revenue,
                    &food,
                    &person,
                    &connection,
                );
            }
        }

        let totals = get_totals_by_person(&connection).unwrap();

        let revenue: Decimal = totals.people.iter().map(|entry| entry.totals.total_revenue).sum();
        let expense: Decimal = totals.people.iter().map(|entry| entry.totals.total_expense).sum();
        assert_eq!(totals.grand_total_revenue, revenue);
        assert_eq!(totals.grand_total_expense, expense);
        assert_eq!(totals.grand_balance, revenue - expense);
        for entry in &totals.people {
            assert_eq!(
                entry.totals.balance,
                entry.totals.total_revenue - entry.totals.total_expense
            );
        }
    }

    #[test]
    fn deleted_person_no_longer_counts() {
        let connection = get_test_connection();
        let joao = must_create_person("João", 25, &connection);
        let salary = must_create_category("Salário", CategoryPurpose::Revenue, &connection);
        must_create_transaction(
            "Salário de janeiro",
            dec!(5000.00),
            TransactionKind::Revenue,
            &salary,
            &joao,
            &connection,
        );

        delete_person(joao.id, &connection).unwrap();

        let totals = get_totals_by_category(&connection).unwrap();
        assert_eq!(totals.categories[0].totals, Totals::default());
        assert_eq!(totals.grand_total_revenue, Decimal::ZERO);
    }

    #[test]
    fn overflowing_sums_are_an_error() {
        let connection = get_test_connection();
        let joao = must_create_person("João", 25, &connection);
        let salary = must_create_category("Salário", CategoryPurpose::Revenue, &connection);
        insert_raw_revenue(Decimal::MAX, &salary, &joao, &connection);
        insert_raw_revenue(Decimal::MAX, &salary, &joao, &connection);

        assert_eq!(get_totals_by_person(&connection), Err(Error::TotalsOverflow));
        assert_eq!(get_totals_by_category(&connection), Err(Error::TotalsOverflow));
    }

    #[test]
    fn grand_totals_overflow_is_an_error() {
        let connection = get_test_connection();
        let joao = must_create_person("João", 25, &connection);
        let maria = must_create_person("Maria", 30, &connection);
        let salary = must_create_category("Salário", CategoryPurpose::Revenue, &connection);
        insert_raw_revenue(Decimal::MAX, &salary, &joao, &connection);
        insert_raw_revenue(Decimal::MAX, &salary, &maria, &connection);

        assert_eq!(get_totals_by_person(&connection), Err(Error::TotalsOverflow));
    }
}
