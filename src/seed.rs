//! Generates plausible demo data.
//!
//! The generator produces transactions in exactly the shape of user-entered
//! ones, so the rest of the system cannot tell them apart: a month of daily
//! expenses, salary twice a month, and occasional extra income.

use rand::Rng;
use time::{Date, Duration};
use uuid::Uuid;

use crate::transaction::{Transaction, TransactionKind};

struct SampleTemplate {
    category_id: &'static str,
    descriptions: &'static [&'static str],
    min: i64,
    max: i64,
}

const EXPENSE_TEMPLATES: &[SampleTemplate] = &[
    SampleTemplate {
        category_id: "food",
        descriptions: &["Пятёрочка", "Магнит", "Перекрёсток", "Лента", "ВкусВилл"],
        min: 300,
        max: 3500,
    },
    SampleTemplate {
        category_id: "restaurant",
        descriptions: &["Обед в кафе", "Пицца", "Суши", "Кофе"],
        min: 200,
        max: 2500,
    },
    SampleTemplate {
        category_id: "transport",
        descriptions: &["Метро", "Яндекс.Такси", "Бензин", "Каршеринг"],
        min: 50,
        max: 2000,
    },
    SampleTemplate {
        category_id: "housing",
        descriptions: &["Аренда квартиры"],
        min: 25_000,
        max: 45_000,
    },
    SampleTemplate {
        category_id: "utilities",
        descriptions: &["Электричество", "Вода", "Интернет", "Газ"],
        min: 500,
        max: 3000,
    },
    SampleTemplate {
        category_id: "health",
        descriptions: &["Аптека", "Врач", "Спортзал"],
        min: 500,
        max: 5000,
    },
    SampleTemplate {
        category_id: "entertainment",
        descriptions: &["Кино", "Концерт", "Steam", "Netflix"],
        min: 200,
        max: 3000,
    },
    SampleTemplate {
        category_id: "clothing",
        descriptions: &["Кроссовки", "Футболка", "Куртка"],
        min: 1000,
        max: 8000,
    },
    SampleTemplate {
        category_id: "subscriptions",
        descriptions: &["Яндекс.Плюс", "Spotify", "YouTube Premium"],
        min: 169,
        max: 699,
    },
];

// The first entry is salary; it is paid on a fixed schedule below rather
// than drawn at random, so random draws skip index 0.
const INCOME_TEMPLATES: &[SampleTemplate] = &[
    SampleTemplate {
        category_id: "salary",
        descriptions: &["Зарплата", "Аванс"],
        min: 40_000,
        max: 120_000,
    },
    SampleTemplate {
        category_id: "freelance",
        descriptions: &["Проект на фрилансе", "Консультация", "Дизайн"],
        min: 5000,
        max: 50_000,
    },
    SampleTemplate {
        category_id: "cashback",
        descriptions: &["Кэшбэк Тинькофф", "Кэшбэк СберКарта"],
        min: 200,
        max: 2000,
    },
    SampleTemplate {
        category_id: "investments",
        descriptions: &["Дивиденды", "Проценты по вкладу"],
        min: 1000,
        max: 15_000,
    },
];

/// Generate 31 days of sample transactions ending on `today`.
///
/// Each day gets two to five expenses drawn from the expense templates.
/// Salary arrives on the 1st (85 000) and the 15th (45 000) of the month,
/// and roughly one day in five gets one extra non-salary income.
pub fn generate_sample_data(today: Date) -> Vec<Transaction> {
    let mut rng = rand::thread_rng();
    let mut transactions = Vec::new();

    for day_offset in (0..=30).rev() {
        let date = today - Duration::days(day_offset);
        let expense_count = rng.gen_range(2..=5);
        for _ in 0..expense_count {
            let template = &EXPENSE_TEMPLATES[rng.gen_range(0..EXPENSE_TEMPLATES.len())];
            transactions.push(sample_transaction(
                template,
                TransactionKind::Expense,
                date,
                &mut rng,
            ));
        }

        match date.day() {
            1 => transactions.push(payday(85_000, "Зарплата", date)),
            15 => transactions.push(payday(45_000, "Аванс", date)),
            _ => {}
        }

        if rng.gen_bool(0.2) {
            let template = &INCOME_TEMPLATES[rng.gen_range(1..INCOME_TEMPLATES.len())];
            transactions.push(sample_transaction(
                template,
                TransactionKind::Income,
                date,
                &mut rng,
            ));
        }
    }

    transactions
}

fn sample_transaction(
    template: &SampleTemplate,
    kind: TransactionKind,
    date: Date,
    rng: &mut impl Rng,
) -> Transaction {
    let description = template.descriptions[rng.gen_range(0..template.descriptions.len())];

    Transaction {
        id: Uuid::new_v4(),
        amount: rng.gen_range(template.min..template.max),
        kind,
        category_id: template.category_id.to_owned(),
        description: description.to_owned(),
        date,
        created_at: date.midnight().assume_utc(),
    }
}

fn payday(amount: i64, description: &str, date: Date) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        amount,
        kind: TransactionKind::Income,
        category_id: "salary".to_owned(),
        description: description.to_owned(),
        date,
        created_at: date.midnight().assume_utc(),
    }
}

#[cfg(test)]
mod tests {
    use time::{Duration, macros::date};

    use crate::transaction::TransactionKind;

    use super::generate_sample_data;

    #[test]
    fn covers_exactly_the_last_31_days() {
        let today = date!(2024 - 08 - 07);

        let transactions = generate_sample_data(today);

        let earliest = transactions.iter().map(|t| t.date).min().unwrap();
        let latest = transactions.iter().map(|t| t.date).max().unwrap();
        assert_eq!(latest, today);
        assert_eq!(earliest, today - Duration::days(30));
    }

    #[test]
    fn every_day_has_at_least_two_expenses() {
        let today = date!(2024 - 08 - 07);

        let transactions = generate_sample_data(today);

        for day_offset in 0..=30 {
            let date = today - Duration::days(day_offset);
            let expenses = transactions
                .iter()
                .filter(|t| t.date == date && t.kind == TransactionKind::Expense)
                .count();
            assert!((2..=5).contains(&expenses), "{date} had {expenses} expenses");
        }
    }

    #[test]
    fn salary_arrives_on_the_first_and_fifteenth() {
        // A window containing both paydays.
        let today = date!(2024 - 01 - 20);

        let transactions = generate_sample_data(today);

        let salary_1st: Vec<_> = transactions
            .iter()
            .filter(|t| t.date == date!(2024 - 01 - 01) && t.category_id == "salary")
            .collect();
        let salary_15th: Vec<_> = transactions
            .iter()
            .filter(|t| t.date == date!(2024 - 01 - 15) && t.category_id == "salary")
            .collect();

        assert_eq!(salary_1st.len(), 1);
        assert_eq!(salary_1st[0].amount, 85_000);
        assert_eq!(salary_15th.len(), 1);
        assert_eq!(salary_15th[0].amount, 45_000);
    }

    #[test]
    fn amounts_are_positive_and_categories_known_shapes() {
        let transactions = generate_sample_data(date!(2024 - 08 - 07));

        assert!(transactions.iter().all(|t| t.amount > 0));
        assert!(transactions.iter().all(|t| !t.category_id.is_empty()));
    }
}
