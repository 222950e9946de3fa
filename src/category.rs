//! The static category catalog.
//!
//! Categories are configuration: the catalog is seeded once at startup and
//! never created, edited, or deleted at runtime. Transactions reference
//! categories by id, and an id with no catalog entry resolves to a neutral
//! placeholder so that aggregation is total over its input.

use serde::{Deserialize, Serialize};

use crate::transaction::TransactionKind;

/// A category for classifying transactions (e.g., groceries, salary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// The id transactions reference this category by.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display glyph.
    pub icon: String,
    /// Whether this category applies to income or expense transactions.
    ///
    /// Every category has exactly one kind; an income category is never
    /// offered when recording an expense and vice versa.
    pub kind: TransactionKind,
    /// Chart color as a hex string.
    pub color: String,
}

/// Display attributes resolved for a category id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDisplay {
    /// Display name, or the raw id for an unknown category.
    pub name: String,
    /// Display glyph.
    pub icon: String,
    /// Chart color as a hex string.
    pub color: String,
}

const FALLBACK_COLOR: &str = "#999";
const FALLBACK_ICON: &str = "📦";

/// The fixed set of categories offered by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    /// The built-in catalog: twelve expense categories and six income
    /// categories.
    pub fn built_in() -> Self {
        let category = |id: &str, name: &str, icon: &str, kind, color: &str| Category {
            id: id.to_owned(),
            name: name.to_owned(),
            icon: icon.to_owned(),
            kind,
            color: color.to_owned(),
        };
        let expense = TransactionKind::Expense;
        let income = TransactionKind::Income;

        Self {
            categories: vec![
                category("food", "Продукты", "🛒", expense, "#ef4444"),
                category("restaurant", "Рестораны", "🍽️", expense, "#f97316"),
                category("transport", "Транспорт", "🚗", expense, "#eab308"),
                category("housing", "Жильё", "🏠", expense, "#84cc16"),
                category("utilities", "Комм. услуги", "💡", expense, "#22c55e"),
                category("health", "Здоровье", "💊", expense, "#14b8a6"),
                category("entertainment", "Развлечения", "🎮", expense, "#06b6d4"),
                category("clothing", "Одежда", "👕", expense, "#3b82f6"),
                category("education", "Образование", "📚", expense, "#6366f1"),
                category("subscriptions", "Подписки", "📱", expense, "#8b5cf6"),
                category("gifts", "Подарки", "🎁", expense, "#a855f7"),
                category("other_expense", "Прочие расходы", "📦", expense, "#d946ef"),
                category("salary", "Зарплата", "💰", income, "#10b981"),
                category("freelance", "Фриланс", "💻", income, "#06b6d4"),
                category("investments", "Инвестиции", "📈", income, "#3b82f6"),
                category("business", "Бизнес", "🏢", income, "#8b5cf6"),
                category("cashback", "Кэшбэк", "💳", income, "#f59e0b"),
                category("other_income", "Прочие доходы", "✨", income, "#6366f1"),
            ],
        }
    }

    /// Every category in the catalog.
    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by id.
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// The categories offered when recording a transaction of `kind`.
    pub fn of_kind(&self, kind: TransactionKind) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|category| category.kind == kind)
            .collect()
    }

    /// Display attributes for `id`, substituting a placeholder when the id
    /// has no catalog entry.
    ///
    /// This never fails: dangling category references degrade to the raw id
    /// with a neutral color and a generic glyph.
    pub fn resolve(&self, id: &str) -> CategoryDisplay {
        match self.get(id) {
            Some(category) => CategoryDisplay {
                name: category.name.clone(),
                icon: category.icon.clone(),
                color: category.color.clone(),
            },
            None => CategoryDisplay {
                name: id.to_owned(),
                icon: FALLBACK_ICON.to_owned(),
                color: FALLBACK_COLOR.to_owned(),
            },
        }
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::built_in()
    }
}
