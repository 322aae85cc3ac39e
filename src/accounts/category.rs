use std::fmt;
use std::str::FromStr;

use super::error::SelectionError;

/// Top-level account category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Account numbers starting with 1-5.
    Balance,
    /// Account numbers starting with 6-9.
    IncomeStatement,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Balance, Category::IncomeStatement];

    /// German label used in result tables.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Balance => "Bilanz",
            Category::IncomeStatement => "GuV",
        }
    }

    pub fn subcategories(&self) -> &'static [Subcategory] {
        match self {
            Category::Balance => &[
                Subcategory::Asset,
                Subcategory::Equity,
                Subcategory::Liability,
            ],
            Category::IncomeStatement => &[
                Subcategory::Revenue,
                Subcategory::Expense,
                Subcategory::FinancialResult,
                Subcategory::TaxResult,
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "bilanz" | "balance" => Ok(Category::Balance),
            "guv" | "incomestatement" | "gewinnundverlust" => Ok(Category::IncomeStatement),
            _ => Err(SelectionError::UnknownCategory {
                value: s.to_string(),
            }),
        }
    }
}

/// Finer classification within a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subcategory {
    Asset,
    Equity,
    Liability,
    Revenue,
    Expense,
    FinancialResult,
    TaxResult,
}

impl Subcategory {
    pub fn category(&self) -> Category {
        match self {
            Subcategory::Asset | Subcategory::Equity | Subcategory::Liability => Category::Balance,
            Subcategory::Revenue
            | Subcategory::Expense
            | Subcategory::FinancialResult
            | Subcategory::TaxResult => Category::IncomeStatement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Subcategory::Asset => "Aktiva",
            Subcategory::Equity => "Eigenkapital",
            Subcategory::Liability => "Fremdkapital",
            Subcategory::Revenue => "Erträge",
            Subcategory::Expense => "Aufwendungen",
            Subcategory::FinancialResult => "Finanzergebnis",
            Subcategory::TaxResult => "Steuern",
        }
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subcategory {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "asset" | "assets" | "aktiva" => Ok(Subcategory::Asset),
            "equity" | "eigenkapital" => Ok(Subcategory::Equity),
            "liability" | "liabilities" | "fremdkapital" | "passiva" => Ok(Subcategory::Liability),
            "revenue" | "ertraege" | "ertrag" => Ok(Subcategory::Revenue),
            "expense" | "expenses" | "aufwendungen" | "aufwand" => Ok(Subcategory::Expense),
            "financialresult" | "finanzergebnis" => Ok(Subcategory::FinancialResult),
            "taxresult" | "steuern" | "steuerergebnis" => Ok(Subcategory::TaxResult),
            _ => Err(SelectionError::UnknownSubcategory {
                value: s.to_string(),
            }),
        }
    }
}

fn normalize_key(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace('ä', "ae")
        .replace('ö', "oe")
        .replace('ü', "ue")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Category (and, where defined, subcategory) derived from an account number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    pub category: Category,
    pub subcategory: Option<Subcategory>,
}

/// Classifies an account number by its leading digits.
///
/// Returns `None` for empty numbers and numbers that do not start with 1-9.
/// Prefixes `8x` other than `80`-`85` and `87`, and all `9x`, belong to the
/// income statement without a subcategory.
pub fn classify(account_number: &str) -> Option<Classification> {
    let mut chars = account_number.trim().chars();
    let first = chars.next()?.to_digit(10)?;
    let second = chars.next().and_then(|c| c.to_digit(10));

    let (category, subcategory) = match (first, second) {
        (1 | 2, _) => (Category::Balance, Some(Subcategory::Asset)),
        (3, _) => (Category::Balance, Some(Subcategory::Equity)),
        (4 | 5, _) => (Category::Balance, Some(Subcategory::Liability)),
        (6, _) => (Category::IncomeStatement, Some(Subcategory::Revenue)),
        (7, _) => (Category::IncomeStatement, Some(Subcategory::Expense)),
        (8, Some(0..=5)) => (Category::IncomeStatement, Some(Subcategory::FinancialResult)),
        (8, Some(7)) => (Category::IncomeStatement, Some(Subcategory::TaxResult)),
        (8 | 9, _) => (Category::IncomeStatement, None),
        _ => return None,
    };

    Some(Classification {
        category,
        subcategory,
    })
}

/// The category (and optional subcategory) chosen for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategorySelection {
    category: Category,
    subcategory: Option<Subcategory>,
}

impl CategorySelection {
    /// Builds a selection, rejecting subcategories of the other category.
    pub fn new(
        category: Category,
        subcategory: Option<Subcategory>,
    ) -> Result<Self, SelectionError> {
        if let Some(sub) = subcategory
            && sub.category() != category
        {
            return Err(SelectionError::SubcategoryMismatch {
                category,
                subcategory: sub,
            });
        }

        Ok(Self {
            category,
            subcategory,
        })
    }

    pub fn category(category: Category) -> Self {
        Self {
            category,
            subcategory: None,
        }
    }

    pub fn subcategory(subcategory: Subcategory) -> Self {
        Self {
            category: subcategory.category(),
            subcategory: Some(subcategory),
        }
    }

    pub fn top_level(&self) -> Category {
        self.category
    }

    pub fn sub(&self) -> Option<Subcategory> {
        self.subcategory
    }

    /// Drops the subcategory (used when subcategory granularity is off).
    pub fn without_subcategory(&self) -> Self {
        Self::category(self.category)
    }

    pub fn matches(&self, classification: &Classification) -> bool {
        classification.category == self.category
            && (self.subcategory.is_none() || classification.subcategory == self.subcategory)
    }

    /// Human-readable label, e.g. `Bilanz` or `GuV / Steuern`.
    pub fn label(&self) -> String {
        match self.subcategory {
            Some(sub) => format!("{} / {}", self.category.label(), sub.label()),
            None => self.category.label().to_string(),
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
