use crate::constants::MISSING_VALUE_SENTINEL;

/// One row of the chart-of-accounts table.
///
/// Optional fields are `None` when the source cell was empty or carried the
/// missing-value sentinel; see [`clean_field`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountRecord {
    pub account_number: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub positive_examples: Option<String>,
    pub negative_examples: Option<String>,
    pub new_position_code: Option<String>,
    pub new_position_description: Option<String>,
}

impl AccountRecord {
    pub fn new(account_number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into().trim().to_string(),
            name: clean_field(&name.into()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = clean_field(description.as_ref());
        self
    }

    pub fn with_examples(mut self, positive: impl AsRef<str>, negative: impl AsRef<str>) -> Self {
        self.positive_examples = clean_field(positive.as_ref());
        self.negative_examples = clean_field(negative.as_ref());
        self
    }

    pub fn with_new_position(
        mut self,
        code: impl AsRef<str>,
        description: impl AsRef<str>,
    ) -> Self {
        self.new_position_code = clean_field(code.as_ref());
        self.new_position_description = clean_field(description.as_ref());
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// Returns `true` for empty values and the case-insensitive `nan` sentinel.
pub fn is_missing(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(MISSING_VALUE_SENTINEL)
}

/// Trims a raw cell value, mapping missing values to `None`.
pub fn clean_field(value: &str) -> Option<String> {
    if is_missing(value) {
        None
    } else {
        Some(value.trim().to_string())
    }
}
