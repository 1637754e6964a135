//! Item categories and the alias table users type them with

use std::fmt;

/// Internal category codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Umbrella,
    ChargerC,
}

/// Localized and English synonyms for each category
static CATEGORY_ALIASES: &[(&str, Category)] = &[
    ("우산", Category::Umbrella),
    ("우산들", Category::Umbrella),
    ("umbrella", Category::Umbrella),
    ("c타입", Category::ChargerC),
    ("c타입충전기", Category::ChargerC),
    ("c타입 충전기", Category::ChargerC),
    ("충전기", Category::ChargerC),
    ("ctype", Category::ChargerC),
];

impl Category {
    pub const ALL: [Category; 2] = [Category::Umbrella, Category::ChargerC];

    /// Code stored in the inventory table
    pub fn code(&self) -> &'static str {
        match self {
            Category::Umbrella => "umbrella",
            Category::ChargerC => "charger_c",
        }
    }

    /// Display name shown in chat
    pub fn label(&self) -> &'static str {
        match self {
            Category::Umbrella => "우산",
            Category::ChargerC => "C타입 충전기",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Display name for a stored code; codes outside the known set render as-is
    pub fn label_for_code(code: &str) -> &str {
        Self::from_code(code).map(|c| c.label()).unwrap_or(code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn fold(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolve user-typed category text to a category.
///
/// Exact alias hits win; otherwise both sides are compared lowercased with
/// all whitespace removed.
pub fn normalize_category(raw: &str) -> Option<Category> {
    if let Some((_, category)) = CATEGORY_ALIASES.iter().find(|(alias, _)| *alias == raw) {
        return Some(*category);
    }

    let key = fold(raw);
    CATEGORY_ALIASES
        .iter()
        .find(|(alias, _)| fold(alias) == key)
        .map(|(_, category)| *category)
}
