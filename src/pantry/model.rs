use crate::error::{PantryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed set of stock categories. The declaration order is the ordinal order
/// operators pick from (1 = Canned, 2 = Fresh, 3 = Dry Goods).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Canned,
    Fresh,
    #[serde(rename = "Dry Goods")]
    DryGoods,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Canned, Category::Fresh, Category::DryGoods];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Canned => "Canned",
            Category::Fresh => "Fresh",
            Category::DryGoods => "Dry Goods",
        }
    }

    /// 1-based position in [`Category::ALL`].
    pub fn ordinal(&self) -> usize {
        match self {
            Category::Canned => 1,
            Category::Fresh => 2,
            Category::DryGoods => 3,
        }
    }

    pub fn from_ordinal(n: usize) -> Result<Self> {
        n.checked_sub(1)
            .and_then(|i| Category::ALL.get(i).copied())
            .ok_or_else(|| {
                PantryError::validation(format!(
                    "Invalid category selected: {} (choose 1-{})",
                    n,
                    Category::ALL.len()
                ))
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts either the category literal (any case, `-`/`_` read as spaces) or
/// its ordinal.
impl FromStr for Category {
    type Err = PantryError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<usize>() {
            return Category::from_ordinal(n);
        }

        let wanted: String = trimmed
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect::<String>()
            .to_lowercase();
        let wanted = wanted.split_whitespace().collect::<Vec<_>>().join(" ");

        Category::ALL
            .into_iter()
            .find(|c| c.as_str().to_lowercase() == wanted)
            .ok_or_else(|| PantryError::validation(format!("Unknown category: {}", trimmed)))
    }
}

/// Trims surrounding whitespace and title-cases `raw`: the first letter of
/// every run of cased letters is upper-cased, the rest lower-cased. Uncased
/// characters (digits, punctuation, CJK) end a word.
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;
    for c in raw.trim().chars() {
        if c.is_lowercase() || c.is_uppercase() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// A normalized, non-empty item name. This is the inventory key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(raw: &str) -> Result<Self> {
        let name = normalize_name(raw);
        if name.is_empty() {
            return Err(PantryError::validation("Item name cannot be empty."));
        }
        Ok(ItemName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    // State files written by older releases used `qty`.
    #[serde(alias = "qty")]
    pub quantity: u64,
    pub category: Category,
}

impl Record {
    pub fn new(quantity: u64, category: Category) -> Self {
        Self { quantity, category }
    }
}
