//! DieKind - the closed set of die sizes a pool can hold

use serde::{Deserialize, Serialize};

/// One of the fixed die sizes, or `Flat` (a fixed bonus worth 1 per unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DieKind {
    D2,
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
    Flat,
}

impl DieKind {
    /// Largest face value of the die. `Flat` counts as 1 per unit.
    pub fn maximal_value(self) -> i32 {
        match self {
            DieKind::D2 => 2,
            DieKind::D4 => 4,
            DieKind::D6 => 6,
            DieKind::D8 => 8,
            DieKind::D10 => 10,
            DieKind::D12 => 12,
            DieKind::D20 => 20,
            DieKind::D100 => 100,
            DieKind::Flat => 1,
        }
    }

    /// Get all die kinds
    pub fn all() -> &'static [DieKind] {
        &[
            DieKind::D2,
            DieKind::D4,
            DieKind::D6,
            DieKind::D8,
            DieKind::D10,
            DieKind::D12,
            DieKind::D20,
            DieKind::D100,
            DieKind::Flat,
        ]
    }
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DieKind::Flat => write!(f, "flat"),
            kind => write!(f, "d{}", kind.maximal_value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maximal_values() {
        assert_eq!(DieKind::D2.maximal_value(), 2);
        assert_eq!(DieKind::D4.maximal_value(), 4);
        assert_eq!(DieKind::D6.maximal_value(), 6);
        assert_eq!(DieKind::D8.maximal_value(), 8);
        assert_eq!(DieKind::D10.maximal_value(), 10);
        assert_eq!(DieKind::D12.maximal_value(), 12);
        assert_eq!(DieKind::D20.maximal_value(), 20);
        assert_eq!(DieKind::D100.maximal_value(), 100);
        assert_eq!(DieKind::Flat.maximal_value(), 1);
    }

    #[test]
    fn test_maximal_values_are_distinct() {
        let values: Vec<i32> = DieKind::all().iter().map(|k| k.maximal_value()).collect();
        let mut deduped = values.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(values.len(), deduped.len());
    }

    #[test]
    fn test_serde_names() {
        let kind: DieKind = toml::from_str::<std::collections::HashMap<String, DieKind>>(
            "kind = \"d100\"",
        )
        .unwrap()["kind"];
        assert_eq!(kind, DieKind::D100);
    }

    #[test]
    fn test_display() {
        assert_eq!(DieKind::D20.to_string(), "d20");
        assert_eq!(DieKind::Flat.to_string(), "flat");
    }
}
