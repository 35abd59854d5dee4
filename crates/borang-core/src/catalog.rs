//! The house-type catalog: which unit types exist and which levels (with
//! rental prices) each type offers.
//!
//! The catalog is static configuration consumed by the presentation layer for
//! choice display. The wizard core never validates selections against it.

use serde::{Deserialize, Serialize};

/// One selectable level of a house type, with its display price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelOption {
    pub label: String,
    pub price: String,
}

/// A house type and its ordered level options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseType {
    pub name: String,
    pub levels: Vec<LevelOption>,
}

/// The full catalog of offered units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub houses: Vec<HouseType>,
}

impl Default for Catalog {
    fn default() -> Self {
        let level = |label: &str, price: &str| LevelOption {
            label: label.to_string(),
            price: price.to_string(),
        };
        Self {
            houses: vec![
                HouseType {
                    name: "3 Bilik Tidur".to_string(),
                    levels: vec![
                        level("Tingkat Bawah", "RM700/bulan"),
                        level("Tingkat Satu", "RM680/bulan"),
                        level("Tingkat Dua", "RM620/bulan"),
                        level("Tingkat Tiga", "RM600/bulan"),
                    ],
                },
                HouseType {
                    name: "4 Bilik Tidur".to_string(),
                    levels: vec![
                        level("Tingkat Bawah", "RM880/bulan"),
                        level("Tingkat Satu", "RM840/bulan"),
                        level("Tingkat Dua", "RM770/bulan"),
                        level("Tingkat Tiga", "RM740/bulan"),
                    ],
                },
            ],
        }
    }
}

impl Catalog {
    pub fn house(&self, name: &str) -> Option<&HouseType> {
        self.houses.iter().find(|h| h.name == name)
    }

    /// Level options for a house type, empty if the type is unknown.
    pub fn levels(&self, house_name: &str) -> &[LevelOption] {
        self.house(house_name).map(|h| h.levels.as_slice()).unwrap_or(&[])
    }
}

impl HouseType {
    /// Compact price summary for the type selector, derived from the level
    /// list: the first price label with its amount widened to a min–max
    /// range, e.g. "RM600–700/bulan".
    pub fn price_range(&self) -> String {
        let Some(first) = self.levels.first() else {
            return String::new();
        };
        let amounts: Vec<u64> = self
            .levels
            .iter()
            .filter_map(|l| digit_run(&l.price))
            .filter_map(|run| run.parse().ok())
            .collect();
        let (Some(low), Some(high)) = (amounts.iter().min(), amounts.iter().max()) else {
            return first.price.clone();
        };
        match digit_run(&first.price) {
            Some(run) => first.price.replacen(run, &format!("{low}–{high}"), 1),
            None => first.price.clone(),
        }
    }
}

/// First contiguous run of ASCII digits in `s`.
fn digit_run(s: &str) -> Option<&str> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let rest = &s[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let cat = Catalog::default();
        assert_eq!(cat.houses.len(), 2);
        for house in &cat.houses {
            assert_eq!(house.levels.len(), 4);
        }
        assert_eq!(cat.levels("3 Bilik Tidur")[1].label, "Tingkat Satu");
        assert_eq!(cat.levels("3 Bilik Tidur")[1].price, "RM680/bulan");
        assert!(cat.levels("5 Bilik Tidur").is_empty());
    }

    #[test]
    fn test_price_range() {
        let cat = Catalog::default();
        assert_eq!(cat.house("3 Bilik Tidur").unwrap().price_range(), "RM600–700/bulan");
        assert_eq!(cat.house("4 Bilik Tidur").unwrap().price_range(), "RM740–880/bulan");
    }

    #[test]
    fn test_price_range_degenerate() {
        let empty = HouseType {
            name: "Kosong".to_string(),
            levels: vec![],
        };
        assert_eq!(empty.price_range(), "");

        let no_digits = HouseType {
            name: "Percuma".to_string(),
            levels: vec![LevelOption {
                label: "Tingkat Bawah".to_string(),
                price: "Percuma".to_string(),
            }],
        };
        assert_eq!(no_digits.price_range(), "Percuma");
    }

    #[test]
    fn test_catalog_deserializes_from_json() {
        let raw = r#"{
            "houses": [
                { "name": "2 Bilik Tidur",
                  "levels": [ { "label": "Tingkat Bawah", "price": "RM500/bulan" } ] }
            ]
        }"#;
        let cat: Catalog = serde_json::from_str(raw).unwrap();
        assert_eq!(cat.houses.len(), 1);
        assert_eq!(cat.levels("2 Bilik Tidur")[0].price, "RM500/bulan");
    }
}
