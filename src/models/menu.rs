//! Food list data structures
//!
//! A food list is a JSON object mapping meal slot names to lists of dishes:
//!
//! ```json
//! { "lunch": ["Noodles", "Dumplings"], "dinner": ["Hotpot", "Noodles"] }
//! ```
//!
//! Keys whose value is not a list of strings are ignored.

use std::collections::HashMap;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;

use crate::utils::dedup_preserving_order;

/// Candidate dishes for one category, keyed by meal slot name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodMenu {
    slots: HashMap<String, Vec<String>>,
}

/// A single value in the food list object
#[derive(Deserialize)]
#[serde(untagged)]
enum SlotValue {
    Items(Vec<String>),
    Other(IgnoredAny),
}

// Custom deserializer so unrecognized fields are skipped instead of failing the whole list
impl<'de> Deserialize<'de> for FoodMenu {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct FoodMenuVisitor;

        impl<'de> Visitor<'de> for FoodMenuVisitor {
            type Value = FoodMenu;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("an object mapping meal names to lists of dishes")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut slots = HashMap::new();
                while let Some(key) = map.next_key::<String>()? {
                    match map.next_value::<SlotValue>()? {
                        SlotValue::Items(items) => {
                            slots.insert(key, items);
                        }
                        SlotValue::Other(_) => {
                            tracing::debug!(slot = %key, "ignoring non-list entry in food list");
                        }
                    }
                }
                Ok(FoodMenu { slots })
            }
        }

        deserializer.deserialize_map(FoodMenuVisitor)
    }
}

impl FoodMenu {
    /// Drop repeated dishes in every slot, keeping first occurrences in order
    pub fn deduplicated(self) -> Self {
        let slots = self
            .slots
            .into_iter()
            .map(|(slot, items)| (slot, dedup_preserving_order(items)))
            .collect();
        Self { slots }
    }

    /// Dishes for a meal slot (empty if the list has no entry for it)
    pub fn items(&self, slot: &str) -> &[String] {
        self.slots.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.values().all(Vec::is_empty)
    }
}
