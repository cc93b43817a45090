//! Meal slots (periods of the day) and the schedules they belong to.

/// A period of the day selecting which list of a food file is used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealSlot {
    /// Key in the food list JSON (e.g. "dinner")
    pub name: &'static str,
    /// Text shown in the headline
    pub label: &'static str,
    /// Local hours (start inclusive, end exclusive) this slot is preselected for
    pub hours: &'static [(u32, u32)],
}

const BREAKFAST: MealSlot = MealSlot {
    name: "breakfast",
    label: "breakfast",
    hours: &[(0, 10), (23, 24)],
};

const LUNCH: MealSlot = MealSlot {
    name: "lunch",
    label: "lunch",
    hours: &[(0, 13), (23, 24)],
};

const LUNCH_AFTER_BREAKFAST: MealSlot = MealSlot {
    name: "lunch",
    label: "lunch",
    hours: &[(10, 13)],
};

const DINNER: MealSlot = MealSlot {
    name: "dinner",
    label: "dinner",
    hours: &[(13, 23)],
};

/// Ordered, non-empty list of meal slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealSlots {
    slots: Vec<MealSlot>,
}

impl MealSlots {
    /// Lunch and dinner
    pub fn two_meals() -> Self {
        Self {
            slots: vec![LUNCH, DINNER],
        }
    }

    /// Breakfast, lunch and dinner
    pub fn three_meals() -> Self {
        Self {
            slots: vec![BREAKFAST, LUNCH_AFTER_BREAKFAST, DINNER],
        }
    }

    pub fn with_breakfast(breakfast: bool) -> Self {
        if breakfast {
            Self::three_meals()
        } else {
            Self::two_meals()
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false: every schedule has at least one slot
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot at `index`, wrapping around the schedule
    pub fn get(&self, index: usize) -> &MealSlot {
        &self.slots[index % self.slots.len()]
    }

    /// Index following `index`, wrapping to the first slot
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.slots.len()
    }

    /// Slot to preselect for a local hour (0-23); falls back to the first slot
    pub fn index_for_hour(&self, hour: u32) -> usize {
        self.slots
            .iter()
            .position(|slot| {
                slot.hours
                    .iter()
                    .any(|&(start, end)| hour >= start && hour < end)
            })
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_meal_schedule() {
        let slots = MealSlots::two_meals();
        let names: Vec<_> = (0..slots.len()).map(|i| slots.get(i).name).collect();
        assert_eq!(names, vec!["lunch", "dinner"]);
    }

    #[test]
    fn test_three_meal_schedule() {
        let slots = MealSlots::with_breakfast(true);
        let names: Vec<_> = (0..slots.len()).map(|i| slots.get(i).name).collect();
        assert_eq!(names, vec!["breakfast", "lunch", "dinner"]);
    }

    #[test]
    fn test_next_index_is_cyclic() {
        for slots in [MealSlots::two_meals(), MealSlots::three_meals()] {
            for start in 0..slots.len() {
                let mut index = start;
                for _ in 0..slots.len() * 3 {
                    index = slots.next_index(index);
                    assert!(index < slots.len());
                }
                assert_eq!(index, start);
            }
        }
    }

    #[test]
    fn test_index_for_hour_two_meals() {
        let slots = MealSlots::two_meals();
        assert_eq!(slots.get(slots.index_for_hour(8)).name, "lunch");
        assert_eq!(slots.get(slots.index_for_hour(12)).name, "lunch");
        assert_eq!(slots.get(slots.index_for_hour(13)).name, "dinner");
        assert_eq!(slots.get(slots.index_for_hour(22)).name, "dinner");
        assert_eq!(slots.get(slots.index_for_hour(23)).name, "lunch");
    }

    #[test]
    fn test_index_for_hour_three_meals() {
        let slots = MealSlots::three_meals();
        assert_eq!(slots.get(slots.index_for_hour(0)).name, "breakfast");
        assert_eq!(slots.get(slots.index_for_hour(9)).name, "breakfast");
        assert_eq!(slots.get(slots.index_for_hour(10)).name, "lunch");
        assert_eq!(slots.get(slots.index_for_hour(18)).name, "dinner");
        assert_eq!(slots.get(slots.index_for_hour(23)).name, "breakfast");
    }

    #[test]
    fn test_schedules_are_never_empty() {
        assert!(!MealSlots::two_meals().is_empty());
        assert!(!MealSlots::with_breakfast(true).is_empty());
    }

    #[test]
    fn test_get_wraps() {
        let slots = MealSlots::two_meals();
        assert_eq!(slots.get(2).name, "lunch");
        assert_eq!(slots.get(3).name, "dinner");
    }
}
