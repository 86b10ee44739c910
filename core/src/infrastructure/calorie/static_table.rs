use std::collections::HashMap;

use crate::domain::calorie::{entities::CalorieEntry, ports::CalorieLookup};

const DEFAULT_TABLE: [(&str, u32); 7] = [
    ("pizza", 285), // per slice
    ("burger", 540),
    ("fries", 365),
    ("pasta", 400),
    ("salad", 150),
    ("sushi", 200),
    ("donut", 300),
];

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Fixed label-to-calorie table held in memory.
#[derive(Debug, Clone)]
pub struct StaticCalorieTable {
    table: HashMap<String, u32>,
}

impl StaticCalorieTable {
    pub fn new() -> Self {
        Self::from_entries(DEFAULT_TABLE)
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let table = entries
            .into_iter()
            .map(|(label, calories)| (normalize(label.as_ref()), calories))
            .collect();

        Self { table }
    }
}

impl Default for StaticCalorieTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CalorieLookup for StaticCalorieTable {
    fn lookup(&self, label: &str) -> Option<u32> {
        self.table.get(&normalize(label)).copied()
    }

    fn entries(&self) -> Vec<CalorieEntry> {
        let mut entries: Vec<CalorieEntry> = self
            .table
            .iter()
            .map(|(label, calories)| CalorieEntry::new(label.clone(), *calories))
            .collect();
        entries.sort_by(|a, b| a.label.cmp(&b.label));
        entries
    }
}
