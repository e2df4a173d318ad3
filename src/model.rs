use serde::Serialize;

/// Dishes collected for one day, keyed by the header line exactly as it
/// appeared in the source, e.g. `"ke 25.2.2026"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayMenu {
    pub key: String,
    pub dishes: Vec<String>,
}

/// A parsed week: day sections in the order their headers were first
/// seen on the page. The order is display-significant, so this is a
/// small insertion-ordered map rather than a hash map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeekMenu {
    days: Vec<DayMenu>,
}

impl WeekMenu {
    /// Insert a day's dishes. A repeated key text replaces the earlier
    /// dishes but keeps the key's original position.
    pub fn insert(&mut self, key: String, dishes: Vec<String>) {
        match self.days.iter_mut().find(|day| day.key == key) {
            Some(day) => day.dishes = dishes,
            None => self.days.push(DayMenu { key, dishes }),
        }
    }

    pub fn days(&self) -> &[DayMenu] {
        &self.days
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.days
            .iter()
            .find(|day| day.key == key)
            .map(|day| day.dishes.as_slice())
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
