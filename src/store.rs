use chrono::Local;
use serde::{Deserialize, Serialize};

/// Fixed sample roster used by bulk QR generation and one-click seeding.
pub const DEMO_STUDENTS: [&str; 5] = [
    "John Smith",
    "Alice Johnson",
    "Bob Wilson",
    "Carol Davis",
    "Emma Taylor",
];

/// One person's presence entry. `time` is the display string captured at
/// creation and never recomputed; `timestamp` (epoch millis) exists only so
/// export can derive a date later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceRecord {
    pub name: String,
    pub time: String,
    pub timestamp: i64,
}

#[derive(Debug, PartialEq, Eq)]
pub enum AddError {
    EmptyName,
    AlreadyPresent { name: String },
}

/// Ordered in-memory attendance list. Iteration order is insertion order and
/// removal keeps the remaining elements in place. Name uniqueness is
/// case-insensitive; the originally entered casing is kept.
///
/// The store does not persist or render itself: every mutating caller must
/// save the full list and rebuild the display afterwards.
#[derive(Debug, Default)]
pub struct AttendanceStore {
    records: Vec<AttendanceRecord>,
}

impl AttendanceStore {
    pub fn new() -> Self {
        AttendanceStore::default()
    }

    pub fn from_records(records: Vec<AttendanceRecord>) -> Self {
        AttendanceStore { records }
    }

    fn contains_name(&self, name: &str) -> bool {
        self.records
            .iter()
            .any(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// Trims the input, rejects blanks and case-insensitive duplicates, and
    /// otherwise appends a record stamped with the current wall clock.
    pub fn add(&mut self, raw_name: &str) -> Result<AttendanceRecord, AddError> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(AddError::EmptyName);
        }
        if self.contains_name(name) {
            return Err(AddError::AlreadyPresent {
                name: name.to_string(),
            });
        }
        let now = Local::now();
        let record = AttendanceRecord {
            name: name.to_string(),
            time: now.format("%-I:%M:%S %p").to_string(),
            timestamp: now.timestamp_millis(),
        };
        self.records.push(record.clone());
        Ok(record)
    }

    /// `add` semantics per name, silently skipping blanks and names already
    /// present. Returns how many were actually added so the caller can report
    /// one aggregate notice.
    pub fn add_many<'a, I>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut added = 0usize;
        for name in names {
            if self.add(name).is_ok() {
                added += 1;
            }
        }
        added
    }

    /// Out-of-range indices are a deliberate no-op: indices come from the
    /// rendered list and may be momentarily stale.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index >= self.records.len() {
            return None;
        }
        Some(self.records.remove(index).name)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn all(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
