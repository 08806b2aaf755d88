//! In-memory contact directory.
//!
//! # Responsibility
//! - Map contact names to records with stable insertion order.
//! - Answer the upcoming-birthdays query.
//!
//! # Invariants
//! - Keys are the exact record name (case-sensitive).
//! - At most one record per key; `order` and `records` hold the same keys.
//! - Iteration follows first-insertion order; replacing a record keeps its
//!   position.

mod upcoming;

pub use upcoming::{BirthdayWindow, UpcomingBirthday, DEFAULT_WINDOW_DAYS};

use crate::model::field::Name;
use crate::model::record::Record;
use log::debug;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Name-keyed collection of contact records.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts `record`, replacing any record stored under the same name.
    ///
    /// Returns the replaced record. Replacement discards the previous
    /// record's phones and birthday; callers that want to extend an existing
    /// contact go through [`Directory::find_mut`] or
    /// [`Directory::get_or_insert`] instead.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let previous = self.records.insert(key.clone(), record);
        if previous.is_none() {
            self.order.push(key);
        }
        debug!(
            "event=record_upsert module=directory status=ok replaced={} size={}",
            previous.is_some(),
            self.records.len()
        );
        previous
    }

    /// Returns the record for `name`, inserting an empty one when absent.
    ///
    /// The flag is `true` when a new record was created.
    pub fn get_or_insert(&mut self, name: Name) -> (&mut Record, bool) {
        let key = name.as_str().to_string();
        let created = !self.records.contains_key(&key);
        if created {
            self.order.push(key.clone());
            debug!(
                "event=record_create module=directory status=ok size={}",
                self.records.len() + 1
            );
        }
        let record = self
            .records
            .entry(key)
            .or_insert_with(|| Record::new(name));
        (record, created)
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-name lookup for in-place mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Removes the record for `name`. Deleting a missing name is a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        debug!(
            "event=record_delete module=directory status=ok size={}",
            self.records.len()
        );
        Some(removed)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }
}

impl Display for Directory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, record) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}
