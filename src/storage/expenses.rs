//! Expense repository for JSON storage
//!
//! Persists the whole store to a single JSON document: a top-level object
//! whose keys are date labels in store group order and whose values are
//! arrays of `{id, title, price}` records in entry order. Prices are stored
//! as two-decimal strings. Selection state is session-only and never written.
//!
//! Loading tolerates two degradations: a missing file yields an empty store,
//! and records without an `id` field (files written by older versions) get a
//! freshly generated id.

use std::fmt;
use std::path::PathBuf;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{DateGroup, Expense, ExpenseId, Money};
use crate::store::ExpenseStore;

use super::file_io::{read_json, write_json_atomic};

/// One persisted expense record
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ExpenseRecord {
    /// Absent in files written before ids were persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<ExpenseId>,
    title: String,
    price: String,
}

/// The on-disk document: (label, records) pairs in file order
///
/// JSON objects carry their key order in the document itself, and the store's
/// group order must survive a round trip, so (de)serialization is written by
/// hand against a Vec of pairs instead of a map type.
#[derive(Debug, Default)]
struct ExpenseFile {
    groups: Vec<(String, Vec<ExpenseRecord>)>,
}

impl Serialize for ExpenseFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (label, records) in &self.groups {
            map.serialize_entry(label, records)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ExpenseFile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FileVisitor;

        impl<'de> Visitor<'de> for FileVisitor {
            type Value = ExpenseFile;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of date labels to expense arrays")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut groups: Vec<(String, Vec<ExpenseRecord>)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, records)) =
                    access.next_entry::<String, Vec<ExpenseRecord>>()?
                {
                    groups.push((label, records));
                }
                Ok(ExpenseFile { groups })
            }
        }

        deserializer.deserialize_map(FileVisitor)
    }
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a repository backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Serialize the whole store to disk
    pub fn save(&self, store: &ExpenseStore) -> ExpenseResult<()> {
        let file = ExpenseFile {
            groups: store
                .groups()
                .iter()
                .map(|group| {
                    let records = group
                        .entries
                        .iter()
                        .map(|e| ExpenseRecord {
                            id: Some(e.id),
                            title: e.title.clone(),
                            price: e.price.to_string(),
                        })
                        .collect();
                    (group.label.clone(), records)
                })
                .collect(),
        };

        write_json_atomic(&self.path, &file)
    }

    /// Load the store from disk
    ///
    /// A missing file yields an empty store. A file that exists but fails to
    /// parse is returned as an error; callers that want the degrade-to-empty
    /// policy use [`load_or_empty`](Self::load_or_empty).
    pub fn load(&self) -> ExpenseResult<ExpenseStore> {
        let file: ExpenseFile = read_json(&self.path)?;

        let mut groups: Vec<DateGroup> = Vec::with_capacity(file.groups.len());
        for (label, records) in file.groups {
            for record in records {
                let price = Money::parse(&record.price).map_err(|e| {
                    ExpenseError::Json(format!(
                        "Failed to parse {}: {}",
                        self.path.display(),
                        e
                    ))
                })?;
                let expense = Expense::from_parts(
                    record.id.unwrap_or_else(ExpenseId::new),
                    record.title,
                    price,
                );
                // A duplicated label in the file folds into its first
                // occurrence; empty arrays create no group.
                match groups.iter_mut().find(|g| g.label == label) {
                    Some(group) => group.entries.push(expense),
                    None => groups.push(DateGroup::new(label.clone(), expense)),
                }
            }
        }

        Ok(ExpenseStore::from_groups(groups))
    }

    /// Load the store, degrading to an empty one on failure
    ///
    /// A parse or I/O failure is reported on stderr and the session starts
    /// empty; it is never fatal.
    pub fn load_or_empty(&self) -> ExpenseStore {
        match self.load() {
            Ok(store) => store,
            Err(err) => {
                eprintln!("Warning: could not load expense data: {}", err);
                eprintln!("Starting with an empty expense list.");
                ExpenseStore::new()
            }
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
