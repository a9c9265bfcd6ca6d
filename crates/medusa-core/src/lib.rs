#![forbid(unsafe_code)]

//! Record model + view configuration for the medusa bubble-chart engine.
//!
//! Design goals:
//! - records are read-only inputs; all derived state is keyed by record id
//! - configuration mutates only through validated setters with explicit
//!   cascade semantics (cluster/sort/plot are mutually exclusive)
//! - deterministic, testable outputs (no hidden globals, no clock)

pub mod error;
pub mod options;
pub mod record;
pub mod state;

pub use error::{Error, Result};
pub use options::{
    AxisSetting, Filters, LayoutMode, PlotSetting, SizeFn, SortOrder, SortSetting, ViewOptions,
};
pub use record::{DimValue, Record};
pub use state::ViewState;

use rustc_hash::FxHashMap;

/// An immutable collection of records with unique ids.
///
/// A dimension name is valid iff it is present on the *first* record. A
/// dimension can therefore validate and still be missing on later records;
/// downstream consumers treat such missing values as weight 0 / no label /
/// unplottable.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    by_id: FxHashMap<String, usize>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Result<Self> {
        let mut by_id = FxHashMap::default();
        for (index, record) in records.iter().enumerate() {
            if record.id.is_empty() {
                return Err(Error::EmptyRecordId { index });
            }
            if by_id.insert(record.id.clone(), index).is_some() {
                return Err(Error::DuplicateRecordId {
                    id: record.id.clone(),
                });
            }
        }
        Ok(Self { records, by_id })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    /// Whether `dim` is a known dimension (present on the first record).
    pub fn has_dimension(&self, dim: &str) -> bool {
        self.records.first().is_some_and(|r| r.has(dim))
    }

    /// Whether `dim` holds a numeric value on the first record.
    pub fn is_numeric_dimension(&self, dim: &str) -> bool {
        self.records
            .first()
            .and_then(|r| r.get(dim))
            .is_some_and(|v| v.as_number().is_some())
    }
}
