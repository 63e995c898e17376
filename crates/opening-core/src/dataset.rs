//! Dataset container and filtered views over it.

use crate::record::OpeningRecord;

/// The full in-memory table of openings, loaded once and read-only for
/// the rest of the process.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<OpeningRecord>,
}

impl Dataset {
    pub fn new(records: Vec<OpeningRecord>) -> Self {
        Dataset { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[OpeningRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &OpeningRecord> {
        self.records.iter()
    }
}

/// A read-only subset of a dataset under some active boundaries.
///
/// Built fresh whenever the boundaries change and thrown away when
/// they are re-chosen; it borrows the dataset's records and holds no
/// state of its own beyond membership. Any number of views may coexist.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    records: Vec<&'a OpeningRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn new(records: Vec<&'a OpeningRecord>) -> Self {
        FilteredView { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[&'a OpeningRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a OpeningRecord> + '_ {
        self.records.iter().copied()
    }
}
