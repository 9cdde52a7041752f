// src/filter.rs
//
// The six display filters over the joined team/stadium records.
//
// A RecordView is derived data: positions of kept rows in the caller's
// slice, plus the seating total over the kept rows only (never the full
// input). Pure function of (records, mode); the GUI owns the current
// mode and rebuilds the view on every user action.

use crate::model::{League, Record, Roof};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
    All,
    OpenRoof,
    AmericanLeague,
    NationalLeague,
    MaxCenterField,
    MinCenterField,
}

impl FilterMode {
    pub const ALL: [FilterMode; 6] = [
        FilterMode::All,
        FilterMode::OpenRoof,
        FilterMode::AmericanLeague,
        FilterMode::NationalLeague,
        FilterMode::MaxCenterField,
        FilterMode::MinCenterField,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All Stadiums & Teams",
            FilterMode::OpenRoof => "Open Roofs",
            FilterMode::AmericanLeague => "American League",
            FilterMode::NationalLeague => "National League",
            FilterMode::MaxCenterField => "Greatest Center Field Distance",
            FilterMode::MinCenterField => "Shortest Center Field Distance",
        }
    }
}

#[derive(Clone, Copy)]
enum Extremum {
    Max,
    Min,
}

/// Filtered view for display.
/// Holds row indexes into the source slice; order is input order.
#[derive(Clone, Debug, Default)]
pub struct RecordView {
    /// Positions of kept rows in the source slice
    pub row_ix: Vec<usize>,
    /// Sum of seating capacity over the kept rows only
    pub total_seating: u64,
}

impl RecordView {
    /// Build a view by applying `mode` to `records`.
    ///
    /// Extremal modes keep every row sharing the extremal center field
    /// distance (ties included). On an empty input they return an empty
    /// view with a zero total instead of failing.
    pub fn build(records: &[Record], mode: FilterMode) -> Self {
        let row_ix = match mode {
            FilterMode::All => (0..records.len()).collect(),
            FilterMode::OpenRoof => keep(records, |r| r.stadium.roof == Roof::Open),
            FilterMode::AmericanLeague => keep(records, |r| r.team.league == League::American),
            FilterMode::NationalLeague => keep(records, |r| r.team.league == League::National),
            FilterMode::MaxCenterField => extremal(records, Extremum::Max),
            FilterMode::MinCenterField => extremal(records, Extremum::Min),
        };

        let total_seating = row_ix
            .iter()
            .map(|&ix| records[ix].stadium.seating_capacity as u64)
            .sum();

        Self { row_ix, total_seating }
    }

    /// Number of rows in the projection.
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a single kept record by projected index (no cloning).
    pub fn record<'a>(&self, records: &'a [Record], i: usize) -> Option<&'a Record> {
        self.row_ix.get(i).and_then(|&ix| records.get(ix))
    }

    /// Materialize owned records (for CLI/export boundaries).
    pub fn to_owned_records(&self, records: &[Record]) -> Vec<Record> {
        self.row_ix.iter().map(|&ix| records[ix].clone()).collect()
    }
}

fn keep(records: &[Record], pred: impl Fn(&Record) -> bool) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| pred(r))
        .map(|(ix, _)| ix)
        .collect()
}

/// All rows sharing the min/max center field distance, in input order.
/// Empty input → empty result.
fn extremal(records: &[Record], which: Extremum) -> Vec<usize> {
    let dists = records.iter().map(|r| r.stadium.center_field_dist);
    let target = match which {
        Extremum::Max => dists.max(),
        Extremum::Min => dists.min(),
    };
    let Some(target) = target else { return Vec::new() };
    keep(records, |r| r.stadium.center_field_dist == target)
}
