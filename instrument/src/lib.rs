//! Column-oriented capture of route-planner `tracing` events.
//!
//! Every event target becomes a table and every event field a typed column,
//! so the schema follows whatever the engine records. `route-core` emits:
//!
//! - `route_candidate`: one row per costed candidate (kind, vessel,
//!   distance_nm, fuel_tons, total_cost, travel_time_hours, co2_tons,
//!   weather_risk)
//! - `route_selection`: one row per selection (objective, optimal, key)
//!
//! # Usage
//!
//! ```ignore
//! instrument::install_subscriber();
//! instrument::clear();
//! engine.optimize("OSLO", "HAMBURG", "Tanker", Objective::Cost, &mut rng)?;
//! let recorder = instrument::drain();
//! let costs = recorder.table("route_candidate").unwrap().f64_column("total_cost");
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use polars::prelude::*;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Record};
use tracing::{Event, Id, Metadata, Subscriber};

/// A column of typed values.
#[derive(Debug, Clone)]
pub enum TypedColumn {
    U64(Vec<u64>),
    I64(Vec<i64>),
    F64(Vec<f64>),
    Bool(Vec<bool>),
    Str(Vec<String>),
}

impl TypedColumn {
    pub fn len(&self) -> usize {
        match self {
            TypedColumn::U64(v) => v.len(),
            TypedColumn::I64(v) => v.len(),
            TypedColumn::F64(v) => v.len(),
            TypedColumn::Bool(v) => v.len(),
            TypedColumn::Str(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Extend with defaults up to `len` rows.
    fn pad_to(&mut self, len: usize) {
        let missing = len.saturating_sub(self.len());
        match self {
            TypedColumn::U64(v) => v.extend(std::iter::repeat_n(0, missing)),
            TypedColumn::I64(v) => v.extend(std::iter::repeat_n(0, missing)),
            TypedColumn::F64(v) => v.extend(std::iter::repeat_n(0.0, missing)),
            TypedColumn::Bool(v) => v.extend(std::iter::repeat_n(false, missing)),
            TypedColumn::Str(v) => v.extend(std::iter::repeat_n(String::new(), missing)),
        }
    }

    fn to_polars(&self, name: &str) -> Column {
        match self {
            TypedColumn::U64(v) => Column::new(name.into(), v),
            TypedColumn::I64(v) => Column::new(name.into(), v),
            TypedColumn::F64(v) => Column::new(name.into(), v),
            TypedColumn::Bool(v) => Column::new(name.into(), v),
            TypedColumn::Str(v) => Column::new(name.into(), v),
        }
    }
}

/// Rows recorded under one event target.
#[derive(Debug, Clone, Default)]
pub struct EventTable {
    pub columns: HashMap<String, TypedColumn>,
    pub row_count: usize,
}

impl EventTable {
    pub fn f64_column(&self, name: &str) -> Option<&[f64]> {
        match self.columns.get(name)? {
            TypedColumn::F64(v) => Some(v),
            _ => None,
        }
    }

    pub fn str_column(&self, name: &str) -> Option<&[String]> {
        match self.columns.get(name)? {
            TypedColumn::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Keep every column at `row_count` so rows stay aligned when an event
    /// omits a field.
    fn align(&mut self) {
        for col in self.columns.values_mut() {
            col.pad_to(self.row_count);
        }
    }

    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let columns: Vec<Column> = self
            .columns
            .iter()
            .map(|(name, col)| col.to_polars(name))
            .collect();
        DataFrame::new(columns)
    }
}

/// All tables, keyed by tracing target.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub tables: HashMap<String, EventTable>,
}

impl Recorder {
    pub fn table(&self, target: &str) -> Option<&EventTable> {
        self.tables.get(target)
    }

    pub fn to_dataframes(&self) -> HashMap<String, DataFrame> {
        self.tables
            .iter()
            .filter_map(|(name, table)| table.to_dataframe().ok().map(|df| (name.clone(), df)))
            .collect()
    }
}

thread_local! {
    static RECORDER: RefCell<Recorder> = RefCell::default();
}

/// Writes one event's fields into the current row of a table.
struct RowVisitor<'a> {
    table: &'a mut EventTable,
}

impl RowVisitor<'_> {
    /// Column for `field`, created and back-filled with defaults on first
    /// sight.
    fn column(&mut self, field: &Field, empty: fn() -> TypedColumn) -> &mut TypedColumn {
        let rows = self.table.row_count;
        self.table
            .columns
            .entry(field.name().to_string())
            .or_insert_with(|| {
                let mut col = empty();
                col.pad_to(rows);
                col
            })
    }
}

impl Visit for RowVisitor<'_> {
    fn record_u64(&mut self, field: &Field, value: u64) {
        if let TypedColumn::U64(v) = self.column(field, || TypedColumn::U64(Vec::new())) {
            v.push(value);
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if let TypedColumn::I64(v) = self.column(field, || TypedColumn::I64(Vec::new())) {
            v.push(value);
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let TypedColumn::F64(v) = self.column(field, || TypedColumn::F64(Vec::new())) {
            v.push(value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if let TypedColumn::Bool(v) = self.column(field, || TypedColumn::Bool(Vec::new())) {
            v.push(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if let TypedColumn::Str(v) = self.column(field, || TypedColumn::Str(Vec::new())) {
            v.push(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.record_str(field, &format!("{:?}", value));
    }
}

/// Subscriber that turns info-level events into table rows. Spans are
/// ignored.
pub struct RouteEventSubscriber;

impl Subscriber for RouteEventSubscriber {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.is_event() && *metadata.level() <= tracing::Level::INFO
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let target = event.metadata().target().to_string();

        RECORDER.with(|r| {
            let mut recorder = r.borrow_mut();
            let table = recorder.tables.entry(target).or_default();

            table.align();
            event.record(&mut RowVisitor { table: &mut *table });
            table.row_count += 1;
            table.align();
        });
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

/// Install `RouteEventSubscriber` as the global default. Later calls are
/// no-ops, so every test can call this.
pub fn install_subscriber() {
    let _ = tracing::subscriber::set_global_default(RouteEventSubscriber);
}

/// Take everything recorded on this thread.
pub fn drain() -> Recorder {
    RECORDER.with(|r| std::mem::take(&mut *r.borrow_mut()))
}

/// Discard everything recorded on this thread.
pub fn clear() {
    RECORDER.with(|r| *r.borrow_mut() = Recorder::default());
}
