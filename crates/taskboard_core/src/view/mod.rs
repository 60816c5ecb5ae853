//! Read-side projections over store snapshots.
//!
//! # Responsibility
//! - Derive filtered, sorted, summarized views without mutating the store.
//!
//! # Invariants
//! - Projections are pure functions of a snapshot plus caller-owned options.
//! - The summary is always computed over the unfiltered snapshot.

pub mod projection;

pub use projection::{
    dashboard, project, summarize, DashboardView, SortKey, StatusFilter, Summary, ViewOptions,
};
