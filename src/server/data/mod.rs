//! Database repository layer for the bookings tables.
//!
//! Each repository issues a single parameterized SELECT built with SeaORM's query builder
//! and scans the returned rows into domain models through [`scan::RowScan`]. A row that
//! fails to scan is logged and skipped; only a failure of the query itself is returned
//! as an error.

pub mod aircraft;
pub mod airport;
pub mod flight;
pub mod scan;
pub mod seat;

#[cfg(test)]
mod test;
