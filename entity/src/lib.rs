//! `SeaORM` Entity definitions for the bookings tables read by airboard.

pub mod prelude;

pub mod aircraft;
pub mod airport;
pub mod flight;
pub mod seat;
