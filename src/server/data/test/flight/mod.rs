use crate::server::{data::flight::FlightRepository, model::flight::Flight};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_departure_airport;
