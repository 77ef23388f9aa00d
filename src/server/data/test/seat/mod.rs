use crate::server::data::seat::SeatRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_seat_numbers_by_aircraft;
