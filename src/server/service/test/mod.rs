use crate::server::{
    model::{aircraft::Aircraft, seat::SeatSum},
    service::{aircraft::AircraftService, seat::SeatService},
};
use test_utils::{builder::TestBuilder, factory};

mod seat;
