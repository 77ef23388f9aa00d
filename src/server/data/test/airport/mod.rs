use crate::server::{data::airport::AirportRepository, model::airport::Airport};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
