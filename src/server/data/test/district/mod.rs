use crate::server::data::district::DistrictRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::district::create_district};

mod list_active;
