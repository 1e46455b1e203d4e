//! Unit test modules.

#[path = "unit/display_name_test.rs"]
mod display_name_test;
#[path = "unit/score_service_test.rs"]
mod score_service_test;
