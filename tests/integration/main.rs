//! Integration tests for the CampusFix HTTP API.
//!
//! These tests run against a real PostgreSQL database. Set
//! `CAMPUSFIX_TEST_DATABASE_URL` to enable them; when unset every test
//! is a silent no-op so the suite passes without infrastructure.

mod helpers;

mod lifecycle_test;
mod notification_test;
mod schedule_test;
