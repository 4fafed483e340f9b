//! Test module organization.
//!
//! This module organizes all integration tests for the PMP checker.






/// Region decoding and address matching tests.
mod region_tests;
