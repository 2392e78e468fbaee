//! Component tests for configuration, errors and builders.

mod unit;
