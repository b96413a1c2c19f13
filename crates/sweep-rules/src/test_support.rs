//! Shared test utilities for rule suites.
