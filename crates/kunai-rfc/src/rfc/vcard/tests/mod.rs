//! Fixture-driven tests for the vCard codec.
