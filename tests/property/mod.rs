//! Property-based tests for taxonomy insertion and persistence
