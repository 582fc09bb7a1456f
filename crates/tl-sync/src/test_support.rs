//! Shared test utilities for tl-sync.
