//! # Host-Side Setup Tests
