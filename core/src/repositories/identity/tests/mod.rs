//! Tests for the identity provider seam
