//! Unit tests for the SMS module
