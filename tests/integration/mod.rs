//! Integration tests for Free Gear
//!
//! Whole races driven frame by frame through the public session API.

mod render_test;
mod session_test;
