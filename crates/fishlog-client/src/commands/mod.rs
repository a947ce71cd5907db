//! Command handlers for the terminal front end.
//!
//! Each handler drives a [`Tracker`](crate::tracker::Tracker) and returns
//! the text to show the user.

pub mod catches;
pub mod views;
