//! Rail trip planner.
//!
//! Searches a static timetable for direct and multi-leg itineraries,
//! aggregates their travel time and fares, and books passengers on them
//! through a small JSON web service.

pub mod booking;
pub mod config;
pub mod domain;
pub mod planner;
pub mod timetable;
pub mod web;
