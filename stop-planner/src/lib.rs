//! Rest and fuel stop planner.
//!
//! A web service that answers: "Where should I stop along this drive?"
//! It fetches a route, walks its geometry, and inserts a stop after every
//! hour of driving at the local speed limit and wherever the route passes
//! one of the caller's waypoints.

pub mod cache;
pub mod config;
pub mod distance;
pub mod domain;
pub mod export;
pub mod geocode;
pub mod osrm;
pub mod planner;
pub mod speed;
pub mod web;
