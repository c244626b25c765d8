//! Flight route planner server.
//!
//! A web application that answers: "what is the cheapest way to fly
//! between two cities, and which scheduled flight is closest to the
//! time I want to leave?"

pub mod domain;
pub mod network;
pub mod planner;
pub mod schedule;
pub mod web;
