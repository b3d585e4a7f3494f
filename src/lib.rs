//! Teamroom server library.
//!
//! Teams reserve shared rooms for time windows. Scheduling clashes are
//! resolved by team-type priority: a higher-tier team may displace
//! lower-tier bookings after explicit confirmation, while equal-or-higher
//! tier bookings reject the request outright. Every mutation is gated by a
//! role/permission model where `.elevated` capabilities bypass the
//! team-membership requirement that the base capabilities carry.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
