//! Business logic services.
//!
//! Services orchestrate repositories, enforce the permission model, and run
//! the conflict-resolution engine. Controllers stay thin and delegate here.

pub mod access;
pub mod auth;
pub mod conflict;
pub mod reservation;
pub mod team;
pub mod user;
