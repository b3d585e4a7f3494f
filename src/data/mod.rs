//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. They
//! are generic over [`sea_orm::ConnectionTrait`] so the same code runs
//! against a plain connection or inside a transaction.

pub mod reservation;
pub mod room;
pub mod team;
pub mod user;
