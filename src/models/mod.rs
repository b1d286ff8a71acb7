//! Data models for GearGuard

pub mod board;
pub mod enums;
pub mod equipment;
pub mod request;
pub mod team;

