pub mod aggregate;
pub mod classify;
pub mod detail;
pub mod group;
pub mod regions;
