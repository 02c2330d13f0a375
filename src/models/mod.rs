//! Models are the data types that make up the domain: money, jobs, and the
//! people and families that hold them.

// loaded in dependency order
pub mod money;
pub mod job;
pub mod person;
pub mod family;
