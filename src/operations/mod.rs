pub mod creation;
pub mod nested;
pub mod query;
