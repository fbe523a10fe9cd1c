// src/data_analysis/mod.rs

pub mod aggregator;
pub mod confidence;
pub mod row_stats;

// src/data_analysis/mod.rs
