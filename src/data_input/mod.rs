// src/data_input/mod.rs

pub mod csv_loader;
pub mod measurement_table;

// src/data_input/mod.rs
