pub mod domain;
pub mod fault_table;
pub mod modules;
pub mod numerics;
