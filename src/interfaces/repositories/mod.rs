pub mod candidate;
pub mod memory;
pub mod storage;
