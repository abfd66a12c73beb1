pub mod check;
pub mod common;
pub mod fix;
pub mod review;
pub mod sample;
pub mod scan;
