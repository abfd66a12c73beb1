pub mod commands;
pub mod completions;
pub mod correct;
pub mod detect;
pub mod language;
pub mod report;
pub mod review;
pub mod scanner;
