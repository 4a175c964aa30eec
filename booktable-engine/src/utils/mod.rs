//! Utility modules - time parsing, input validation, logging

pub mod logger;
pub mod time;
pub mod validation;
