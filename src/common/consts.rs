// Outcome codes printed by the command-line driver
pub const LEGAL_CODE: i32 = 0;
pub const ILLEGAL_CODE: i32 = 1;
pub const IO_ERROR_CODE: i32 = 2;

// Environment switch for verbose logging
pub const DEBUG_ENV: &str = "SJCHECK_DEBUG";
