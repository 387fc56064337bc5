// Common test utilities
#![allow(dead_code)]

use sjcheck::review::CheckError;
use sjcheck::verify;

/// Assert that `src` checks clean
pub fn ok(src: &str) {
    if let Err(e) = verify(src) {
        panic!("expected valid source, got `{e}` for:\n{src}");
    }
}

/// Assert that `src` is rejected and return the structural error
pub fn err(src: &str) -> CheckError {
    match verify(src) {
        Ok(()) => panic!("expected an error for:\n{src}"),
        Err(e) => e.check_error().cloned().unwrap_or_else(|| panic!("expected a check error, got `{e}`")),
    }
}

/// Line number the run stopped on
pub fn err_line(src: &str) -> usize {
    verify(src).unwrap_err().line().expect("expected a check error")
}
