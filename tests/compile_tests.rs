//! Compile-fail tests for the derive diagnostics.
//!
//! Each file under `tests/compile_fail/` must be rejected by the derives.

#[test]
fn compile_fail_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/compile_fail/*.rs");
}
