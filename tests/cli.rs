//! CLI-level assertions on exact stderr text, since the library's
//! `InterpretError` payload is a generic placeholder and the real
//! diagnostic is written directly to stderr by the parser/VM (see
//! `compiler/parser/compile_time_error_handlers.rs`). Scenario 4 of the
//! documented end-to-end table is the one the unit/integration tests
//! never pinned down to an exact string.

use assert_cmd::Command;
use predicates::str::contains;
use project_root::get_project_root;

fn fixture(name: &str) -> std::path::PathBuf {
  get_project_root()
    .expect("there is no project root")
    .join("fixtures")
    .join(name)
}

#[test]
fn dangling_operator_reports_expected_expression_at_end() {
  Command::cargo_bin("rlox")
    .unwrap()
    .arg(fixture("dangling_operator.lox"))
    .assert()
    .code(65)
    .stderr(contains("[line 1] Error at end: Expected expression."));
}

#[test]
fn arithmetic_fixture_prints_the_evaluated_result() {
  Command::cargo_bin("rlox")
    .unwrap()
    .arg(fixture("arithmetic.lox"))
    .assert()
    .success()
    .stdout(contains("7"));
}
