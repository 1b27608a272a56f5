use project_root::get_project_root;
use rlox::vm::VM;
use std::fs::read_to_string;

#[test]
fn interprets_a_fixture_file_located_relative_to_the_project_root() {
  let project_root = get_project_root().expect("there is no project root");
  let fixture_path = project_root.join("fixtures").join("arithmetic.lox");
  let source = read_to_string(fixture_path).unwrap();
  assert!(VM::new().interpret(&source).is_ok());
}
