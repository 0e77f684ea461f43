#[macro_use]
mod common;

#[cfg(test)]
mod misc {
    use assert_cmd::Command;

    tests! {
        unexpected_character in misc is ERR
        "[line 1] Error : Unexpected character '@'."
    }

    tests! {
        multiple_scan_errors in misc is ERR
        "[line 1] Error : Unexpected character '@'."
        "[line 2] Error : Unexpected character '#'."
    }

    tests! {
        synchronization in misc is ERR
        "[line 1] Error at 'print': Expect ';' after value."
        "[line 2] Error at '=': Expect variable name."
    }

    tests! {
        invalid_assignment in misc is ERR
        "[line 3] Error at '=': Invalid assignment target."
    }

    tests! {
        unclosed_paren in misc is ERR
        "[line 1] Error at ';': Expect ')' after expression."
    }

    tests! {
        runtime_stops_execution in misc is ERR
        "Undefined variable 'missing'."
        "[line 2]"
    }

    #[test]
    fn usage_with_too_many_arguments() {
        Command::cargo_bin("gsc").unwrap()
            .args(["one.gsc", "two.gsc"])
            .assert()
            .stderr("Usage: gsc [file.gsc]\n")
            .code(64);
    }

    #[test]
    fn missing_file_exits_with_io_error() {
        Command::cargo_bin("gsc").unwrap()
            .arg("tests/target/misc/does_not_exist.gsc")
            .assert()
            .code(66);
    }

    #[test]
    fn parse_error_and_runtime_error_exit_codes_differ() {
        Command::cargo_bin("gsc").unwrap()
            .arg("tests/target/misc/invalid_assignment.gsc")
            .assert()
            .code(65);

        Command::cargo_bin("gsc").unwrap()
            .arg("tests/target/misc/runtime_stops_execution.gsc")
            .assert()
            .stdout("1\n")
            .code(70);
    }
}
