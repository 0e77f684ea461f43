/// Runs a fixture program from `tests/target/` and asserts on its output.
///
/// `OK` cases run in-process through the library and compare the captured
/// stdout line by line. `ERR` cases run the compiled binary instead, so
/// the stderr contents and the failing exit status can be observed.
#[macro_export]
macro_rules! tests {
    ($file:ident in $scope:ident is OK $($expected:expr)*) => {
        #[test]
        fn $file() {
            use gsc_lang::gsc;

            let expected: Vec<&str> = vec![$($expected),*];
            let expected = expected
                .iter()
                .map(|line| format!("{line}\n"))
                .collect::<String>();

            let mut output = Vec::new();
            let mut gsc = gsc::new(&mut output);
            gsc.run_file(format!("tests/target/{}/{}.gsc", stringify!($scope), stringify!($file)));

            // gsc borrows the output buffer; let it go before reading.
            drop(gsc);
            assert_eq!(expected, String::from_utf8(output).unwrap());
        }
    };

    ($file:ident in $scope:ident is ERR $($expected:expr)+) => {
        #[test]
        fn $file() {
            use assert_cmd::Command;

            let expected = vec![$($expected),+].join("\n");
            let file = format!("tests/target/{}/{}.gsc", stringify!($scope), stringify!($file));

            Command::cargo_bin("gsc").unwrap()
                .arg(file)
                .assert()
                .stderr(format!("{expected}\n"))
                .failure();
        }
    };
}
