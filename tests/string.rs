#[macro_use]
mod common;

#[cfg(test)]
mod string {
    tests! {
        concat in string is OK
        "Hello, World!"
    }

    tests! {
        multiline in string is OK
        "line one"
        "line two"
        "after"
    }

    tests! {
        empty in string is OK
        "x"
    }

    tests! {
        equality in string is OK
        "true"
        "false"
        "true"
    }

    tests! {
        unterminated in string is ERR
        "[line 1] Error : Unterminated string."
    }

    tests! {
        unterminated_multiline in string is ERR
        "[line 2] Error : Unterminated string."
    }
}
