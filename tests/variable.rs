#[macro_use]
mod common;

#[cfg(test)]
mod variable {
    tests! {
        define in variable is OK
        "42"
    }

    tests! {
        uninitialized in variable is OK
        "nil"
    }

    tests! {
        assign in variable is OK
        "2"
    }

    tests! {
        assign_is_expression in variable is OK
        "2"
    }

    tests! {
        chained_assignment in variable is OK
        "3"
        "3"
    }

    tests! {
        redeclare in variable is OK
        "2"
    }

    tests! {
        shadow in variable is OK
        "Hello, World!"
        "42"
    }

    tests! {
        undefined in variable is ERR
        "Undefined variable 'x'."
        "[line 1]"
    }

    tests! {
        undefined_assign in variable is ERR
        "Undefined variable 'x'."
        "[line 1]"
    }

    tests! {
        missing_name in variable is ERR
        "[line 1] Error at '=': Expect variable name."
    }
}
