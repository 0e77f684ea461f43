#[macro_use]
mod common;

#[cfg(test)]
mod _if {
    tests! {
        then_branch in if is OK
        "1"
    }

    tests! {
        else_branch in if is OK
        "2"
    }

    tests! {
        truthiness in if is OK
        "no"
        "no"
        "no"
        "yes"
        "yes"
    }

    tests! {
        dangling_else in if is OK
        "2"
    }

    tests! {
        missing_paren in if is ERR
        "[line 1] Error at 'true': Expect '(' after 'if'."
    }
}
