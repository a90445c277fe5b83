#[macro_export]
macro_rules! assert_ok {
    ( $expression:expr ) => {
        match $expression {
            Ok(result) => result,
            Err(error) => {
                panic!(
                    "Operation '{}' should be successful but it failed with: {}",
                    stringify!($expression),
                    error
                );
            }
        }
    };
}

#[macro_export]
macro_rules! assert_braces_match {
    ($code:expr) => {
        let code: &str = &$code;
        let opening = code.matches('{').count();
        let closing = code.matches('}').count();
        assert_eq!(
            opening, closing,
            "Got {} opening but {} closing braces in code:\n{}",
            opening, closing, code
        );
    };
}
