/// Return with an error if a condition is not met.
///
/// Simplifies the pattern of checking a precondition and returning with an
/// error before any state has been touched.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $e:expr $(,)?) => {
        if !$cond {
            return Err($e);
        }
    };
}

/// Assert that a `try_` client call failed with the given contract error.
///
/// Soroban clients surface contract errors as `Err(Ok(E))`, where the outer
/// `Result` distinguishes host failures from contract-signalled ones.
#[macro_export]
macro_rules! assert_contract_err {
    ($res:expr, $expected:expr) => {
        match $res {
            core::result::Result::Err(core::result::Result::Ok(err)) => {
                assert_eq!(err, $expected, "expected {:?}, got {:?}", $expected, err);
            }
            core::result::Result::Err(core::result::Result::Err(e)) => {
                panic!("expected contract error {:?}, got invoke error {:?}", $expected, e);
            }
            core::result::Result::Ok(v) => {
                panic!("expected contract error {:?}, call succeeded with {:?}", $expected, v);
            }
        }
    };
}