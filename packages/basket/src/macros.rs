#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: ErrorCode = $err;
                log!($env, "Error {} thrown at {}:{}", error_code as u32, file!(), line!());
                Err(error_code)
            }
        }
    };
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {
        {
        if ($assert) {
            Ok(())
        } else {
            let error_code: ErrorCode = $err;
            log!($env, "Error {} thrown at {}:{}", error_code as u32, file!(), line!());
            log!($env, $($arg)*);
            Err(error_code)
        }
        }
    };
}

/// Unwraps a `BasketResult` at a contract entry point, aborting the
/// invocation with the carried error code.
#[macro_export]
macro_rules! ok_or_panic {
    ($env:expr, $result:expr) => {{
        match $result {
            Ok(value) => value,
            Err(error_code) => soroban_sdk::panic_with_error!($env, error_code),
        }
    }};
}

#[macro_export]
macro_rules! safe_increment {
    ($struct:expr, $value:expr, $env:expr) => {{
        $struct = $crate::math::safe_math::SafeMath::safe_add($struct, $value, $env)?
    }};
}

#[macro_export]
macro_rules! safe_decrement {
    ($struct:expr, $value:expr, $env:expr) => {{
        $struct = $crate::math::safe_math::SafeMath::safe_sub($struct, $value, $env)?
    }};
}
