pub mod activity;

#[macro_export]
macro_rules! ensure_ok {
    ($predict:expr, $err:expr) => {
        if !$predict {
            return Err($err);
        }
    };
}

#[macro_export]
macro_rules! ensure_biz {
    ($predict:expr, $err:expr) => {
        if !$predict {
            return Ok(Err($err));
        }
    };

    ($call:expr) => {
        match $call {
            Ok(value) => value,
            Err(err) => return Ok(Err(err.into())),
        }
    };
}

#[macro_export]
macro_rules! biz_ok {
    ($value:expr) => {
        Ok(Ok($value))
    };
}
