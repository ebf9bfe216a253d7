//! Call-site logging macros.
//!
//! Each macro fills the event's `origin` with the name of the enclosing
//! function, which the formatter reports as `logger.name`.
//!
//! ```ignore
//! log_warning!(logger, "settlement {} delayed", batch_id)?;
//! log_exception!(logger, &err, "settlement {} failed", batch_id)?;
//! ```

/// Reduce a `type_name` path to the bare function name.
#[doc(hidden)]
pub fn short_function_name(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::__here").unwrap_or(path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Name of the function this macro is expanded in.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::logger::macros::short_function_name(__type_name_of(__here))
    }};
}

/// Log at an explicit level: `log_event!(logger, Level::Info, "fmt", args..)`.
#[macro_export]
macro_rules! log_event {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log(&$crate::record::LogEvent::new(
            $level,
            $crate::__function_name!(),
            ::std::format!($($arg)+),
        ))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_event!($logger, $crate::level::Level::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_event!($logger, $crate::level::Level::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_event!($logger, $crate::level::Level::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_event!($logger, $crate::level::Level::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_event!($logger, $crate::level::Level::Critical, $($arg)+)
    };
}

/// Log at `ERROR` with an error and its source chain under `exception`.
#[macro_export]
macro_rules! log_exception {
    ($logger:expr, $error:expr, $($arg:tt)+) => {
        $logger.log(
            &$crate::record::LogEvent::new(
                $crate::level::Level::Error,
                $crate::__function_name!(),
                ::std::format!($($arg)+),
            )
            .with_error($error),
        )
    };
}
