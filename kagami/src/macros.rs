#[macro_export]
macro_rules! expect {
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(t) => t,
            Err(why) => {
                panic!("{}: {:?}", $msg, why);
            }
        }
    };
}

// Log macros prefix records with the calling thread's name

#[macro_export]
macro_rules! kagami_error {
    ($($arg:tt)+) => {
        log::error!(
            "[{}] {}",
            std::thread::current().name().unwrap_or("unnamed"),
            format_args!($($arg)+)
        )
    };
}

#[macro_export]
macro_rules! kagami_warn {
    ($($arg:tt)+) => {
        log::warn!(
            "[{}] {}",
            std::thread::current().name().unwrap_or("unnamed"),
            format_args!($($arg)+)
        )
    };
}

#[macro_export]
macro_rules! kagami_info {
    ($($arg:tt)+) => {
        log::info!(
            "[{}] {}",
            std::thread::current().name().unwrap_or("unnamed"),
            format_args!($($arg)+)
        )
    };
}

#[macro_export]
macro_rules! kagami_debug {
    ($($arg:tt)+) => {
        log::debug!(
            "[{}] {}",
            std::thread::current().name().unwrap_or("unnamed"),
            format_args!($($arg)+)
        )
    };
}

#[macro_export]
macro_rules! kagami_trace {
    ($($arg:tt)+) => {
        log::trace!(
            "[{}] {}",
            std::thread::current().name().unwrap_or("unnamed"),
            format_args!($($arg)+)
        )
    };
}
