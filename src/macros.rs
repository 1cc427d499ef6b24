// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Format a message, log it and hand it to an `AlertSink`.
#[macro_export]
macro_rules! alert {
    ($sink:expr, $($arg:tt)*) => {{
        let msg = ::std::format!($($arg)*);
        $crate::logf!("alert: {}", msg);
        $crate::host::AlertSink::alert(&mut *$sink, &msg);
    }};
}
