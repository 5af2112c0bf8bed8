/// Build an error from format arguments, capturing a stack.
///
/// With a `tag =>` prefix the new error is wrapped in that tag.
///
/// ```
/// use errtag::{Tag, errorf};
///
/// let err = errorf!("port {} in use", 8080);
/// assert_eq!(err.to_string(), "port 8080 in use");
///
/// let net = Tag::new_static("net");
/// let err = errorf!(net => "port {} in use", 8080);
/// assert_eq!(err.to_string(), "net: port 8080 in use");
/// ```
#[macro_export]
macro_rules! errorf {
    ($tag:expr => $($arg:tt)+) => {
        $crate::Tag::errorf(&$tag, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::errorf(::std::format_args!($($arg)+))
    };
}
