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

/// Build a `Record` from `key => value` pairs, in order.
///
/// ```
/// use ql_scrape::rec;
/// let r = rec! { "name" => "Rocket Launcher", "frags" => 12 };
/// assert_eq!(r.get_int("frags").unwrap(), 12);
/// ```
#[macro_export]
macro_rules! rec {
    () => {
        $crate::record::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut r = $crate::record::Record::new();
        $(
            r.set($key, $value).expect("fresh record is writable");
        )+
        r
    }};
}
