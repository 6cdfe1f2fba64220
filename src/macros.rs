/// Compile a regex literal once and hand out a `&'static Regex`.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build the twelve month-variant sets of a [`Config`](crate::Config).
///
/// Each bracketed group lists the names of one month, January first. The
/// caller pins the result to `[BTreeSet<String>; 12]`, so a missing or extra
/// group is a type error rather than a runtime surprise.
macro_rules! months {
    ($([$($name:literal),* $(,)?]),* $(,)?) => {
        [
            $(
                [$($name),*]
                    .into_iter()
                    .map($crate::engine::normalize_month_name)
                    .collect::<std::collections::BTreeSet<String>>()
            ),*
        ]
    };
}
