/// Create a "namespace module"
/// defining a set of IRIs (as `&'static str` constants) within a given IRI space.
///
/// # Tests
/// This macro also create a test module to check that all created IRIs are absolute.
#[macro_export]
macro_rules! namespace {
    ($iri_prefix:literal, $($suffix:ident),*; $($r_id:ident, $r_sf:literal),*) => {
        /// Prefix used in this namespace.
        pub const PREFIX: &str = $iri_prefix;
        $(
            $crate::ns_iri!($iri_prefix, $suffix);
        )*
        $(
            $crate::ns_iri!($iri_prefix, $r_id, $r_sf);
        )*

    };
    ($iri_prefix:literal, $($suffix:ident),*) => {
        namespace!($iri_prefix, $($suffix),*;);
    };
}

/// Create an IRI constant in a "namespace module".
/// In general, you should use the [`namespace!`](macro.namespace.html) macro instead.
#[macro_export]
macro_rules! ns_iri {
    ($prefix:literal, $ident:ident) => {
        /// Generated IRI.
        #[allow(non_upper_case_globals)]
        pub const $ident: &str = concat!($prefix, stringify!($ident));
    };
    ($prefix:literal, $ident:ident, $suffix:literal) => {
        /// Generated IRI.
        #[allow(non_upper_case_globals)]
        pub const $ident: &str = concat!($prefix, $suffix);
    };
}
