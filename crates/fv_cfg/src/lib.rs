#![doc = include_str!("../README.md")]
#![no_std]

/// Expands its input unconditionally.
///
/// Used through an alias produced by [`define_alias`] whose predicate holds.
///
/// - `alias! { items }` keeps the items.
/// - `alias! { if { a } else { b } }` expands to `a`.
/// - `alias!()` expands to `true`.
#[doc(hidden)]
#[macro_export]
macro_rules! enabled {
    () => { true };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($p)* };
    ($($p:tt)*) => { $($p)* };
}

/// Discards its input.
///
/// Used through an alias produced by [`define_alias`] whose predicate fails.
///
/// - `alias! { items }` removes the items.
/// - `alias! { if { a } else { b } }` expands to `b`.
/// - `alias!()` expands to `false`.
#[doc(hidden)]
#[macro_export]
macro_rules! disabled {
    () => { false };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($n)* };
    ($($p:tt)*) => {};
}

/// Defines one macro alias per cfg predicate.
///
/// Each alias re-exports either [`enabled`] or [`disabled`], so the call site
/// names the feature instead of repeating the predicate.
///
/// ```
/// mod cfg {
///     fv_cfg::define_alias! {
///         #[cfg(any())] => never,
///         #[cfg(all())] => always,
///     }
/// }
///
/// assert!(cfg::always!());
/// assert!(!cfg::never!());
/// assert_eq!(cfg::never! { if { 1 } else { 2 } }, 2);
/// ```
#[macro_export]
macro_rules! define_alias {
    (
        #[cfg($meta:meta)] => $alias:ident
        $(, $($rest:tt)*)?
    ) => {
        #[cfg($meta)]
        #[doc(inline)]
        #[allow(unused_imports)]
        pub use $crate::enabled as $alias;

        #[cfg(not($meta))]
        #[doc(inline)]
        #[allow(unused_imports)]
        pub use $crate::disabled as $alias;

        $($crate::define_alias! { $($rest)* })?
    };
    () => {};
}
