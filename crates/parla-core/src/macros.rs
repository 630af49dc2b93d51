/// Builds a [`Path`](crate::stmt::Path) from dotted segments.
///
/// ```
/// # use parla_core::path;
/// let path = path!(.texts.meanings);
/// assert_eq!(path.to_string(), "texts.meanings");
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::stmt::Path::root()
    };
    (
        $( . $field:ident )+
    ) => {
        [ $( stringify!($field), )+ ].into_iter().collect::<$crate::stmt::Path>()
    };
}

/// Builds a [`View`](crate::stmt::View) from a nested field list.
///
/// Bare names select fields, names followed by braces select a relation
/// with the nested view.
///
/// ```
/// # use parla_core::view;
/// let view = view! { id, text, language { code } };
/// assert_eq!(view.selected_fields().count(), 2);
/// assert!(view.relations().contains_key("language"));
/// ```
#[macro_export]
macro_rules! view {
    ( $($body:tt)* ) => {
        $crate::__view_items!($crate::stmt::View::new(); $($body)*)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __view_items {
    ($view:expr;) => {
        $view
    };
    ($view:expr; $name:ident { $($nested:tt)* } $(, $($rest:tt)*)?) => {
        $crate::__view_items!(
            $view.relation(stringify!($name), $crate::view!($($nested)*));
            $($($rest)*)?
        )
    };
    ($view:expr; $name:ident $(, $($rest:tt)*)?) => {
        $crate::__view_items!($view.field(stringify!($name)); $($($rest)*)?)
    };
}
