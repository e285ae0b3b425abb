use core::any::Any;

/// Any value an encoder may hand to [`TypeRegistry::expose`].
///
/// `Value` is object safe and implemented for every `'static` type that
/// implements `serde::Serialize`. Primitives, strings, containers and
/// records alike are values; whether a value gets custom treatment is
/// decided by the registry, never by this trait.
///
/// A `&dyn Value` can be upcast to `&dyn Any` for downcasting and to
/// `&dyn erased_serde::Serialize` so an encoder can emit passthrough
/// values with its generic rules.
///
/// # Examples
///
/// ```
/// use core::any::Any;
/// use fv_expose::Value;
///
/// let values: [&dyn Value; 3] = [&1_u8, &"text", &vec![1.5_f32]];
///
/// let any: &dyn Any = values[1];
/// assert_eq!(any.downcast_ref::<&str>(), Some(&"text"));
/// ```
///
/// [`TypeRegistry::expose`]: crate::registry::TypeRegistry::expose
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an exposed value",
    note = "`Value` is implemented for every `'static` type that implements `serde::Serialize`"
)]
pub trait Value: Any + erased_serde::Serialize {}

impl<T: Any + serde_core::Serialize> Value for T {}
