use std::sync::OnceLock;

use crate::registry::TypeRegistry;
use crate::{ExposeError, Exposed, Value};

static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();

/// Publishes `registry` as the process-wide registry.
///
/// Must run before the first call to [`global`] or [`expose`]; the
/// registry is never modified afterwards. Fails with
/// [`ExposeError::GlobalAlreadyInitialized`] if a global registry exists.
///
/// # Examples
///
/// ```
/// use fv_expose::derive::Expose;
/// use fv_expose::registry::{self, TypeRegistry};
///
/// #[derive(serde::Serialize, Expose)]
/// struct Flag {
///     on: bool,
/// }
///
/// let mut builder = TypeRegistry::empty();
/// builder.register::<Flag>().unwrap();
/// registry::init_global(builder).unwrap();
///
/// assert!(fv_expose::expose(&Flag { on: true }).is_reduced());
/// assert!(registry::init_global(TypeRegistry::empty()).is_err());
/// ```
pub fn init_global(registry: TypeRegistry) -> Result<(), ExposeError> {
    let mut registry = Some(registry);
    GLOBAL.get_or_init(|| {
        let registry = registry.take().unwrap_or_else(TypeRegistry::empty);
        log::debug!("global type registry initialized with {} type(s)", registry.len());
        registry
    });

    match registry {
        None => Ok(()),
        Some(_) => Err(ExposeError::GlobalAlreadyInitialized),
    }
}

/// Returns the process-wide registry.
///
/// If [`init_global`] was never called, the global registry is created on
/// first use with [`TypeRegistry::new`], which holds the auto-registered
/// types.
pub fn global() -> &'static TypeRegistry {
    GLOBAL.get_or_init(TypeRegistry::new)
}

/// Dispatches a value through the process-wide registry.
///
/// See [`TypeRegistry::expose`].
#[inline]
pub fn expose(value: &dyn Value) -> Exposed<'_> {
    global().expose(value)
}
