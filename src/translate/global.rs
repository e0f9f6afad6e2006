use std::sync::{Arc, LazyLock, Mutex, PoisonError, RwLock};

use crate::macros::debug_event;
use crate::translate::Registry;
use crate::types::Params;

static GLOBAL: LazyLock<RwLock<Arc<Registry>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Registry::english())));

// Serializes writers so a `configure` edit is never lost to a concurrent swap.
static WRITER: Mutex<()> = Mutex::new(());

/// Snapshot of the process-wide registry.
///
/// Starts out as [`Registry::english`]. The snapshot is immutable; later
/// changes through [`install`] or [`configure`] are not visible in it.
#[must_use]
pub fn global() -> Arc<Registry> {
    GLOBAL.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Replaces the process-wide registry.
///
/// # Examples
///
/// ```
/// use field_rail::translate::{self, Registry};
/// use field_rail::types::Error;
///
/// translate::install(Registry::chinese());
/// let err = Error::new("required").with_subject("name", "姓名", "");
/// assert_eq!(err.to_string(), "姓名为必填字段");
/// ```
pub fn install(registry: Registry) {
    let _writer = WRITER.lock().unwrap_or_else(PoisonError::into_inner);
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(registry);
    debug_event!("translation registry installed");
}

/// Edits a copy of the process-wide registry and installs it.
///
/// `edit` runs without holding the registry lock, so it may render errors
/// or call [`global`]; those still see the previous registry. Writers are
/// serialized, so `edit` must not call [`install`] or `configure` itself.
///
/// # Examples
///
/// ```
/// use field_rail::translate;
/// use field_rail::types::Error;
///
/// translate::configure(|registry| {
///     registry.register("required", "please fill in {label}");
/// });
/// let err = Error::new("required").with_subject("name", "your name", "");
/// assert_eq!(err.to_string(), "please fill in your name");
/// ```
pub fn configure(edit: impl FnOnce(&mut Registry)) {
    let _writer = WRITER.lock().unwrap_or_else(PoisonError::into_inner);
    let mut registry = Registry::clone(&global());
    edit(&mut registry);
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(registry);
    debug_event!("translation registry reconfigured");
}

/// Sets the default translator of the process-wide registry.
pub fn set_default_translator<F>(translator: F)
where
    F: Fn(&str, &Params) -> String + Send + Sync + 'static,
{
    configure(|registry| {
        registry.set_default_translator(translator);
    });
}

pub fn clear_default_translator() {
    configure(|registry| {
        registry.clear_default_translator();
    });
}
