use leptos::*;

/// One-shot message carried across a navigation, e.g. the outcome of a
/// decision shown on the queue the reviewer is sent back to.
#[derive(Clone, Copy)]
pub struct Flash(RwSignal<Option<String>>);

impl Flash {
    pub fn new() -> Self {
        Self(create_rw_signal(None))
    }

    pub fn set(&self, message: impl Into<String>) {
        self.0.set(Some(message.into()));
    }

    /// Returns the pending message and clears it.
    pub fn take(&self) -> Option<String> {
        let message = self.0.get_untracked();
        if message.is_some() {
            self.0.set(None);
        }
        message
    }
}

impl Default for Flash {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_flash() -> Flash {
    let flash = Flash::new();
    provide_context(flash);
    flash
}

pub fn use_flash() -> Flash {
    use_context::<Flash>().unwrap_or_else(provide_flash)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn flash_is_read_once() {
        with_runtime(|| {
            let flash = provide_flash();
            flash.set("Solicitud aprobado.");
            assert_eq!(use_flash().take().as_deref(), Some("Solicitud aprobado."));
            assert_eq!(flash.take(), None);
        });
    }
}
