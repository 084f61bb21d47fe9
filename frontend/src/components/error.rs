use crate::api::ApiError;
use leptos::*;

pub const SESSION_EXPIRED_HINT: &str = "Tu sesión expiró. Vuelve a iniciar sesión.";

/// Shows an [`ApiError`] message exactly as received, plus the error code
/// for anything that is not a plain validation failure.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div role="alert" class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().filter(ApiError::is_unauthorized).map(|_| view! {
                    <div class="text-sm">{SESSION_EXPIRED_HINT}</div>
                })}
                {move || error.get().map(|e| {
                    if e.code == "VALIDATION_ERROR" || e.code == "UNKNOWN" || e.code.is_empty() {
                        ().into_view()
                    } else {
                        view! { <div class="text-xs opacity-75">{"Código: "}{e.code}</div> }.into_view()
                    }
                })}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn inline_error_renders_detail_and_code() {
        let html = render_to_string(move || {
            let error = ApiError::from_response(409, r#"{"detail":"Ya fue decidida."}"#);
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error=signal/> }
        });
        assert!(html.contains("Ya fue decidida."));
        assert!(html.contains("CONFLICT"));
    }

    #[test]
    fn unauthorized_errors_add_session_hint() {
        let html = render_to_string(move || {
            let error = ApiError::from_response(401, r#"{"detail":"Token expirado."}"#);
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error=signal/> }
        });
        assert!(html.contains("Token expirado."));
        assert!(html.contains(SESSION_EXPIRED_HINT));
    }

    #[test]
    fn other_errors_have_no_session_hint() {
        let html = render_to_string(move || {
            let error = ApiError::from_response(403, r#"{"detail":"Sin permiso."}"#);
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error=signal/> }
        });
        assert!(!html.contains(SESSION_EXPIRED_HINT));
    }

    #[test]
    fn validation_errors_hide_code() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::validation("Motivo es obligatorio.")));
            view! { <InlineErrorMessage error=signal/> }
        });
        assert!(html.contains("Motivo es obligatorio."));
        assert!(!html.contains("VALIDATION_ERROR"));
    }

    #[test]
    fn nothing_rendered_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error=signal/> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
