use leptos::*;
use talentrack_core::DecisionAction;

use crate::api::ApiError;
use crate::components::error::InlineErrorMessage;

/// Modal shown while `action` is set; the comment is optional unless the
/// role requires one for rejections.
#[component]
pub fn DecisionModal(
    action: RwSignal<Option<DecisionAction>>,
    comment: RwSignal<String>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    comment_required: bool,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let placeholder = if comment_required {
        "Comentario (obligatorio para rechazar)"
    } else {
        "Comentario (opcional)"
    };
    view! {
        <Show when=move || action.get().is_some()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <div
                    class="fixed inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></div>
                <div
                    class="relative bg-surface-elevated rounded-lg shadow-xl w-full max-w-md p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                >
                    <h3 class="text-lg font-semibold text-fg">
                        {move || action.get().map(DecisionAction::title).unwrap_or_default()}
                    </h3>
                    <InlineErrorMessage error=error/>
                    <textarea
                        rows=3
                        class="w-full border rounded px-2 py-1"
                        placeholder=placeholder
                        prop:value=move || comment.get()
                        on:input=move |ev| comment.set(event_target_value(&ev))
                    ></textarea>
                    <div class="flex justify-end gap-3">
                        <button
                            class="px-4 py-2 rounded bg-surface-muted text-fg"
                            on:click=move |_| on_close.call(())
                        >
                            "Cancelar"
                        </button>
                        <button
                            class=move || {
                                if action.get() == Some(DecisionAction::Reject) {
                                    "px-4 py-2 rounded bg-action-danger-bg text-action-danger-text disabled:opacity-50"
                                } else {
                                    "px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                                }
                            }
                            disabled=move || pending.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || {
                                if pending.get() {
                                    "Enviando...".to_string()
                                } else {
                                    action
                                        .get()
                                        .map(|a| a.confirm_label().to_string())
                                        .unwrap_or_default()
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn modal_uses_action_wording() {
        let html = render_to_string(|| {
            let action = create_rw_signal(Some(DecisionAction::Reject));
            let comment = create_rw_signal(String::new());
            view! {
                <DecisionModal
                    action=action
                    comment=comment
                    error=Signal::derive(|| None)
                    pending=Signal::derive(|| false)
                    comment_required=true
                    on_confirm=Callback::new(|_| ())
                    on_close=Callback::new(|_| ())
                />
            }
        });
        assert!(html.contains("Rechazar Solicitud"));
        assert!(html.contains("Confirmar Rechazo"));
        assert!(html.contains("obligatorio para rechazar"));
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let html = render_to_string(|| {
            view! {
                <DecisionModal
                    action=create_rw_signal(None)
                    comment=create_rw_signal(String::new())
                    error=Signal::derive(|| None)
                    pending=Signal::derive(|| false)
                    comment_required=false
                    on_confirm=Callback::new(|_| ())
                    on_close=Callback::new(|_| ())
                />
            }
        });
        assert!(!html.contains("role=\"dialog\""));
    }
}
