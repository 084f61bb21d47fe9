use leptos::*;
use talentrack_core::AbsenceType;

use crate::components::{
    error::InlineErrorMessage,
    layout::SuccessMessage,
};
use crate::pages::absences::utils::{AbsenceFormState, MessageState};

#[component]
pub fn AbsenceForm(
    state: AbsenceFormState,
    message: RwSignal<MessageState>,
    #[prop(into)] types: Signal<Vec<AbsenceType>>,
    #[prop(into)] editing: Signal<Option<i64>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel_edit: Callback<()>,
) -> impl IntoView {
    let type_signal = state.type_signal();
    let start_signal = state.start_signal();
    let end_signal = state.end_signal();
    let reason_signal = state.reason_signal();
    let error = Signal::derive(move || message.get().error);
    let min_end = move || start_signal.get();

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-fg">
                {move || if editing.get().is_some() {
                    "Editar Solicitud de Ausencia"
                } else {
                    "Nueva Solicitud de Ausencia"
                }}
            </h3>
            <InlineErrorMessage error=error/>
            <Show when=move || message.get().success.is_some()>
                <SuccessMessage message=message.get().success.unwrap_or_default()/>
            </Show>
            <form
                class="space-y-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <div>
                    <label class="block text-sm font-medium text-fg-muted">"Tipo de ausencia"</label>
                    <select
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || type_signal.get()
                        on:change=move |ev| type_signal.set(event_target_value(&ev))
                    >
                        <option value="">"Selecciona..."</option>
                        <For
                            each=move || types.get()
                            key=|t| t.id
                            children=move |t| {
                                let value = t.id.to_string();
                                view! { <option value=value>{t.nombre}</option> }
                            }
                        />
                    </select>
                </div>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <label class="block text-sm font-medium text-fg-muted">"Fecha inicio"</label>
                        <input
                            type="date"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || start_signal.get()
                            on:input=move |ev| state.set_start(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted">"Fecha fin (opcional)"</label>
                        <input
                            type="date"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            min=min_end
                            prop:value=move || end_signal.get()
                            on:input=move |ev| end_signal.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <p class="text-sm text-fg-muted" data-testid="day-preview">{move || state.preview()}</p>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">"Motivo"</label>
                    <textarea
                        rows=3
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || reason_signal.get()
                        on:input=move |ev| reason_signal.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="flex gap-2">
                    <button
                        type="submit"
                        class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Guardando..." } else { "Guardar" }}
                    </button>
                    <Show when=move || editing.get().is_some()>
                        <button
                            type="button"
                            class="px-4 py-2 rounded bg-surface-muted text-fg"
                            on:click=move |_| on_cancel_edit.call(())
                        >
                            "Cancelar edición"
                        </button>
                    </Show>
                </div>
            </form>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_renders_preview_and_types() {
        let html = render_to_string(|| {
            let state = AbsenceFormState::default();
            state.set_start("2025-03-10".into());
            state.end_signal().set("2025-03-11".into());
            let message = create_rw_signal(MessageState::default());
            let types = vec![AbsenceType {
                id: 3,
                nombre: "Vacaciones".into(),
                afecta_sueldo: None,
                requiere_soporte: None,
            }];
            view! {
                <AbsenceForm
                    state=state
                    message=message
                    types=Signal::derive(move || types.clone())
                    editing=Signal::derive(|| None)
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| ())
                    on_cancel_edit=Callback::new(|_| ())
                />
            }
        });
        assert!(html.contains("2 día(s) solicitados"));
        assert!(html.contains("Vacaciones"));
        assert!(html.contains("Nueva Solicitud de Ausencia"));
    }
}
