use leptos::*;

use crate::components::{
    confirm_dialog::ConfirmDialog,
    error::InlineErrorMessage,
    layout::{LoadingSpinner, SuccessMessage},
};
use crate::pages::absences::{
    components::{form::AbsenceForm, list::AbsenceList},
    layout::AbsencesLayout,
    view_model::AbsencesViewModel,
};

#[component]
pub fn AbsencesPage() -> impl IntoView {
    let vm = AbsencesViewModel::new();
    let loading = vm.absences_resource.loading();
    let load_error = vm.load_error();
    let list_error = Signal::derive(move || {
        vm.list_message
            .get()
            .error
            .or_else(|| load_error.get())
    });
    let list_success = move || vm.list_message.get().success;
    let saving = vm.save_action.pending();
    let confirm_open = Signal::derive(move || vm.pending_cancel.get().is_some());

    view! {
        <AbsencesLayout>
            <AbsenceForm
                state=vm.form
                message=vm.form_message
                types=vm.absence_types()
                editing=vm.editing
                pending=saving
                on_submit=Callback::new(move |_| vm.submit())
                on_cancel_edit=Callback::new(move |_| vm.cancel_edit())
            />
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <h3 class="text-lg font-medium text-fg">"Historial de Solicitudes"</h3>
                <InlineErrorMessage error=list_error/>
                <Show when=move || list_success().is_some()>
                    <SuccessMessage message=list_success().unwrap_or_default()/>
                </Show>
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                    <AbsenceList
                        absences=vm.absences()
                        on_edit=Callback::new(move |request| vm.start_edit(&request))
                        on_cancel=Callback::new(move |id| vm.request_cancel(id))
                    />
                </Show>
            </div>
            <ConfirmDialog
                is_open=confirm_open
                title="¿Cancelar solicitud?".to_string()
                message="La solicitud dejará de estar pendiente de aprobación.".to_string()
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_cancel())
                on_cancel=Callback::new(move |_| vm.dismiss_cancel())
            />
        </AbsencesLayout>
    }
}
