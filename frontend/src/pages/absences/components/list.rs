use leptos::*;
use talentrack_core::{
    format::{format_date, format_iso_date, MISSING},
    AbsenceRequest,
};

use crate::components::{empty_state::EmptyState, status_badge::StatusBadge};

#[component]
pub fn AbsenceList(
    #[prop(into)] absences: Signal<Vec<AbsenceRequest>>,
    on_edit: Callback<AbsenceRequest>,
    on_cancel: Callback<i64>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !absences.get().is_empty()
            fallback=|| view! {
                <EmptyState
                    title="Sin solicitudes"
                    description="Todavía no registras solicitudes de ausencia."
                />
            }
        >
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Tipo"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Desde"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Hasta"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Días"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Estado"</th>
                            <th class="px-4 py-2"></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || absences.get()
                            key=|request| (request.id, request.estado.map(|s| s.code()))
                            children=move |request| {
                                let pending = request.is_pending();
                                let id = request.id;
                                let days = request
                                    .dias_habiles
                                    .map(|d| d.to_string())
                                    .unwrap_or_else(|| MISSING.to_string());
                                let row = store_value(request.clone());
                                view! {
                                    <tr>
                                        <td class="px-4 py-2 text-sm">{request.type_label()}</td>
                                        <td class="px-4 py-2 text-sm">{format_iso_date(request.fecha_inicio.as_deref())}</td>
                                        <td class="px-4 py-2 text-sm">{format_date(request.end_date())}</td>
                                        <td class="px-4 py-2 text-sm">{days}</td>
                                        <td class="px-4 py-2 text-sm"><StatusBadge label=request.status_label()/></td>
                                        <td class="px-4 py-2 text-right text-sm space-x-3">
                                            <Show when=move || pending>
                                                <button
                                                    class="text-action-primary-bg"
                                                    on:click=move |_| on_edit.call(row.get_value())
                                                >
                                                    "Editar"
                                                </button>
                                                <button
                                                    class="text-action-danger-bg"
                                                    on:click=move |_| on_cancel.call(id)
                                                >
                                                    "Cancelar"
                                                </button>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
