use leptos::*;
use talentrack_core::{
    format::{format_iso_date, format_timestamp, MISSING},
    ApprovalRecord,
};

use crate::components::{empty_state::EmptyState, status_badge::StatusBadge};

#[component]
pub fn DecisionHistory(#[prop(into)] records: Signal<Vec<ApprovalRecord>>) -> impl IntoView {
    view! {
        <Show
            when=move || !records.get().is_empty()
            fallback=|| view! { <EmptyState title="Sin decisiones registradas"/> }
        >
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Colaborador"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Tipo"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Desde"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Hasta"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Acción"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Comentario"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Fecha"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || records.get()
                            key=|record| record.id
                            children=move |record| {
                                let until = record
                                    .fecha_fin
                                    .as_deref()
                                    .or(record.fecha_inicio.as_deref());
                                let label = record.action_label();
                                view! {
                                    <tr>
                                        <td class="px-4 py-2 text-sm">{record.employee_name()}</td>
                                        <td class="px-4 py-2 text-sm">{record.tipo_ausencia.clone().unwrap_or_else(|| MISSING.to_string())}</td>
                                        <td class="px-4 py-2 text-sm">{format_iso_date(record.fecha_inicio.as_deref())}</td>
                                        <td class="px-4 py-2 text-sm">{format_iso_date(until)}</td>
                                        <td class="px-4 py-2 text-sm"><StatusBadge label=label/></td>
                                        <td class="px-4 py-2 text-sm">{record.comentario.clone().unwrap_or_default()}</td>
                                        <td class="px-4 py-2 text-sm">{format_timestamp(record.fecha.as_deref())}</td>
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
