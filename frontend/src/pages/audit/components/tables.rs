use leptos::*;
use talentrack_core::{
    format::{format_date, format_iso_date, format_timestamp, MISSING},
    render_amount, AbsenceRequest, VacationBalance,
};

use crate::components::{empty_state::EmptyState, status_badge::StatusBadge};

#[component]
pub fn AuditRequestsTable(#[prop(into)] requests: Signal<Vec<AbsenceRequest>>) -> impl IntoView {
    view! {
        <Show
            when=move || !requests.get().is_empty()
            fallback=|| view! { <EmptyState title="Sin solicitudes registradas"/> }
        >
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Colaborador"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Tipo"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Desde"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Hasta"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Estado"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Creada"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || requests.get()
                            key=|request| request.id
                            children=move |request| {
                                view! {
                                    <tr>
                                        <td class="px-4 py-2 text-sm">{request.employee_name()}</td>
                                        <td class="px-4 py-2 text-sm">{request.type_label()}</td>
                                        <td class="px-4 py-2 text-sm">{format_iso_date(request.fecha_inicio.as_deref())}</td>
                                        <td class="px-4 py-2 text-sm">{format_date(request.end_date())}</td>
                                        <td class="px-4 py-2 text-sm"><StatusBadge label=request.status_label()/></td>
                                        <td class="px-4 py-2 text-sm">{format_timestamp(request.creada_el.as_deref())}</td>
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

#[component]
pub fn VacationBalancesTable(
    #[prop(into)] balances: Signal<Vec<VacationBalance>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !balances.get().is_empty()
            fallback=|| view! { <EmptyState title="Sin saldos de vacaciones"/> }
        >
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Colaborador"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Periodo"</th>
                            <th class="px-4 py-2 text-right text-xs font-medium text-fg-muted">"Asignados"</th>
                            <th class="px-4 py-2 text-right text-xs font-medium text-fg-muted">"Tomados"</th>
                            <th class="px-4 py-2 text-right text-xs font-medium text-fg-muted">"Disponibles"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || balances.get()
                            key=|balance| balance.id
                            children=move |balance| view! {
                                <tr>
                                    <td class="px-4 py-2 text-sm">{balance.employee_name()}</td>
                                    <td class="px-4 py-2 text-sm">{balance.periodo.clone().unwrap_or_else(|| MISSING.to_string())}</td>
                                    <td class="px-4 py-2 text-sm text-right">{render_amount(balance.dias_asignados.as_ref())}</td>
                                    <td class="px-4 py-2 text-sm text-right">{render_amount(balance.dias_tomados.as_ref())}</td>
                                    <td class="px-4 py-2 text-sm text-right">{render_amount(balance.dias_disponibles.as_ref())}</td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn balances_render_string_and_numeric_amounts() {
        let html = render_to_string(|| {
            let rows: Vec<VacationBalance> = serde_json::from_value(json!([{
                "id": 1,
                "nombres": "Ana",
                "periodo": "2025",
                "dias_asignados": "15.00",
                "dias_tomados": 3,
                "dias_disponibles": null
            }]))
            .unwrap();
            view! { <VacationBalancesTable balances=Signal::derive(move || rows.clone())/> }
        });
        assert!(html.contains("15.00"));
        assert!(html.contains(">3<"));
        assert!(html.contains("N&#x2F;A"));
    }

    #[test]
    fn requests_table_shows_status_labels() {
        let html = render_to_string(|| {
            let rows: Vec<AbsenceRequest> = serde_json::from_value(json!([
                { "id": 1, "nombres": "Ana", "fecha_inicio": "2025-01-06", "estado": 4 }
            ]))
            .unwrap();
            view! { <AuditRequestsTable requests=Signal::derive(move || rows.clone())/> }
        });
        assert!(html.contains("cancelado"));
        assert!(html.contains("6&#x2F;1&#x2F;2025"));
    }
}
