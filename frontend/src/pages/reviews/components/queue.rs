use leptos::*;
use talentrack_core::{
    format::{format_date, format_iso_date},
    AbsenceRequest, ReviewerRole,
};

use crate::components::{empty_state::EmptyState, status_badge::StatusBadge};

fn detail_href(role: ReviewerRole, id: i64) -> String {
    format!("{}/{}", role.queue_route(), id)
}

#[component]
pub fn ReviewQueue(
    role: ReviewerRole,
    #[prop(into)] requests: Signal<Vec<AbsenceRequest>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !requests.get().is_empty()
            fallback=|| view! {
                <EmptyState
                    title="Sin solicitudes pendientes"
                    description="No hay solicitudes de ausencia esperando tu revisión."
                />
            }
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
                            <th class="px-4 py-2"></th>
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
                                        <td class="px-4 py-2 text-right text-sm">
                                            <a class="text-action-primary-bg" href=detail_href(role, request.id)>
                                                "Revisar"
                                            </a>
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn rows_link_to_role_detail() {
        let html = render_to_string(|| {
            let rows: Vec<AbsenceRequest> = serde_json::from_value(json!([
                { "id": 5, "nombres": "Ana", "apellidos": "Pérez", "fecha_inicio": "2025-03-10", "estado": 1 }
            ]))
            .unwrap();
            view! {
                <ReviewQueue
                    role=ReviewerRole::HumanResources
                    requests=Signal::derive(move || rows.clone())
                />
            }
        });
        assert!(html.contains("/rrhh/ausencias/solicitudes/5"));
        assert!(html.contains("Ana Pérez"));
    }
}
