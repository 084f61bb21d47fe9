use leptos::*;
use talentrack_core::{
    format::{format_date, format_iso_date, MISSING},
    AbsenceRequest,
};

use crate::components::{calendar::DayBreakdown, status_badge::StatusBadge};

const NO_REASON: &str = "Sin motivo especificado";

fn or_missing(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(MISSING)
        .to_string()
}

#[component]
fn Field(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <div>
            <dt class="text-xs font-medium uppercase text-fg-muted">{label}</dt>
            <dd class="mt-1 text-sm text-fg">{children()}</dd>
        </div>
    }
}

#[component]
pub fn EmployeeBlock(request: AbsenceRequest) -> impl IntoView {
    let name = request.employee_name();
    let name = if name.is_empty() { MISSING.to_string() } else { name };
    let email = or_missing(request.email.as_deref());
    let department = or_missing(request.unidad_organizacional.as_deref());
    let position = or_missing(request.puesto.as_deref());
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6">
            <h3 class="text-lg font-medium text-fg mb-4">"Datos del Colaborador"</h3>
            <dl class="grid grid-cols-1 gap-4 md:grid-cols-2">
                <Field label="Nombre Completo">{name}</Field>
                <Field label="Email Corporativo">{email}</Field>
                <Field label="Departamento">{department}</Field>
                <Field label="Puesto Actual">{position}</Field>
            </dl>
        </section>
    }
}

#[component]
pub fn AbsenceBlock(request: AbsenceRequest) -> impl IntoView {
    let from = format_iso_date(request.fecha_inicio.as_deref());
    let until = format_date(request.end_date());
    let type_label = request.type_label();
    let status_label = request.status_label();
    let reason = request
        .motivo
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(NO_REASON)
        .to_string();
    let days = request
        .dias_habiles
        .map(|d| d.to_string())
        .unwrap_or_else(|| MISSING.to_string());
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6">
            <h3 class="text-lg font-medium text-fg mb-4">"Información de Ausencia"</h3>
            <dl class="grid grid-cols-1 gap-4 md:grid-cols-3">
                <Field label="Tipo">{type_label}</Field>
                <Field label="Estado Actual"><StatusBadge label=status_label/></Field>
                <Field label="Días Hábiles">{days}</Field>
                <Field label="Desde">{from}</Field>
                <Field label="Hasta">{until}</Field>
                <Field label="Motivo Declarado">{reason}</Field>
            </dl>
        </section>
    }
}

#[component]
pub fn RequestDetail(request: AbsenceRequest) -> impl IntoView {
    let range = request.calendar();
    view! {
        <div class="space-y-6">
            <EmployeeBlock request=request.clone()/>
            <AbsenceBlock request=request/>
            <section class="bg-surface-elevated shadow rounded-lg p-6">
                <h3 class="text-lg font-medium text-fg mb-4">"Desglose de Días"</h3>
                <DayBreakdown range=range/>
            </section>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::components::calendar::RANGE_UNAVAILABLE;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn detail_lists_employee_absence_and_days() {
        let request: AbsenceRequest = serde_json::from_value(json!({
            "id": 12,
            "nombres": "Ana",
            "apellidos": "Pérez",
            "email": "ana@example.com",
            "unidad": "Finanzas",
            "tipo_ausencia": "Vacaciones",
            "fecha_inicio": "2025-03-10",
            "fecha_fin": "2025-03-12",
            "dias_habiles": 3,
            "estado": 1
        }))
        .unwrap();
        let html = render_to_string(move || view! { <RequestDetail request=request/> });
        assert!(html.contains("Ana Pérez"));
        assert!(html.contains("Finanzas"));
        assert!(html.contains(NO_REASON));
        assert_eq!(html.matches("Ausente").count(), 3);
        assert!(html.contains("12&#x2F;3&#x2F;2025"));
        assert!(html.contains("data-day=\"2025-03-11\""));
    }

    #[test]
    fn unparsable_dates_show_range_notice() {
        let request: AbsenceRequest = serde_json::from_value(json!({
            "id": 1,
            "fecha_inicio": "no-es-fecha",
            "motivo": "Trámite"
        }))
        .unwrap();
        let html = render_to_string(move || view! { <RequestDetail request=request/> });
        assert!(html.contains(RANGE_UNAVAILABLE));
        assert!(html.contains("Trámite"));
    }
}
