use leptos::*;
use talentrack_core::DateRange;

pub const RANGE_UNAVAILABLE: &str = "No se pudo calcular el rango de fechas.";

/// Day-by-day table of an absence. An empty range renders a notice
/// instead of an empty table.
#[component]
pub fn DayBreakdown(range: DateRange) -> impl IntoView {
    if range.is_empty() {
        return view! {
            <div class="p-6 text-center text-fg-muted">{RANGE_UNAVAILABLE}</div>
        }
        .into_view();
    }
    view! {
        <div class="overflow-x-auto rounded border border-border">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Fecha"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Día Semana"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted">"Estado"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {range
                        .iter()
                        .map(|day| view! {
                            <tr data-day=day.iso()>
                                <td class="px-4 py-2 text-sm">{day.display()}</td>
                                <td class="px-4 py-2 text-sm capitalize">{day.weekday_name()}</td>
                                <td class="px-4 py-2 text-sm text-fg-muted">"Ausente"</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_one_row_per_day() {
        let html = render_to_string(|| {
            view! { <DayBreakdown range=DateRange::from_iso("2025-03-10", "2025-03-12")/> }
        });
        assert_eq!(html.matches("Ausente").count(), 3);
        assert!(html.contains("10&#x2F;3&#x2F;2025"));
        assert!(html.contains("miércoles"));
        assert!(!html.contains(RANGE_UNAVAILABLE));
    }

    #[test]
    fn reversed_range_shows_notice() {
        let html = render_to_string(|| {
            view! { <DayBreakdown range=DateRange::from_iso("2025-03-12", "2025-03-10")/> }
        });
        assert!(html.contains(RANGE_UNAVAILABLE));
        assert!(!html.contains("Ausente"));
    }
}
