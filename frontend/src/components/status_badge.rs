use leptos::*;

fn badge_class(label: &str) -> &'static str {
    match label.trim().to_lowercase().as_str() {
        "pendiente" => "bg-status-warning-bg text-status-warning-text",
        "aprobado" | "aprobada" => "bg-status-success-bg text-status-success-text",
        "rechazado" | "rechazada" => "bg-status-error-bg text-status-error-text",
        _ => "bg-surface-muted text-fg-muted",
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] label: String) -> impl IntoView {
    let class = format!(
        "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {}",
        badge_class(&label)
    );
    view! { <span class=class>{label}</span> }
}
