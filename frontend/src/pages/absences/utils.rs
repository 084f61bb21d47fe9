use leptos::*;
use talentrack_core::{AbsenceDraft, AbsenceRequest, NewAbsenceRequest};

use crate::api::ApiError;

pub const EDIT_ONLY_PENDING: &str = "Solo puedes editar solicitudes en estado pendiente.";
const PREVIEW_INCOMPLETE: &str = "Completa fechas para calcular";

/// Live preview under the date inputs.
pub fn preview_label(days: u32) -> String {
    if days == 0 {
        PREVIEW_INCOMPLETE.to_string()
    } else {
        format!("{} día(s) solicitados", days)
    }
}

/// Reactive fields of the create/edit form, snapshotted into an
/// [`AbsenceDraft`] for every derived value.
#[derive(Clone, Copy)]
pub struct AbsenceFormState {
    absence_type_id: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for AbsenceFormState {
    fn default() -> Self {
        Self {
            absence_type_id: create_rw_signal(String::new()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl AbsenceFormState {
    pub fn type_signal(&self) -> RwSignal<String> {
        self.absence_type_id
    }

    pub fn start_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn draft(&self) -> AbsenceDraft {
        AbsenceDraft {
            absence_type_id: self.absence_type_id.get(),
            start_date: self.start_date.get(),
            end_date: self.end_date.get(),
            reason: self.reason.get(),
        }
    }

    /// Updates the start date and drops an end date that now precedes it.
    pub fn set_start(&self, value: String) {
        let mut draft = self.draft_untracked();
        draft.on_start_changed(value);
        self.start_date.set(draft.start_date);
        if draft.end_date != self.end_date.get_untracked() {
            self.end_date.set(draft.end_date);
        }
    }

    pub fn preview(&self) -> String {
        preview_label(self.draft().preview_days())
    }

    pub fn reset(&self) {
        self.absence_type_id.set(String::new());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.reason.set(String::new());
    }

    /// Loads an existing request for editing. Non-pending requests are
    /// refused and leave the form untouched.
    pub fn load_from_request(&self, request: &AbsenceRequest) -> Result<(), ApiError> {
        if !request.is_pending() {
            return Err(ApiError::validation(EDIT_ONLY_PENDING));
        }
        self.absence_type_id.set(
            request
                .type_id()
                .map(|id| id.to_string())
                .unwrap_or_default(),
        );
        self.start_date
            .set(request.fecha_inicio.clone().unwrap_or_default());
        self.end_date.set(request.fecha_fin.clone().unwrap_or_default());
        self.reason.set(request.motivo.clone().unwrap_or_default());
        Ok(())
    }

    pub fn to_payload(&self) -> Result<NewAbsenceRequest, ApiError> {
        self.draft_untracked().validate().map_err(ApiError::from)
    }

    fn draft_untracked(&self) -> AbsenceDraft {
        AbsenceDraft {
            absence_type_id: self.absence_type_id.get_untracked(),
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
            reason: self.reason.get_untracked(),
        }
    }
}

#[derive(Clone, Default)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use serde_json::json;

    fn request(estado: i16) -> AbsenceRequest {
        serde_json::from_value(json!({
            "id": 7,
            "tipo_ausencia": 2,
            "tipo_ausencia_nombre": "Permiso",
            "fecha_inicio": "2025-03-10",
            "fecha_fin": null,
            "motivo": "Trámite",
            "estado": estado
        }))
        .unwrap()
    }

    #[test]
    fn preview_follows_dates() {
        with_runtime(|| {
            let form = AbsenceFormState::default();
            assert_eq!(form.preview(), "Completa fechas para calcular");
            form.set_start("2025-03-10".into());
            assert_eq!(form.preview(), "1 día(s) solicitados");
            form.end_signal().set("2025-03-14".into());
            assert_eq!(form.preview(), "5 día(s) solicitados");
            form.end_signal().set("2025-03-01".into());
            assert_eq!(form.preview(), "Completa fechas para calcular");
        });
    }

    #[test]
    fn moving_start_clears_earlier_end() {
        with_runtime(|| {
            let form = AbsenceFormState::default();
            form.set_start("2025-03-10".into());
            form.end_signal().set("2025-03-12".into());
            form.set_start("2025-03-20".into());
            assert_eq!(form.end_signal().get(), "");
        });
    }

    #[test]
    fn editing_requires_pending_status() {
        with_runtime(|| {
            let form = AbsenceFormState::default();
            let err = form.load_from_request(&request(2)).unwrap_err();
            assert_eq!(err.error, EDIT_ONLY_PENDING);
            assert_eq!(form.reason_signal().get(), "");

            form.load_from_request(&request(1)).unwrap();
            assert_eq!(form.type_signal().get(), "2");
            assert_eq!(form.start_signal().get(), "2025-03-10");
            assert_eq!(form.end_signal().get(), "");
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.motivo, "Trámite");
            assert!(payload.fecha_fin.is_none());
        });
    }

    #[test]
    fn validation_errors_surface_as_api_errors() {
        with_runtime(|| {
            let form = AbsenceFormState::default();
            let err = form.to_payload().unwrap_err();
            assert_eq!(err.code, "VALIDATION_ERROR");
            assert_eq!(err.error, "Selecciona un tipo de ausencia.");
        });
    }
}
