use leptos::*;
use talentrack_core::{AbsenceRequest, AbsenceType, NewAbsenceRequest};

use crate::api::{ApiClient, ApiError};
use crate::pages::absences::{
    repository::AbsencesRepository,
    utils::{AbsenceFormState, MessageState},
};

#[derive(Clone, Debug, PartialEq)]
pub struct SaveRequest {
    /// `None` creates a new request.
    pub id: Option<i64>,
    pub payload: NewAbsenceRequest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveKind {
    Created,
    Updated,
}

impl SaveKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::Created => "Solicitud creada.",
            Self::Updated => "Solicitud actualizada.",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AbsencesViewModel {
    pub form: AbsenceFormState,
    pub form_message: RwSignal<MessageState>,
    pub list_message: RwSignal<MessageState>,
    pub editing: RwSignal<Option<i64>>,
    pub pending_cancel: RwSignal<Option<i64>>,
    pub reload: RwSignal<u32>,
    pub absences_resource: Resource<u32, Result<Vec<AbsenceRequest>, ApiError>>,
    pub types_resource: Resource<(), Result<Vec<AbsenceType>, ApiError>>,
    pub save_action: Action<SaveRequest, Result<SaveKind, ApiError>>,
    pub cancel_action: Action<i64, Result<(), ApiError>>,
}

pub fn apply_save_result(
    result: Option<Result<SaveKind, ApiError>>,
    form: AbsenceFormState,
    form_message: RwSignal<MessageState>,
    editing: RwSignal<Option<i64>>,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(kind) => {
                form_message.update(|msg| msg.set_success(kind.message()));
                editing.set(None);
                form.reset();
                reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => form_message.update(|msg| msg.set_error(err)),
        }
    }
}

pub fn apply_cancel_result(
    result: Option<Result<(), ApiError>>,
    list_message: RwSignal<MessageState>,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(_) => {
                list_message.update(|msg| msg.set_success("Solicitud cancelada."));
                reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => list_message.update(|msg| msg.set_error(err)),
        }
    }
}

impl AbsencesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(AbsencesRepository::new(api));

        let form = AbsenceFormState::default();
        let form_message = create_rw_signal(MessageState::default());
        let list_message = create_rw_signal(MessageState::default());
        let editing = create_rw_signal(None::<i64>);
        let pending_cancel = create_rw_signal(None::<i64>);
        let reload = create_rw_signal(0u32);

        let absences_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.list_mine().await }
            },
        );
        let types_resource = create_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                async move { repo.list_types().await }
            },
        );

        let save_action = create_action(move |request: &SaveRequest| {
            let repo = repository.get_value();
            let request = request.clone();
            async move {
                match request.id {
                    Some(id) => repo
                        .update(id, &request.payload)
                        .await
                        .map(|_| SaveKind::Updated),
                    None => repo
                        .create(&request.payload)
                        .await
                        .map(|_| SaveKind::Created),
                }
            }
        });
        let cancel_action = create_action(move |id: &i64| {
            let repo = repository.get_value();
            let id = *id;
            async move { repo.cancel(id).await }
        });

        create_effect(move |_| {
            apply_save_result(save_action.value().get(), form, form_message, editing, reload);
        });
        create_effect(move |_| {
            apply_cancel_result(cancel_action.value().get(), list_message, reload);
        });

        Self {
            form,
            form_message,
            list_message,
            editing,
            pending_cancel,
            reload,
            absences_resource,
            types_resource,
            save_action,
            cancel_action,
        }
    }

    /// Validates the form and sends it; nothing is sent when validation
    /// fails.
    pub fn submit(&self) {
        match self.form.to_payload() {
            Ok(payload) => {
                self.form_message.update(|msg| msg.clear());
                self.save_action.dispatch(SaveRequest {
                    id: self.editing.get_untracked(),
                    payload,
                });
            }
            Err(err) => self.form_message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn start_edit(&self, request: &AbsenceRequest) {
        self.list_message.update(|msg| msg.clear());
        self.form_message.update(|msg| msg.clear());
        match self.form.load_from_request(request) {
            Ok(()) => self.editing.set(Some(request.id)),
            Err(err) => self.list_message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
        self.form.reset();
        self.form_message.update(|msg| msg.clear());
    }

    pub fn request_cancel(&self, id: i64) {
        self.pending_cancel.set(Some(id));
    }

    pub fn dismiss_cancel(&self) {
        self.pending_cancel.set(None);
    }

    pub fn confirm_cancel(&self) {
        if let Some(id) = self.pending_cancel.get_untracked() {
            self.pending_cancel.set(None);
            if self.editing.get_untracked() == Some(id) {
                self.cancel_edit();
            }
            self.list_message.update(|msg| msg.clear());
            self.cancel_action.dispatch(id);
        }
    }

    pub fn absences(&self) -> Signal<Vec<AbsenceRequest>> {
        let resource = self.absences_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(|result| result.ok())
                .unwrap_or_default()
        })
    }

    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.absences_resource;
        Signal::derive(move || resource.get().and_then(|result| result.err()))
    }

    pub fn absence_types(&self) -> Signal<Vec<AbsenceType>> {
        let resource = self.types_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(|result| result.ok())
                .unwrap_or_default()
        })
    }
}

impl Default for AbsencesViewModel {
    fn default() -> Self {
        Self::new()
    }
}
