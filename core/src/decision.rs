use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What a reviewer decides about a pending absence request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisionAction {
    Approve,
    Reject,
}

impl DecisionAction {
    pub fn title(self) -> &'static str {
        match self {
            Self::Approve => "Aprobar Solicitud",
            Self::Reject => "Rechazar Solicitud",
        }
    }

    pub fn confirm_label(self) -> &'static str {
        match self {
            Self::Approve => "Confirmar Aprobación",
            Self::Reject => "Confirmar Rechazo",
        }
    }

    pub fn encode(self, encoding: ActionEncoding) -> WireAction {
        match (encoding, self) {
            (ActionEncoding::Numeric, Self::Approve) => WireAction::Code(1),
            (ActionEncoding::Numeric, Self::Reject) => WireAction::Code(2),
            (ActionEncoding::Verb, Self::Approve) => WireAction::Verb("aprobar".into()),
            (ActionEncoding::Verb, Self::Reject) => WireAction::Verb("rechazar".into()),
        }
    }
}

/// How an endpoint expects `accion` to be spelled.
///
/// The manager endpoint only accepts `1|2`; the HR endpoint takes the verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEncoding {
    Numeric,
    Verb,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireAction {
    Code(u8),
    Verb(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewerRole {
    Manager,
    HumanResources,
    Auditor,
}

impl ReviewerRole {
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::HumanResources => "rrhh",
            Self::Auditor => "auditor",
        }
    }

    pub fn action_encoding(self) -> Option<ActionEncoding> {
        match self {
            Self::Manager => Some(ActionEncoding::Numeric),
            Self::HumanResources => Some(ActionEncoding::Verb),
            Self::Auditor => None,
        }
    }

    pub fn can_decide(self) -> bool {
        self.action_encoding().is_some()
    }

    pub fn requires_reject_comment(self) -> bool {
        matches!(self, Self::Manager)
    }

    /// Client route of the pending-requests queue for this role.
    pub fn queue_route(self) -> String {
        format!("/{}/ausencias/solicitudes", self.path_segment())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("Este rol no puede decidir solicitudes.")]
    NotAllowed,
    #[error("El comentario es obligatorio para rechazar.")]
    CommentRequired,
}

/// A reviewer's decision, sent once and never stored on the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub action: DecisionAction,
    pub comment: Option<String>,
}

impl Decision {
    /// A withheld or blank comment is sent as `null`, never as `""`.
    pub fn new(action: DecisionAction, comment: Option<&str>) -> Self {
        let comment = comment
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        Self { action, comment }
    }

    pub fn validate_for(&self, role: ReviewerRole) -> Result<(), DecisionError> {
        if !role.can_decide() {
            return Err(DecisionError::NotAllowed);
        }
        if self.action == DecisionAction::Reject
            && role.requires_reject_comment()
            && self.comment.is_none()
        {
            return Err(DecisionError::CommentRequired);
        }
        Ok(())
    }

    pub fn to_body(&self, encoding: ActionEncoding) -> DecisionBody {
        DecisionBody {
            accion: self.action.encode(encoding),
            comentario: self.comment.clone(),
        }
    }
}

/// Body of `PATCH .../solicitudes/{id}/decidir/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionBody {
    pub accion: WireAction,
    pub comentario: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResponse {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub solicitud_id: Option<i64>,
    #[serde(default)]
    pub estado: Option<i16>,
    #[serde(default)]
    pub estado_label: Option<String>,
}

/// What the reviewer sees after the server accepted a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionOutcome {
    pub request_id: i64,
    pub status_label: Option<String>,
}

impl DecisionOutcome {
    pub fn from_response(request_id: i64, response: &DecisionResponse) -> Self {
        Self {
            request_id,
            status_label: response
                .estado_label
                .as_ref()
                .map(|label| label.trim().to_string())
                .filter(|label| !label.is_empty()),
        }
    }

    pub fn message(&self) -> String {
        format!(
            "Solicitud {}.",
            self.status_label.as_deref().unwrap_or("actualizada")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_or_withheld_comment_is_null() {
        assert_eq!(Decision::new(DecisionAction::Approve, None).comment, None);
        assert_eq!(
            Decision::new(DecisionAction::Approve, Some("   ")).comment,
            None
        );
        assert_eq!(
            Decision::new(DecisionAction::Reject, Some("  cruza con cierre ")).comment,
            Some("cruza con cierre".to_string())
        );
    }

    #[test]
    fn manager_body_uses_numeric_codes() {
        let body = Decision::new(DecisionAction::Approve, None).to_body(ActionEncoding::Numeric);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "accion": 1, "comentario": null })
        );
        let body = Decision::new(DecisionAction::Reject, Some("no"))
            .to_body(ActionEncoding::Numeric);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "accion": 2, "comentario": "no" })
        );
    }

    #[test]
    fn hr_body_uses_verbs() {
        let body = Decision::new(DecisionAction::Reject, None).to_body(ActionEncoding::Verb);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "accion": "rechazar", "comentario": null })
        );
    }

    #[test]
    fn role_rules() {
        let reject = Decision::new(DecisionAction::Reject, None);
        assert_eq!(
            reject.validate_for(ReviewerRole::Manager),
            Err(DecisionError::CommentRequired)
        );
        assert_eq!(reject.validate_for(ReviewerRole::HumanResources), Ok(()));
        assert_eq!(
            reject.validate_for(ReviewerRole::Auditor),
            Err(DecisionError::NotAllowed)
        );
        assert_eq!(
            Decision::new(DecisionAction::Approve, None).validate_for(ReviewerRole::Manager),
            Ok(())
        );
        assert_eq!(
            ReviewerRole::HumanResources.queue_route(),
            "/rrhh/ausencias/solicitudes"
        );
    }

    #[test]
    fn outcome_message_uses_server_label() {
        let response: DecisionResponse = serde_json::from_value(json!({
            "ok": true,
            "solicitud_id": 7,
            "estado": 2,
            "estado_label": "aprobado"
        }))
        .unwrap();
        let outcome = DecisionOutcome::from_response(7, &response);
        assert_eq!(outcome.message(), "Solicitud aprobado.");

        let outcome = DecisionOutcome::from_response(7, &DecisionResponse::default());
        assert_eq!(outcome.message(), "Solicitud actualizada.");
    }
}
