//! Contact / signup form and the form-relay client.
//!
//! The form posts a fixed field set to a third-party relay endpoint as a
//! form-encoded HTTP POST and expects a JSON body with a `success` boolean.
//! Submission runs as a blocking request on the IO task pool; a poll system
//! drains the task and surfaces the outcome as a toast. Failure is
//! non-fatal: the form stays editable and resubmittable, nothing retries
//! automatically.

use std::fmt;

use bevy::prelude::*;
use serde::Deserialize;

use crate::config;
use crate::toasts::ToastEvent;

// =============================================================================
// Form state
// =============================================================================

/// Editable contact form fields plus the in-flight flag.
#[derive(Resource, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub linkedin: String,
    pub role: String,
    pub message: String,
    /// True while a submission task is in flight. Gates the submit button
    /// only; the fields themselves stay editable.
    pub sending: bool,
}

/// Validation failures surfaced to the user before anything is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingName,
    InvalidEmail,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingName => write!(f, "Please tell us your name"),
            FormError::InvalidEmail => write!(f, "That email address doesn't look right"),
        }
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        let email = self.email.trim();
        let domain_ok = email
            .rsplit_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !domain_ok {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.linkedin.clear();
        self.role.clear();
        self.message.clear();
    }

    /// The exact field set sent to the relay: the static access key, the
    /// configured subject and sender name, the individual fields, and a
    /// composed message folding role and LinkedIn into the body.
    pub fn relay_fields(&self, relay: &RelayConfig) -> Vec<(String, String)> {
        let composed = format!(
            "Role: {}\nLinkedIn: {}\n\n{}",
            self.role.trim(),
            self.linkedin.trim(),
            self.message.trim()
        );
        vec![
            ("access_key".to_string(), relay.access_key.clone()),
            ("subject".to_string(), relay.subject.clone()),
            ("from_name".to_string(), relay.from_name.clone()),
            ("name".to_string(), self.name.trim().to_string()),
            ("email".to_string(), self.email.trim().to_string()),
            ("linkedin".to_string(), self.linkedin.trim().to_string()),
            ("role".to_string(), self.role.trim().to_string()),
            ("message".to_string(), composed),
        ]
    }
}

// =============================================================================
// Relay contract
// =============================================================================

/// Where and as whom submissions are relayed. Defaults come from
/// [`config`]; tests override the resource.
#[derive(Resource, Clone)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: String,
    pub subject: String,
    pub from_name: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: config::RELAY_ENDPOINT.to_string(),
            access_key: config::RELAY_ACCESS_KEY.to_string(),
            subject: config::RELAY_SUBJECT.to_string(),
            from_name: config::RELAY_FROM_NAME.to_string(),
        }
    }
}

/// The relay's JSON response body.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Ways a relayed submission can fail.
#[derive(Debug)]
pub enum RelayError {
    /// Transport-level failure (DNS, refused connection, timeout).
    Network(String),
    /// The relay answered with a non-success HTTP status.
    Http(u16),
    /// The response body was not the expected JSON shape.
    Decode(String),
    /// The relay answered `success: false`.
    Rejected(String),
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::Network(msg) => write!(f, "network error: {msg}"),
            RelayError::Http(status) => write!(f, "relay returned HTTP {status}"),
            RelayError::Decode(msg) => write!(f, "unexpected relay response: {msg}"),
            RelayError::Rejected(msg) => {
                if msg.is_empty() {
                    write!(f, "the relay rejected the submission")
                } else {
                    write!(f, "the relay rejected the submission: {msg}")
                }
            }
        }
    }
}

impl std::error::Error for RelayError {}

/// Fired by the contact page when the user presses Send.
#[derive(Event, Debug, Default)]
pub struct SubmitContact;

// =============================================================================
// Native submission path
// =============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use bevy::tasks::{block_on, IoTaskPool, Task};

    use super::*;

    impl From<reqwest::Error> for RelayError {
        fn from(error: reqwest::Error) -> Self {
            RelayError::Network(error.to_string())
        }
    }

    /// The single in-flight submission task. Absent while idle.
    #[derive(Resource)]
    pub(super) struct InFlightSubmission(Task<Result<RelayResponse, RelayError>>);

    fn post_form(
        endpoint: &str,
        fields: &[(String, String)],
    ) -> Result<RelayResponse, RelayError> {
        let client = reqwest::blocking::Client::new();
        let response = client.post(endpoint).form(fields).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Http(status.as_u16()));
        }
        let body = response.text()?;
        let parsed: RelayResponse =
            serde_json::from_str(&body).map_err(|e| RelayError::Decode(e.to_string()))?;
        if !parsed.success {
            return Err(RelayError::Rejected(parsed.message.clone()));
        }
        Ok(parsed)
    }

    /// Validate and dispatch a submission task. At most one in flight.
    pub(super) fn begin_submission(
        mut commands: Commands,
        mut events: EventReader<SubmitContact>,
        mut form: ResMut<ContactForm>,
        relay: Res<RelayConfig>,
        in_flight: Option<Res<InFlightSubmission>>,
        mut toasts: EventWriter<ToastEvent>,
    ) {
        if events.is_empty() {
            return;
        }
        events.clear();

        if in_flight.is_some() {
            return;
        }
        if let Err(error) = form.validate() {
            toasts.send(ToastEvent::error(error.to_string()));
            return;
        }

        let endpoint = relay.endpoint.clone();
        let fields = form.relay_fields(&relay);
        form.sending = true;
        info!("relaying contact form to {endpoint}");

        let task = IoTaskPool::get().spawn(async move { post_form(&endpoint, &fields) });
        commands.insert_resource(InFlightSubmission(task));
    }

    /// Drain a finished submission task and surface the outcome.
    pub(super) fn poll_submission(
        mut commands: Commands,
        in_flight: Option<ResMut<InFlightSubmission>>,
        mut form: ResMut<ContactForm>,
        mut toasts: EventWriter<ToastEvent>,
    ) {
        let Some(mut in_flight) = in_flight else {
            return;
        };
        let Some(result) = block_on(futures_lite::future::poll_once(&mut in_flight.0)) else {
            return;
        };

        commands.remove_resource::<InFlightSubmission>();
        form.sending = false;

        match result {
            Ok(_) => {
                info!("contact form relayed");
                toasts.send(ToastEvent::success("Thanks! We'll be in touch soon."));
                form.clear();
            }
            Err(error) => {
                warn!("contact form relay failed: {error}");
                toasts.send(ToastEvent::error(format!("Could not send: {error}")));
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn reject_submission(
    mut events: EventReader<SubmitContact>,
    mut toasts: EventWriter<ToastEvent>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();
    toasts.send(ToastEvent::error(
        "Sending isn't available in the web preview — email the organizers instead.",
    ));
}

// =============================================================================
// Plugin
// =============================================================================

pub struct ContactPlugin;

impl Plugin for ContactPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SubmitContact>();
        app.init_resource::<ContactForm>();
        app.init_resource::<RelayConfig>();
        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(
            Update,
            (native::begin_submission, native::poll_submission).chain(),
        );
        #[cfg(target_arch = "wasm32")]
        app.add_systems(Update, reject_submission);
    }
}

// =============================================================================
// Tests
// =============================================================================
