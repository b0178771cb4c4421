//! Contact form and the transactional-email delivery it submits to.
//!
//! The form owns its field state; submission POSTs the fields to the email
//! service's HTTP API. Success clears the form, failure preserves it for a
//! retry; nothing propagates past the section boundary.

use serde::Serialize;
use thiserror::Error;

const EMAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const SERVICE_ID: &str = "service_9tuzpte";
const TEMPLATE_ID: &str = "template_x6d1fft";
const PUBLIC_KEY: &str = "QowlL85FEAM-Tedw_";

/// The three fields the email template consumes. Field names double as the
/// input `name` attributes and the template parameter keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

impl ContactFields {
    pub fn is_complete(&self) -> bool {
        !(self.from_name.trim().is_empty()
            || self.from_email.trim().is_empty()
            || self.message.trim().is_empty())
    }
}

#[derive(Debug, Error)]
pub enum SendError {
    #[error("email service rejected the message: HTTP {0}")]
    Rejected(u16),
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitStatus {
    pub fn is_sending(self) -> bool {
        self == SubmitStatus::Sending
    }
}

/// Form state machine: `Idle -> Sending -> (Sent | Failed)`, and back to
/// `Sending` on the next submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub status: SubmitStatus,
}

impl ContactForm {
    /// Records an edit to the named field; unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "from_name" => self.fields.from_name = value,
            "from_email" => self.fields.from_email = value,
            "message" => self.fields.message = value,
            _ => {}
        }
    }

    /// Moves to `Sending`. Returns false, leaving the state untouched, when
    /// a submission is already in flight or a field is still empty.
    pub fn begin_submit(&mut self) -> bool {
        if self.status.is_sending() || !self.fields.is_complete() {
            return false;
        }
        self.status = SubmitStatus::Sending;
        true
    }

    /// Settles the in-flight submission. Success clears the fields for a
    /// fresh message; failure keeps them so the visitor can retry.
    pub fn settle(&mut self, outcome: Result<(), SendError>) {
        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = SubmitStatus::Sent;
            }
            Err(_) => {
                self.status = SubmitStatus::Failed;
            }
        }
    }
}

#[derive(Serialize)]
struct EmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactFields,
}

#[cfg(target_arch = "wasm32")]
pub async fn deliver(fields: &ContactFields) -> Result<(), SendError> {
    use gloo_net::http::Request;

    let payload = EmailRequest {
        service_id: SERVICE_ID,
        template_id: TEMPLATE_ID,
        user_id: PUBLIC_KEY,
        template_params: fields,
    };

    let response = Request::post(EMAIL_ENDPOINT)
        .json(&payload)
        .map_err(|err| SendError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| SendError::Network(err.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SendError::Rejected(response.status()))
    }
}

#[cfg(target_arch = "wasm32")]
mod section {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{HtmlInputElement, HtmlTextAreaElement};
    use yew::prelude::*;

    use super::{deliver, ContactForm, SubmitStatus};
    use crate::content;
    use crate::magnetic::MagneticButton;
    use crate::reveal::Reveal;

    fn input_value(event: &InputEvent) -> Option<String> {
        let target = event.target()?;
        if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        target
            .dyn_ref::<HtmlTextAreaElement>()
            .map(|area| area.value())
    }

    #[function_component(ContactSection)]
    pub fn contact_section() -> Html {
        let form = use_state(ContactForm::default);

        let edit = |name: &'static str| {
            let form = form.clone();
            Callback::from(move |event: InputEvent| {
                let Some(value) = input_value(&event) else {
                    return;
                };
                let mut next = (*form).clone();
                next.set_field(name, value);
                form.set(next);
            })
        };

        let onsubmit = {
            let form = form.clone();
            Callback::from(move |event: SubmitEvent| {
                event.prevent_default();
                let mut next = (*form).clone();
                if !next.begin_submit() {
                    return;
                }
                let fields = next.fields.clone();
                form.set(next);

                let form = form.clone();
                spawn_local(async move {
                    let outcome = deliver(&fields).await;
                    if let Err(error) = &outcome {
                        log::warn!("contact form submission failed: {error}");
                    }
                    let mut settled = (*form).clone();
                    settled.settle(outcome);
                    form.set(settled);
                });
            })
        };

        let notice = match form.status {
            SubmitStatus::Sent => Some(("form-notice is-success", "Message sent successfully! ❤️")),
            SubmitStatus::Failed => Some(("form-notice is-error", "Oops! Something went wrong. ❌")),
            SubmitStatus::Idle | SubmitStatus::Sending => None,
        };

        html! {
            <Reveal id="contact" class="contact-section">
                <div class="section-heading">
                    <h3 class="eyebrow">{"Get In Touch"}</h3>
                    <h1>{"Let's Work "}<span class="gradient-text-pink">{"Together"}</span></h1>
                </div>

                <div class="contact-grid">
                    <div class="contact-details">
                        { for content::CONTACT_DETAILS.iter().map(|detail| {
                            let body = html! {
                                <>
                                    <div class="contact-icon">
                                        <span class="material-icons-round">{detail.icon}</span>
                                    </div>
                                    <div class="contact-copy">
                                        <p class="contact-label">{detail.label}</p>
                                        <p class="contact-value">{detail.value}</p>
                                    </div>
                                </>
                            };
                            match detail.url {
                                Some(url) => html! {
                                    <a class="contact-card" href={url} target="_blank" rel="noopener noreferrer">
                                        { body }
                                    </a>
                                },
                                None => html! { <div class="contact-card">{ body }</div> },
                            }
                        }) }
                    </div>

                    <form class="contact-form" onsubmit={onsubmit}>
                        <input
                            required=true
                            type="text"
                            name="from_name"
                            placeholder="Your Name"
                            value={form.fields.from_name.clone()}
                            oninput={edit("from_name")}
                        />
                        <input
                            required=true
                            type="email"
                            name="from_email"
                            placeholder="Your Email"
                            value={form.fields.from_email.clone()}
                            oninput={edit("from_email")}
                        />
                        <textarea
                            required=true
                            name="message"
                            placeholder="Your Message"
                            rows="4"
                            value={form.fields.message.clone()}
                            oninput={edit("message")}
                        />

                        if let Some((class, text)) = notice {
                            <p class={class} role="status">{text}</p>
                        }

                        <MagneticButton
                            emphasized=true
                            kind="submit"
                            class="btn-primary btn-block"
                            disabled={form.status.is_sending()}
                        >
                            if form.status.is_sending() {
                                {"Sending..."}
                            } else {
                                <>
                                    {"Send Message "}
                                    <span class="material-symbols-outlined">{"send"}</span>
                                </>
                            }
                        </MagneticButton>
                    </form>
                </div>
            </Reveal>
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use section::ContactSection;

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field("from_name", "Jane Doe".to_string());
        form.set_field("from_email", "jane@example.com".to_string());
        form.set_field("message", "Hello".to_string());
        form
    }

    #[test]
    fn edits_land_in_the_named_fields() {
        let form = filled_form();
        assert_eq!(form.fields.from_name, "Jane Doe");
        assert_eq!(form.fields.from_email, "jane@example.com");
        assert_eq!(form.fields.message, "Hello");
    }

    #[test]
    fn unknown_field_names_are_ignored() {
        let mut form = filled_form();
        form.set_field("reply_to", "ignored".to_string());
        assert_eq!(form, filled_form());
    }

    #[test]
    fn submit_requires_complete_fields() {
        let mut form = ContactForm::default();
        assert!(!form.begin_submit());
        assert_eq!(form.status, SubmitStatus::Idle);

        form.set_field("from_name", "Jane Doe".to_string());
        form.set_field("from_email", "   ".to_string());
        form.set_field("message", "Hello".to_string());
        assert!(!form.begin_submit());

        form.set_field("from_email", "jane@example.com".to_string());
        assert!(form.begin_submit());
        assert_eq!(form.status, SubmitStatus::Sending);
    }

    #[test]
    fn double_submit_is_rejected_while_sending() {
        let mut form = filled_form();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        assert_eq!(form.status, SubmitStatus::Sending);
    }

    #[test]
    fn success_resets_fields_and_reports_once() {
        let mut form = filled_form();
        form.begin_submit();
        form.settle(Ok(()));

        assert_eq!(form.status, SubmitStatus::Sent);
        assert_eq!(form.fields, ContactFields::default());
    }

    #[test]
    fn failure_preserves_fields_for_retry() {
        let mut form = filled_form();
        form.begin_submit();
        form.settle(Err(SendError::Rejected(502)));

        assert_eq!(form.status, SubmitStatus::Failed);
        assert_eq!(form.fields.from_name, "Jane Doe");
        assert_eq!(form.fields.from_email, "jane@example.com");
        assert_eq!(form.fields.message, "Hello");
    }

    #[test]
    fn retry_after_failure_clears_the_notice_state() {
        let mut form = filled_form();
        form.begin_submit();
        form.settle(Err(SendError::Network("timeout".to_string())));
        assert!(form.begin_submit());
        assert_eq!(form.status, SubmitStatus::Sending);
    }

    #[test]
    fn payload_serializes_template_params() {
        let form = filled_form();
        let request = EmailRequest {
            service_id: SERVICE_ID,
            template_id: TEMPLATE_ID,
            user_id: PUBLIC_KEY,
            template_params: &form.fields,
        };
        let json = serde_json::to_string(&request).expect("payload serializes");
        assert!(json.contains("\"service_id\":\"service_9tuzpte\""));
        assert!(json.contains("\"from_name\":\"Jane Doe\""));
        assert!(json.contains("\"message\":\"Hello\""));
    }
}
