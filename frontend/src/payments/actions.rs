//! Add, make-primary and delete flows.
//!
//! The flows only talk to the outside world through [`PaymentMethodsApi`] and
//! [`PageHost`], so the success/failure handling can be exercised without a
//! browser. [`BrowserApi`] and [`BrowserPage`] are the real implementations.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config;
use crate::payments::payment_models::{ApiResponse, MethodIdRequest};
use crate::utils::api::Api;

pub const SAVE_FAILED_MESSAGE: &str = "Error adding payment method";
pub const MAKE_PRIMARY_FAILED_MESSAGE: &str = "Error updating payment method";
pub const DELETE_FAILED_MESSAGE: &str = "Error removing payment method";
pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to remove this payment method?";

#[derive(Debug, Error)]
pub enum ActionError {
    /// The server answered `success: false`
    #[error("{0}")]
    Rejected(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ActionError {
    /// Text shown to the user. Only server rejections carry their own message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ActionError::Rejected(message) => format!("Error: {}", message),
            _ => fallback.to_string(),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait PaymentMethodsApi {
    /// POST `body` as JSON to `path` and decode the `{success, message}` reply.
    async fn post_json(&self, path: &str, body: &Value) -> Result<ApiResponse, ActionError>;
}

/// Blocking browser dialogs and navigation
pub trait PageHost {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
    fn reload(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Server accepted; the page is reloading
    Reloaded,
    /// User was alerted
    Failed,
    /// User declined the confirmation, nothing was sent
    Cancelled,
}

async fn post<A, T>(api: &A, path: &str, body: &T) -> Result<(), ActionError>
where
    A: PaymentMethodsApi,
    T: Serialize,
{
    let body = serde_json::to_value(body)?;
    let response = api.post_json(path, &body).await?;
    if response.success {
        Ok(())
    } else {
        Err(ActionError::Rejected(response.message))
    }
}

fn finish<P: PageHost>(page: &P, result: Result<(), ActionError>, fallback: &str) -> ActionOutcome {
    match result {
        Ok(()) => {
            page.reload();
            ActionOutcome::Reloaded
        }
        Err(e) => {
            log::error!("Payment method request failed: {}", e);
            page.alert(&e.user_message(fallback));
            ActionOutcome::Failed
        }
    }
}

/// Submit a new payment method. `on_saved` runs before the reload, the modal
/// uses it to close itself.
pub async fn save_method<A, P, F>(api: &A, page: &P, payload: Map<String, Value>, on_saved: F) -> ActionOutcome
where
    A: PaymentMethodsApi,
    P: PageHost,
    F: FnOnce(),
{
    let result = post(api, config::SAVE_METHOD_PATH, &payload).await;
    if result.is_ok() {
        log::info!("Payment method saved");
        on_saved();
    }
    finish(page, result, SAVE_FAILED_MESSAGE)
}

pub async fn make_primary<A, P>(api: &A, page: &P, method_id: &str) -> ActionOutcome
where
    A: PaymentMethodsApi,
    P: PageHost,
{
    let request = MethodIdRequest { method_id: method_id.to_string() };
    let result = post(api, config::MAKE_PRIMARY_PATH, &request).await;
    finish(page, result, MAKE_PRIMARY_FAILED_MESSAGE)
}

pub async fn delete_method<A, P>(api: &A, page: &P, method_id: &str) -> ActionOutcome
where
    A: PaymentMethodsApi,
    P: PageHost,
{
    if !page.confirm(DELETE_CONFIRM_MESSAGE) {
        log::info!("Removal of payment method {} cancelled", method_id);
        return ActionOutcome::Cancelled;
    }
    let request = MethodIdRequest { method_id: method_id.to_string() };
    let result = post(api, config::DELETE_METHOD_PATH, &request).await;
    finish(page, result, DELETE_FAILED_MESSAGE)
}

/// Talks to the real backend through [`Api`]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserApi;

impl PaymentMethodsApi for BrowserApi {
    async fn post_json(&self, path: &str, body: &Value) -> Result<ApiResponse, ActionError> {
        let response = Api::post(path)
            .csrf()
            .json(body)?
            .send()
            .await
            .map_err(|e| ActionError::Transport(format!("{:?}", e)))?;
        response
            .json::<ApiResponse>()
            .await
            .map_err(|e| ActionError::Decode(format!("{:?}", e)))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPage;

impl PageHost for BrowserPage {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::error!("Failed to show alert: {:?}", e);
            }
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn reload(&self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::error!("Failed to reload page: {:?}", e);
            }
        }
    }
}
