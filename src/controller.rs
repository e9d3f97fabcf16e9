/// Popup controller: owns the popup's fields and drives each token request flow
use crate::config::PopupConfig;
use crate::error::PopupError;
use crate::host::PopupHost;
use crate::http::HttpClient;
use crate::identity::IdentityResolver;
use crate::extractor::extract_quote_id;
use crate::token::{TokenClient, TokenKind};
use std::cell::RefCell;

/// Rendering state of a generate trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Idle,
    /// This trigger's request is in flight
    Busy,
    /// The sibling trigger's request is in flight
    Disabled,
}

/// Snapshot of everything the popup renders
#[derive(Debug, Clone, PartialEq)]
pub struct PopupView {
    pub quote_id: String,
    pub result: String,
    pub error: Option<String>,
    pub standard: TriggerState,
    pub full_form: TriggerState,
    pub copied: bool,
}

impl PopupView {
    pub fn trigger(&self, kind: TokenKind) -> TriggerState {
        match kind {
            TokenKind::Standard => self.standard,
            TokenKind::FullForm => self.full_form,
        }
    }

    fn set_trigger(&mut self, kind: TokenKind, state: TriggerState) {
        match kind {
            TokenKind::Standard => self.standard = state,
            TokenKind::FullForm => self.full_form = state,
        }
    }
}

impl Default for PopupView {
    fn default() -> Self {
        PopupView {
            quote_id: String::new(),
            result: String::new(),
            error: None,
            standard: TriggerState::Idle,
            full_form: TriggerState::Idle,
            copied: false,
        }
    }
}

/// Single writer of the popup's result field and error slot.
///
/// Only one generate flow runs at a time: while one trigger is busy the other
/// is disabled, and clicks on a non-idle trigger are ignored.
pub struct PopupController<H, C> {
    host: H,
    http: C,
    config: PopupConfig,
    view: RefCell<PopupView>,
    observer: Option<Box<dyn Fn()>>,
}

impl<H: PopupHost, C: HttpClient> PopupController<H, C> {
    pub fn new(host: H, http: C, config: PopupConfig) -> Self {
        PopupController {
            host,
            http,
            config,
            view: RefCell::new(PopupView::default()),
            observer: None,
        }
    }

    /// Called after every state change, e.g. to schedule a re-render
    pub fn with_observer(mut self, observer: impl Fn() + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn view(&self) -> PopupView {
        self.view.borrow().clone()
    }

    /// Pre-fill the quote id from the active tab, if it is a quote-view page
    pub async fn open(&self) {
        let Some(tab) = self.host.active_tab().await else {
            log::debug!("No active tab");
            return;
        };

        match tab.url.as_deref().and_then(extract_quote_id) {
            Some(quote_id) => {
                log::debug!("Pre-filling quote id {}", quote_id);
                self.update(|view| view.quote_id = quote_id);
            }
            None => log::debug!("Active tab is not a quote view"),
        }
    }

    pub fn set_quote_id(&self, value: String) {
        self.update(|view| view.quote_id = value);
    }

    pub fn dismiss_error(&self) {
        self.update(|view| view.error = None);
    }

    /// Run one generate flow for the given trigger
    pub async fn generate(&self, kind: TokenKind) {
        let Some(quote_id) = self.begin(kind) else {
            return;
        };

        let outcome = self.request(kind, &quote_id).await;
        self.finish(kind, outcome);
    }

    /// Put the current result on the clipboard; failures are only logged
    pub async fn copy(&self) {
        let text = self.view.borrow().result.clone();

        match self.host.write_clipboard(&text).await {
            Ok(()) => self.update(|view| view.copied = true),
            Err(e) => log::error!("Failed to copy: {}", e),
        }
    }

    fn begin(&self, kind: TokenKind) -> Option<String> {
        let mut started = None;

        self.update(|view| {
            if view.trigger(kind) != TriggerState::Idle {
                log::debug!("Ignoring {:?} click while a request is in flight", kind);
                return;
            }

            let quote_id = view.quote_id.trim().to_string();
            if quote_id.is_empty() {
                view.error = Some(PopupError::Validation.to_string());
                return;
            }

            view.error = None;
            view.set_trigger(kind, TriggerState::Busy);
            view.set_trigger(kind.sibling(), TriggerState::Disabled);
            started = Some(quote_id);
        });

        started
    }

    async fn request(&self, kind: TokenKind, quote_id: &str) -> Result<String, PopupError> {
        let email = if self.config.require_email {
            let resolver =
                IdentityResolver::new(&self.host, &self.http, &self.config.userinfo_url);
            match resolver.resolve_email().await {
                Ok(email) => Some(email),
                Err(e) => {
                    log::warn!("Email lookup failed: {}", e);
                    return Err(e.into());
                }
            }
        } else {
            None
        };

        log::debug!("Requesting {:?} token for quote {}", kind, quote_id);
        TokenClient::new(&self.http, &self.config)
            .request_token(kind, quote_id, email.as_deref())
            .await
            .map_err(|e| {
                log::warn!("Token request failed: {}", e);
                e.into()
            })
    }

    fn finish(&self, kind: TokenKind, outcome: Result<String, PopupError>) {
        self.update(|view| {
            match outcome {
                Ok(url) => {
                    view.result = url;
                    view.error = None;
                    view.copied = false;
                }
                Err(e) => view.error = Some(e.to_string()),
            }
            view.set_trigger(kind, TriggerState::Idle);
            view.set_trigger(kind.sibling(), TriggerState::Idle);
        });
    }

    fn update(&self, change: impl FnOnce(&mut PopupView)) {
        change(&mut *self.view.borrow_mut());
        if let Some(observer) = &self.observer {
            observer();
        }
    }
}
