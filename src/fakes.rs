/// In-memory collaborators for driving the popup flows in tests
use crate::host::{ActiveTab, PopupHost};
use crate::http::{HttpClient, HttpRequest, HttpResponse, TransportError};
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::VecDeque;

pub struct FakeHost {
    tab: Option<ActiveTab>,
    token: Result<String, String>,
    clipboard_error: Option<String>,
    token_requests: RefCell<Vec<bool>>,
    clipboard: RefCell<Vec<String>>,
}

impl FakeHost {
    pub fn with_token(token: &str) -> FakeHost {
        FakeHost {
            tab: None,
            token: Ok(token.to_string()),
            clipboard_error: None,
            token_requests: RefCell::new(Vec::new()),
            clipboard: RefCell::new(Vec::new()),
        }
    }

    pub fn declining(reason: &str) -> FakeHost {
        FakeHost {
            token: Err(reason.to_string()),
            ..FakeHost::with_token("")
        }
    }

    pub fn on_tab(mut self, url: &str) -> FakeHost {
        self.tab = Some(ActiveTab {
            id: Some(1),
            url: Some(url.to_string()),
            title: None,
        });
        self
    }

    pub fn failing_clipboard(mut self, reason: &str) -> FakeHost {
        self.clipboard_error = Some(reason.to_string());
        self
    }

    pub fn token_requests(&self) -> Vec<bool> {
        self.token_requests.borrow().clone()
    }

    pub fn clipboard(&self) -> Vec<String> {
        self.clipboard.borrow().clone()
    }
}

impl PopupHost for FakeHost {
    async fn active_tab(&self) -> Option<ActiveTab> {
        self.tab.clone()
    }

    async fn auth_token(&self, interactive: bool) -> Result<String, String> {
        self.token_requests.borrow_mut().push(interactive);
        self.token.clone()
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), String> {
        if let Some(reason) = &self.clipboard_error {
            return Err(reason.clone());
        }
        self.clipboard.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Replays scripted responses in order and records every request
#[derive(Default)]
pub struct FakeHttp {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeHttp {
    pub fn new() -> FakeHttp {
        FakeHttp::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, error: TransportError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    /// Hold the next request in flight until the returned sender fires
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl HttpClient for FakeHttp {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);

        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_string())))
    }
}
