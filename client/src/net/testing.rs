//! Scripted transport for driving the API client without a network.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::Value;

use super::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};

#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply_json(self, status: u16, body: &Value) -> Self {
        let body = serde_json::to_vec(body).unwrap();
        self.replies.borrow_mut().push_back(Ok(HttpResponse { status, body }));
        self
    }

    pub(crate) fn reply_raw(self, status: u16, body: &[u8]) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.to_vec() }));
        self
    }

    pub(crate) fn fail(self, err: TransportError) -> Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    pub(crate) fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }
}

impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_owned())))
    }
}
