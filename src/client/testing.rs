//! In-memory transport for exercising the client without a network.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::*;

#[derive(Debug, Clone)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    requests: Vec<HttpRequest>,
    responses: VecDeque<Result<HttpResponse, String>>,
}

impl FakeTransport {
    /// A transport that answers the first request with `status` / `body`.
    pub(crate) fn new(status: u16, body: impl Into<String>) -> Self {
        let transport = Self::empty();
        transport.push(status, body);
        transport
    }

    /// A transport whose first request fails before any response is received.
    pub(crate) fn failing(message: impl Into<String>) -> Self {
        let transport = Self::empty();
        transport
            .state
            .lock()
            .unwrap()
            .responses
            .push_back(Err(message.into()));
        transport
    }

    pub(crate) fn empty() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                requests: Vec::new(),
                responses: VecDeque::new(),
            })),
        }
    }

    /// Queue another response; responses are consumed in order.
    pub(crate) fn push(&self, status: u16, body: impl Into<String>) -> &Self {
        self.state
            .lock()
            .unwrap()
            .responses
            .push_back(Ok(HttpResponse {
                status,
                body: body.into(),
            }));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests()
            .pop()
            .expect("no request was sent through the fake transport")
    }
}

impl HttpTransport for FakeTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let next = {
                let mut state = self.state.lock().unwrap();
                state.requests.push(request);
                state.responses.pop_front()
            };
            match next {
                Some(Ok(response)) => Ok(response),
                Some(Err(message)) => Err(message.into()),
                None => Err("fake transport has no queued response".into()),
            }
        })
    }
}

pub(crate) fn make_client(transport: FakeTransport) -> TextMagicClient {
    TextMagicClient {
        credentials: Credentials::new("user", "key").unwrap(),
        base_url: "https://example.invalid/api/v2/".to_owned(),
        http: Arc::new(transport),
    }
}

/// Decoded form body of a request, as sorted key/value pairs.
pub(crate) fn form_pairs(request: &HttpRequest) -> Vec<(String, String)> {
    Params::decode(request.form.as_deref().unwrap_or_default())
        .unwrap()
        .to_pairs()
}

/// Decoded query string of a request, as sorted key/value pairs.
pub(crate) fn query_pairs(request: &HttpRequest) -> Vec<(String, String)> {
    Params::decode(request.url.query().unwrap_or_default())
        .unwrap()
        .to_pairs()
}
