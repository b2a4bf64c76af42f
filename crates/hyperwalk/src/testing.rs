//! Test harness: a fetcher whose responses are released by hand.
//!
//! Used to drive overlapping loads into a chosen completion order.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures_channel::oneshot;
use futures_util::FutureExt;
use futures_util::future::LocalBoxFuture;
use serde_json::Value as JsonValue;

use crate::fetch::{FetchError, Fetcher};

type Reply = Result<JsonValue, FetchError>;

#[derive(Clone, Default)]
pub struct GatedFetcher {
    pending: Rc<RefCell<HashMap<String, Vec<oneshot::Sender<Reply>>>>>,
}

impl GatedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests waiting for `location`.
    pub fn waiting(&self, location: &str) -> usize {
        self.pending.borrow().get(location).map_or(0, Vec::len)
    }

    /// Answer the oldest waiting request for `location`.
    ///
    /// Returns `false` when nothing was waiting.
    pub fn resolve(&self, location: &str, body: JsonValue) -> bool {
        self.reply(location, Ok(body))
    }

    pub fn fail(&self, location: &str, error: FetchError) -> bool {
        self.reply(location, Err(error))
    }

    fn reply(&self, location: &str, reply: Reply) -> bool {
        let sender = {
            let mut pending = self.pending.borrow_mut();
            match pending.get_mut(location) {
                Some(senders) if !senders.is_empty() => senders.remove(0),
                _ => return false,
            }
        };
        sender.send(reply).is_ok()
    }
}

impl Fetcher for GatedFetcher {
    fn fetch(&self, location: &str) -> LocalBoxFuture<'static, Reply> {
        let (sender, receiver) = oneshot::channel();
        self.pending
            .borrow_mut()
            .entry(location.to_string())
            .or_default()
            .push(sender);
        let location = location.to_string();
        async move {
            receiver.await.unwrap_or_else(|_| {
                Err(FetchError::Transport {
                    location,
                    message: "request dropped".to_string(),
                })
            })
        }
        .boxed_local()
    }
}
