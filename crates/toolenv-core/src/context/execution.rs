//! Execution context tokens
//!
//! Resolution reads host settings that are only safe to touch from one
//! serialization context. A host claims that role for its UI thread with
//! [`ExecutionContext::register_ui`]; only one thread holds it at a time, and
//! it is released when the returned [`UiRegistration`] is dropped.
//!
//! Tokens are `!Send` and remember the thread that created them, so a token
//! cannot be handed to a worker, and a worker cannot claim the role while the
//! UI thread holds it.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::thread::{self, ThreadId};

use crate::error::ToolchainError;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);
static UI_CONTEXT: Mutex<Option<Registered>> = Mutex::new(None);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Registered {
    id: u64,
    thread: ThreadId,
}

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

fn registered() -> MutexGuard<'static, Option<Registered>> {
    UI_CONTEXT.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Capability token identifying the context a call is made from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExecutionContext {
    id: u64,
    thread: ThreadId,
    _not_send: PhantomData<*const ()>,
}

/// Holds the UI role for the registering thread until dropped
#[derive(Debug)]
pub struct UiRegistration {
    context: ExecutionContext,
}

impl UiRegistration {
    /// The UI token, usable only on the registering thread
    pub fn context(&self) -> ExecutionContext {
        self.context
    }
}

impl Drop for UiRegistration {
    fn drop(&mut self) {
        let mut current = registered();
        if current.map(|r| r.id) == Some(self.context.id) {
            *current = None;
        }
    }
}

impl ExecutionContext {
    fn on_current_thread(id: u64) -> Self {
        Self {
            id,
            thread: thread::current().id(),
            _not_send: PhantomData,
        }
    }

    /// Claim the UI role for the current thread.
    ///
    /// Returns `None` while another registration is alive, including one made
    /// earlier on this same thread.
    pub fn register_ui() -> Option<UiRegistration> {
        let mut current = registered();
        if current.is_some() {
            return None;
        }
        let context = Self::on_current_thread(next_id());
        *current = Some(Registered {
            id: context.id,
            thread: context.thread,
        });
        Some(UiRegistration { context })
    }

    /// A fresh context that is never the UI context (worker threads, tasks).
    pub fn background() -> Self {
        Self::on_current_thread(next_id())
    }

    /// Whether this token is the live UI registration and is being used on
    /// the registering thread
    pub fn is_ui(&self) -> bool {
        let expected = Registered {
            id: self.id,
            thread: thread::current().id(),
        };
        self.thread == expected.thread && *registered() == Some(expected)
    }

    /// Fail fast unless this token is the UI context.
    pub fn ensure_ui(&self, operation: &'static str) -> Result<(), ToolchainError> {
        if self.is_ui() {
            Ok(())
        } else {
            Err(ToolchainError::WrongThread { operation })
        }
    }
}
