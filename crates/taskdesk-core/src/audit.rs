//! Admin audit interception.
//!
//! Privileged operations are declared once by id on an [`AuditInterceptor`].
//! Callers route every guarded operation through [`AuditInterceptor::intercept`];
//! the interceptor records who/when/what for the declared ids before the
//! wrapped operation runs, and passes everything else straight through.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ports::AuditSink;

/// Identifiers of the operations that are audited by default.
pub mod operations {
    pub const CHANGE_USER_ROLE: &str = "admin.users.change_role";
    pub const DELETE_COMMENT: &str = "admin.comments.delete";

    /// Every privileged operation known to the backend.
    pub const PRIVILEGED: [&str; 2] = [CHANGE_USER_ROLE, DELETE_COMMENT];
}

/// Metadata of an authenticated inbound request, passed explicitly to the
/// interceptor.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub caller_id: i64,
    pub operation: String,
    pub path: String,
    pub received_at: DateTime<Utc>,
    pub request_id: Option<String>,
}

impl RequestContext {
    pub fn new(caller_id: i64, operation: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            caller_id,
            operation: operation.into(),
            path: path.into(),
            received_at: Utc::now(),
            request_id: None,
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

/// A single admin access record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditRecord {
    pub caller_id: i64,
    pub operation: String,
    pub path: String,
    pub requested_at: DateTime<Utc>,
    pub request_id: Option<String>,
}

impl From<&RequestContext> for AuditRecord {
    fn from(ctx: &RequestContext) -> Self {
        Self {
            caller_id: ctx.caller_id,
            operation: ctx.operation.clone(),
            path: ctx.path.clone(),
            requested_at: ctx.received_at,
            request_id: ctx.request_id.clone(),
        }
    }
}

/// Records an audit entry ahead of each registered privileged operation.
#[derive(Clone)]
pub struct AuditInterceptor {
    registered: HashSet<String>,
    sink: Arc<dyn AuditSink>,
}

impl AuditInterceptor {
    /// An interceptor with no registered operations.
    pub fn new(sink: Arc<dyn AuditSink>) -> Self {
        Self {
            registered: HashSet::new(),
            sink,
        }
    }

    /// An interceptor with [`operations::PRIVILEGED`] registered.
    pub fn with_privileged_operations(sink: Arc<dyn AuditSink>) -> Self {
        operations::PRIVILEGED
            .iter()
            .fold(Self::new(sink), |interceptor, op| interceptor.register(*op))
    }

    /// Declare `operation` as privileged.
    pub fn register(mut self, operation: impl Into<String>) -> Self {
        self.registered.insert(operation.into());
        self
    }

    pub fn is_registered(&self, operation: &str) -> bool {
        self.registered.contains(operation)
    }

    /// Emit the audit record for `ctx` if its operation is registered.
    /// Returns whether a record was emitted.
    pub fn before(&self, ctx: &RequestContext) -> bool {
        if !self.is_registered(&ctx.operation) {
            return false;
        }
        self.sink.record(&AuditRecord::from(ctx));
        true
    }

    /// Run `operation` behind the interceptor.
    pub async fn intercept<F, Fut>(&self, ctx: &RequestContext, operation: F) -> Fut::Output
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        self.before(ctx);
        operation().await
    }
}
