//! Tracing-backed admin audit sink.

use taskdesk_core::audit::AuditRecord;
use taskdesk_core::ports::AuditSink;

/// Emits each audit record as a structured `info` event on the
/// `admin_audit` target, so it can be routed separately by the subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, record: &AuditRecord) {
        tracing::info!(
            target: "admin_audit",
            caller_id = record.caller_id,
            operation = %record.operation,
            path = %record.path,
            request_id = record.request_id.as_deref().unwrap_or("-"),
            requested_at = %record.requested_at.to_rfc3339(),
            "Admin access"
        );
    }
}
