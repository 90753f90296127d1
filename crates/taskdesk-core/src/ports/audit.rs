//! Audit sink port.

use crate::audit::AuditRecord;

/// Destination for admin audit records.
pub trait AuditSink: Send + Sync {
    fn record(&self, record: &AuditRecord);
}
