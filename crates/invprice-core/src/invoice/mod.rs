//! Invoice input loading.

mod source;

pub use source::{is_supported, InvoiceDocument, SourceKind};
