//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! The client stays opaque; the only data crossing the boundary is the
//! rendered view, carried as two C strings. Conversion lives here to keep
//! `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use portfolio_core::Rendered;

/// Opaque handle to a `PortfolioClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiPortfolioClient {
    pub(crate) inner: portfolio_core::PortfolioClient,
}

/// One rendered view exposed to C: the id of the output region the fragment
/// belongs to, and the HTML fragment to place there.
///
/// Views are total, so there is no error envelope; a failed fetch arrives as
/// the error paragraph in `html`. Both strings are owned by the result and
/// released together by `portfolio_free_result`.
#[repr(C)]
pub struct FfiRenderResult {
    pub region: *mut c_char,
    pub html: *mut c_char,
}

impl FfiRenderResult {
    /// Convert a core `Rendered` into a heap-allocated `FfiRenderResult`.
    pub(crate) fn from_core(rendered: Rendered) -> *mut Self {
        let region = CString::new(rendered.region).unwrap().into_raw();
        let html = CString::new(rendered.html).unwrap().into_raw();
        Box::into_raw(Box::new(FfiRenderResult { region, html }))
    }
}
