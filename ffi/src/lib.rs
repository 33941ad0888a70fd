//! C-ABI wrapper around `portfolio-core`.
//!
//! # Overview
//! Exposes the five portfolio views through `extern "C"` functions so any
//! language with a C FFI can fetch and render the portfolio without linking
//! serde or ureq directly. Each view performs the blocking HTTP round-trip
//! internally and returns the region/html pair ready to place.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Per-view functions mirror the core `view` module 1:1.
//! - Views are total: a fetch failure comes back as the error paragraph in
//!   `html`, so a non-null result never needs an error check. Null is
//!   returned only for a null `client` or a caught panic.
//! - The C caller owns every returned pointer and must release results with
//!   `portfolio_free_result`.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use portfolio_core::view;

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `PortfolioClient` bound to `base_url`.
///
/// Returns null if `base_url` is null or if an internal panic occurs.
/// The caller must free the returned pointer with `portfolio_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn portfolio_client_new(base_url: *const c_char) -> *mut FfiPortfolioClient {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let url = unsafe { CStr::from_ptr(base_url) }.to_str().unwrap_or("");
        let client = portfolio_core::PortfolioClient::new(url);
        Box::into_raw(Box::new(FfiPortfolioClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a `PortfolioClient` created by `portfolio_client_new`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn portfolio_client_free(client: *mut FfiPortfolioClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// View functions
// ---------------------------------------------------------------------------

/// Fetch the profile and render it for the `profile-output` region.
///
/// Returns null if `client` is null.
/// The caller must free the returned pointer with `portfolio_free_result`.
#[unsafe(no_mangle)]
pub extern "C" fn portfolio_view_profile(
    client: *const FfiPortfolioClient,
) -> *mut FfiRenderResult {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        FfiRenderResult::from_core(view::profile(&client.inner))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Fetch every project and render them for the `projects-output` region.
///
/// Returns null if `client` is null.
#[unsafe(no_mangle)]
pub extern "C" fn portfolio_view_projects(
    client: *const FfiPortfolioClient,
) -> *mut FfiRenderResult {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        FfiRenderResult::from_core(view::projects(&client.inner))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Fetch projects matching `skill` and render them for the `skill-output`
/// region.
///
/// A null or blank `skill` is treated as empty input and yields the
/// enter-a-skill prompt without a network call.
/// Returns null if `client` is null.
#[unsafe(no_mangle)]
pub extern "C" fn portfolio_view_projects_by_skill(
    client: *const FfiPortfolioClient,
    skill: *const c_char,
) -> *mut FfiRenderResult {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let skill = if skill.is_null() {
            ""
        } else {
            unsafe { CStr::from_ptr(skill) }.to_str().unwrap_or("")
        };
        FfiRenderResult::from_core(view::projects_by_skill(&client.inner, skill))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Run the combined search and render the results for the `search-output`
/// region.
///
/// A null or blank `query` is treated as empty input and yields the
/// enter-a-query prompt without a network call.
/// Returns null if `client` is null.
#[unsafe(no_mangle)]
pub extern "C" fn portfolio_view_search(
    client: *const FfiPortfolioClient,
    query: *const c_char,
) -> *mut FfiRenderResult {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let query = if query.is_null() {
            ""
        } else {
            unsafe { CStr::from_ptr(query) }.to_str().unwrap_or("")
        };
        FfiRenderResult::from_core(view::search(&client.inner, query))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Fetch the top skills and render them for the `top-skills-output` region.
///
/// Returns null if `client` is null.
#[unsafe(no_mangle)]
pub extern "C" fn portfolio_view_top_skills(
    client: *const FfiPortfolioClient,
) -> *mut FfiRenderResult {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        FfiRenderResult::from_core(view::top_skills(&client.inner))
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiRenderResult` returned by any `portfolio_view_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn portfolio_free_result(result: *mut FfiRenderResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.region.is_null() {
            drop(unsafe { CString::from_raw(result.region) });
        }
        if !result.html.is_null() {
            drop(unsafe { CString::from_raw(result.html) });
        }
    });
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn new_client(url: &str) -> *mut FfiPortfolioClient {
        let url = CString::new(url).unwrap();
        portfolio_client_new(url.as_ptr())
    }

    /// A port that was bound and immediately released, so connections to it
    /// are refused quickly.
    fn refused_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    fn result_strings(result: *const FfiRenderResult) -> (String, String) {
        let r = unsafe { &*result };
        let region = unsafe { CStr::from_ptr(r.region) }
            .to_str()
            .unwrap()
            .to_string();
        let html = unsafe { CStr::from_ptr(r.html) }
            .to_str()
            .unwrap()
            .to_string();
        (region, html)
    }

    #[test]
    fn client_new_and_free() {
        let client = new_client("http://localhost:3000");
        assert!(!client.is_null());
        portfolio_client_free(client);
    }

    #[test]
    fn client_new_null_returns_null() {
        let client = portfolio_client_new(std::ptr::null());
        assert!(client.is_null());
    }

    #[test]
    fn client_free_null_is_safe() {
        portfolio_client_free(std::ptr::null_mut());
    }

    #[test]
    fn view_profile_null_client_returns_null() {
        let result = portfolio_view_profile(std::ptr::null());
        assert!(result.is_null());
    }

    #[test]
    fn null_skill_prompts_without_network() {
        // A refused port guarantees any accidental fetch would surface as a
        // transport error instead of the prompt.
        let client = new_client(&refused_url());
        let result = portfolio_view_projects_by_skill(client, std::ptr::null());
        assert!(!result.is_null());

        let (region, html) = result_strings(result);
        assert_eq!(region, "skill-output");
        assert_eq!(html, "<p>Please enter a skill.</p>");

        portfolio_free_result(result);
        portfolio_client_free(client);
    }

    #[test]
    fn blank_query_prompts_without_network() {
        let client = new_client(&refused_url());
        let query = CString::new("   ").unwrap();
        let result = portfolio_view_search(client, query.as_ptr());
        assert!(!result.is_null());

        let (region, html) = result_strings(result);
        assert_eq!(region, "search-output");
        assert_eq!(html, "<p>Please enter a search query.</p>");

        portfolio_free_result(result);
        portfolio_client_free(client);
    }

    #[test]
    fn unreachable_server_renders_error_paragraph() {
        let client = new_client(&refused_url());
        let result = portfolio_view_top_skills(client);
        assert!(!result.is_null());

        let (region, html) = result_strings(result);
        assert_eq!(region, "top-skills-output");
        assert!(html.starts_with("<p class=\"text-red-500\">Error: transport error:"));

        portfolio_free_result(result);
        portfolio_client_free(client);
    }

    #[test]
    fn free_result_null_is_safe() {
        portfolio_free_result(std::ptr::null_mut());
    }

    #[test]
    fn views_against_live_server() {
        // Start the seeded mock server on a random port.
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                mock_server::run(listener).await
            })
            .unwrap();
        });

        let client = new_client(&format!("http://{addr}"));
        assert!(!client.is_null());

        let result = portfolio_view_profile(client);
        let (region, html) = result_strings(result);
        assert_eq!(region, "profile-output");
        assert!(html.starts_with("<table id=\"profile-table\">"));
        assert!(html.contains("<tr><td>Name</td><td>Alex Rivera</td></tr>"));
        portfolio_free_result(result);

        let result = portfolio_view_projects(client);
        let (region, html) = result_strings(result);
        assert_eq!(region, "projects-output");
        assert!(html.starts_with("<table id=\"projects-table\">"));
        assert!(html.contains("<td>tabledump</td>"));
        portfolio_free_result(result);

        let query = CString::new("rust").unwrap();
        let result = portfolio_view_search(client, query.as_ptr());
        let (region, html) = result_strings(result);
        assert_eq!(region, "search-output");
        assert!(html.contains("<tr><td>Skill</td><td>Rust</td></tr>"));
        portfolio_free_result(result);

        portfolio_client_free(client);
    }
}
