//! FFI bindings for wellness-core
//!
//! C-compatible entry points for embedding the core in a mobile shell. All
//! functions take null-terminated C strings and return allocated memory that
//! must be freed by the caller using `wellness_free_string`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::diet::catalog::catalog_from_json;
use crate::error::WellnessError;
use crate::pipeline::{burnout_from_json, diet_plan_from_json, questionnaire_from_json};

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert C string to Rust string
unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Helper to convert Rust string to C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Hand a pipeline result back across the boundary, recording any error
fn finish(result: Result<String, WellnessError>) -> *mut c_char {
    match result {
        Ok(json) => string_to_cstr(&json),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Score usage report JSON and return burnout report JSON.
///
/// # Safety
/// - `usage_json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `wellness_free_string`.
/// - Returns NULL on error; call `wellness_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn wellness_burnout_json(usage_json: *const c_char) -> *mut c_char {
    clear_last_error();

    let json = match cstr_to_string(usage_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid usage JSON string pointer");
            return ptr::null_mut();
        }
    };

    finish(burnout_from_json(&json))
}

/// Build a diet plan from request JSON and return diet report JSON.
///
/// # Safety
/// - `request_json` must be a valid null-terminated C string.
/// - `catalog_json` may be NULL to use the reference catalog; otherwise it must be
///   a valid null-terminated C string holding a JSON array of food items.
/// - Returns a newly allocated string that must be freed with `wellness_free_string`.
/// - Returns NULL on error; call `wellness_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn wellness_diet_plan_json(
    request_json: *const c_char,
    catalog_json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    let request = match cstr_to_string(request_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid request JSON string pointer");
            return ptr::null_mut();
        }
    };

    if catalog_json.is_null() {
        return finish(diet_plan_from_json(&request, None));
    }

    let catalog = match cstr_to_string(catalog_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid catalog JSON string pointer");
            return ptr::null_mut();
        }
    };

    finish(
        catalog_from_json(&catalog)
            .and_then(|items| diet_plan_from_json(&request, Some(items.as_slice()))),
    )
}

/// Score questionnaire answers JSON (`{"responses": [..]}`).
///
/// # Safety
/// - `answers_json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `wellness_free_string`.
/// - Returns NULL on error; call `wellness_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn wellness_questionnaire_json(answers_json: *const c_char) -> *mut c_char {
    clear_last_error();

    let json = match cstr_to_string(answers_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid answers JSON string pointer");
            return ptr::null_mut();
        }
    };

    finish(questionnaire_from_json(&json))
}

/// Free a string returned by wellness functions.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by a wellness function, or NULL.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn wellness_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the last error message.
///
/// # Safety
/// - Returns a pointer to a thread-local error string.
/// - The returned pointer is valid until the next wellness function call on this thread.
/// - Do NOT free the returned pointer.
/// - Returns NULL if no error occurred.
#[no_mangle]
pub unsafe extern "C" fn wellness_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

/// Get the library version.
///
/// # Safety
/// - Returns a pointer to a static string. Do NOT free.
#[no_mangle]
pub unsafe extern "C" fn wellness_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
