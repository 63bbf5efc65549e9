//! Expose the `redline-text` crate's functionality to WebAssembly.

use wasm_bindgen::prelude::*;

use crate::MarkupStyle;

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::redline` producing the default HTML markup.
#[wasm_bindgen(js_name = redline)]
#[must_use]
pub fn redline(baseline: &str, revised: &str) -> String {
    set_panic_hook();

    crate::redline(baseline, revised)
}

/// WASM wrapper around `crate::accept_all` for HTML markup, returning the
/// revised document.
///
/// # Errors
///
/// If the markup's delimiters aren't properly paired.
#[wasm_bindgen(js_name = acceptAll)]
pub fn accept_all(markup: &str) -> Result<String, JsError> {
    set_panic_hook();

    Ok(crate::accept_all(markup, &MarkupStyle::html())?)
}

/// WASM wrapper around `crate::reject_all` for HTML markup, returning the
/// baseline document.
///
/// # Errors
///
/// If the markup's delimiters aren't properly paired.
#[wasm_bindgen(js_name = rejectAll)]
pub fn reject_all(markup: &str) -> Result<String, JsError> {
    set_panic_hook();

    Ok(crate::reject_all(markup, &MarkupStyle::html())?)
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
