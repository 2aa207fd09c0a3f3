//! Client-side rendering entry point. Built to WASM by Trunk with the
//! `csr` feature; the native build compiles to an empty stub.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(flipcard::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {}
