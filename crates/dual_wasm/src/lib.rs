//! WASM bridge exposing `dual_core::Dual` to JavaScript.

mod dual;

pub use dual::WasmDual;
