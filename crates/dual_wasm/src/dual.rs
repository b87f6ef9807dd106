//! `WasmDual` wrapper and its JS-facing methods.

use anyhow::Context;
use dual_core::{Dual, DualResult};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct WasmDual {
    inner: Dual,
}

impl From<Dual> for WasmDual {
    fn from(inner: Dual) -> Self {
        Self { inner }
    }
}

/// Attaches the name of the JS-facing operation to a core failure.
fn checked(result: DualResult<Dual>, operation: &str) -> anyhow::Result<Dual> {
    result.with_context(|| format!("Dual {operation} failed"))
}

fn to_js(result: anyhow::Result<Dual>) -> Result<WasmDual, JsValue> {
    result
        .map(WasmDual::from)
        .map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

#[wasm_bindgen]
impl WasmDual {
    #[wasm_bindgen(constructor)]
    pub fn new(real: f64, dual: f64) -> WasmDual {
        console_error_panic_hook::set_once();
        Dual::new(real, dual).into()
    }

    pub fn variable(real: f64) -> WasmDual {
        Dual::variable(real).into()
    }

    #[wasm_bindgen(getter)]
    pub fn real(&self) -> f64 {
        self.inner.real
    }

    #[wasm_bindgen(getter)]
    pub fn dual(&self) -> f64 {
        self.inner.dual
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn display(&self) -> String {
        self.inner.to_string()
    }

    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        to_value(&self.inner)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    pub fn add(&self, other: &WasmDual) -> WasmDual {
        (self.inner + other.inner).into()
    }

    pub fn sub(&self, other: &WasmDual) -> WasmDual {
        (self.inner - other.inner).into()
    }

    pub fn mul(&self, other: &WasmDual) -> WasmDual {
        (self.inner * other.inner).into()
    }

    pub fn div(&self, other: &WasmDual) -> Result<WasmDual, JsValue> {
        to_js(checked(self.inner.try_div(other.inner), "division"))
    }

    pub fn neg(&self) -> WasmDual {
        (-self.inner).into()
    }

    pub fn add_scalar(&self, scalar: f64) -> WasmDual {
        (self.inner + scalar).into()
    }

    pub fn sub_scalar(&self, scalar: f64) -> WasmDual {
        (self.inner - scalar).into()
    }

    /// `scalar - self`.
    pub fn rsub_scalar(&self, scalar: f64) -> WasmDual {
        (scalar - self.inner).into()
    }

    pub fn mul_scalar(&self, scalar: f64) -> WasmDual {
        (self.inner * scalar).into()
    }

    pub fn div_scalar(&self, scalar: f64) -> Result<WasmDual, JsValue> {
        to_js(checked(self.inner.try_div_scalar(scalar), "division"))
    }

    /// `scalar / self`.
    pub fn rdiv_scalar(&self, scalar: f64) -> Result<WasmDual, JsValue> {
        to_js(checked(self.inner.try_rdiv(scalar), "division"))
    }

    pub fn sin(&self) -> WasmDual {
        self.inner.sin().into()
    }

    pub fn cos(&self) -> WasmDual {
        self.inner.cos().into()
    }

    pub fn tan(&self) -> Result<WasmDual, JsValue> {
        to_js(checked(self.inner.tan(), "tan"))
    }

    pub fn exp(&self) -> WasmDual {
        self.inner.exp().into()
    }

    pub fn log(&self) -> Result<WasmDual, JsValue> {
        to_js(checked(self.inner.log(), "log"))
    }

    /// JS numbers are all doubles; the exponent must still hold an integer.
    pub fn pow(&self, exponent: f64) -> Result<WasmDual, JsValue> {
        to_js(checked(self.inner.pow(exponent), "pow"))
    }

    pub fn inverse(&self) -> Result<WasmDual, JsValue> {
        to_js(checked(self.inner.inverse(), "inverse"))
    }

    pub fn equals(&self, other: &WasmDual) -> bool {
        self.inner == other.inner
    }

    pub fn equals_scalar(&self, scalar: f64) -> bool {
        self.inner == scalar
    }
}

#[cfg(test)]
mod tests {
    use super::checked;
    use dual_core::Dual;

    #[test]
    fn checked_prefixes_operation_name() {
        let err = checked(Dual::new(0.0, 1.0).log(), "log").expect_err("log should fail");
        let message = format!("{err:#}");
        assert!(message.starts_with("Dual log failed: "), "got \"{message}\"");
        assert!(message.contains("Domain error"), "got \"{message}\"");

        let ok = checked(Dual::new(2.0, 1.0).pow(3), "pow").expect("pow");
        assert_eq!(ok, Dual::new(8.0, 12.0));
    }
}
