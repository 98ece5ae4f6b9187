use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::{Error, Result};

fn js_message(value: &JsValue) -> String {
	value
		.dyn_ref::<js_sys::Error>()
		.map(|e| String::from(e.message()))
		.or_else(|| value.as_string())
		.unwrap_or_else(|| format!("{value:?}"))
}

/// GETs `url` and returns the body as text. Non-2xx responses are errors.
pub async fn fetch_text(url: &str) -> Result<String> {
	let window = web_sys::window().ok_or(Error::NoWindow)?;
	let failed = |e: JsValue| Error::Fetch {
		url: url.to_string(),
		message: js_message(&e),
	};

	let response: Response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(failed)?
		.dyn_into()
		.map_err(failed)?;
	if !response.ok() {
		return Err(Error::Status {
			url: url.to_string(),
			status: response.status(),
		});
	}

	let body = JsFuture::from(response.text().map_err(failed)?)
		.await
		.map_err(failed)?;
	body.as_string().ok_or_else(|| Error::Decode {
		url: url.to_string(),
		message: "response body is not text".into(),
	})
}

/// GETs `url` and decodes the body as JSON.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T> {
	let text = fetch_text(url).await?;
	decode(url, &text)
}

/// Decodes `text`, tagging failures with the `url` it came from.
pub fn decode<T: DeserializeOwned>(url: &str, text: &str) -> Result<T> {
	serde_json::from_str(text).map_err(|e| Error::Decode {
		url: url.to_string(),
		message: e.to_string(),
	})
}
