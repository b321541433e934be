use anyhow::{anyhow, bail};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

async fn send(request: web::Request) -> anyhow::Result<web::Response> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: web::Response = value.dyn_into().map_err(js_err)?;
    if !response.ok() {
        bail!("{} answered HTTP {}", response.url(), response.status());
    }
    Ok(response)
}

/// `GET url` and return the body as text.
pub async fn get_text(url: &str) -> anyhow::Result<String> {
    let init = web::RequestInit::new();
    init.set_method("GET");
    let request = web::Request::new_with_str_and_init(url, &init).map_err(js_err)?;
    let response = send(request).await?;
    let body = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    body.as_string()
        .ok_or_else(|| anyhow!("{} body is not text", url))
}

/// `POST url` with a JSON body and return the response body as a blob.
pub async fn post_json_for_blob(url: &str, json: &str) -> anyhow::Result<web::Blob> {
    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(json));
    let request = web::Request::new_with_str_and_init(url, &init).map_err(js_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_err)?;
    let response = send(request).await?;
    let blob = JsFuture::from(response.blob().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    blob.dyn_into::<web::Blob>().map_err(js_err)
}
