use app_core::{GradientMap, FALLBACK_GRADIENT_STEPS};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_bytes(window: &web::Window, url: &str) -> anyhow::Result<Vec<u8>> {
    let js = |e: wasm_bindgen::JsValue| anyhow::anyhow!("{:?}", e);
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js)?
        .dyn_into()
        .map_err(js)?;
    if !resp.ok() {
        anyhow::bail!("GET {} -> {}", url, resp.status());
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(js)?)
        .await
        .map_err(js)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch and decode the toon gradient, falling back to a built-in ramp.
pub async fn load_gradient(window: &web::Window, url: &str) -> GradientMap {
    let loaded = match fetch_bytes(window, url).await {
        Ok(bytes) => GradientMap::from_image_bytes(&bytes).map_err(anyhow::Error::from),
        Err(e) => Err(e),
    };
    match loaded {
        Ok(g) => {
            log::info!("[assets] gradient {} ({} steps)", url, g.width());
            g
        }
        Err(e) => {
            log::warn!("[assets] gradient {} unavailable ({}); using built-in ramp", url, e);
            GradientMap::stepped(FALLBACK_GRADIENT_STEPS)
        }
    }
}
