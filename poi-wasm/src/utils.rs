use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;

/// Resolve an asset path against `window.__BASE_URL` when the host page sets
/// it. Without a base the path is returned unchanged, so relative paths stay
/// relative to the page.
pub fn asset_url(path: &str) -> String {
    let p = path.trim();
    if p.starts_with("http://") || p.starts_with("https://") || p.starts_with("data:") {
        return p.to_string();
    }
    let base = web_sys::window().and_then(|w| {
        let v = Reflect::get(&w, &JsValue::from_str("__BASE_URL")).ok()?;
        v.as_string()
    });
    match base {
        Some(base) => {
            let base = if base.ends_with('/') {
                base
            } else {
                format!("{}/", base)
            };
            format!("{}{}", base, p.trim_start_matches('/'))
        }
        None => p.to_string(),
    }
}

/// Simple query string parser used at start-up.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    let s = search.trim_start_matches('?');
    for pair in s.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next()?;
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(url_decode(v));
        }
    }
    None
}

fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_encoding::percent_decode_str(&s)
        .decode_utf8_lossy()
        .to_string()
}

/// Best-effort text for a thrown JS value.
pub fn describe(v: &JsValue) -> String {
    if let Some(s) = v.as_string() {
        return s;
    }
    Reflect::get(v, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", v))
}

/// Build a plain JS options object from key/value pairs.
pub fn js_object(entries: &[(&str, JsValue)]) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    for (k, v) in entries {
        Reflect::set(&obj, &JsValue::from_str(k), v)?;
    }
    Ok(obj.into())
}

/// `[lat, lng]` as a JS array.
pub fn lat_lng(p: [f64; 2]) -> JsValue {
    Array::of2(&JsValue::from_f64(p[0]), &JsValue::from_f64(p[1])).into()
}

/// `[[south, west], [north, east]]` as nested JS arrays.
pub fn lat_lng_bounds(b: [[f64; 2]; 2]) -> JsValue {
    Array::of2(&lat_lng(b[0]), &lat_lng(b[1])).into()
}
