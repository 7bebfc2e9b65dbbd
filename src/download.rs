use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    DecodeError, Engine as _,
};

use crate::types::GeneratedLogo;

// Browsers accept unpadded data URLs and ignore leftover bits, so we do too.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// A PNG ready to be handed to a save mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoDownload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl LogoDownload {
    pub fn from_logo(logo: &GeneratedLogo, timestamp_ms: i64) -> Result<Self, DecodeError> {
        Ok(Self {
            filename: download_filename(timestamp_ms),
            bytes: decode_image(logo.image())?,
        })
    }
}

pub fn download_filename(timestamp_ms: i64) -> String {
    format!("logo-{timestamp_ms}.png")
}

pub fn decode_image(image: &str) -> Result<Vec<u8>, DecodeError> {
    LENIENT.decode(image.trim())
}

pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Triggers the browser's native save dialog with a temporary object URL.
pub fn save_in_browser(download: &LogoDownload) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let bytes = js_sys::Uint8Array::from(download.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(&download.filename);
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Url::revoke_object_url(&url)
}

/// Writes the file into `dir`, returning the full path.
pub fn save_to_dir(
    download: &LogoDownload,
    dir: &std::path::Path,
) -> std::io::Result<std::path::PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(&download.filename);
    std::fs::write(&path, &download.bytes)?;
    Ok(path)
}
