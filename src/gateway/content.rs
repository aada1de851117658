use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Decodes a contents-API payload. Unknown encodings are passed through as text.
pub fn decode_content(content: &str, encoding: Option<&str>) -> Option<String> {
    match encoding {
        Some(encoding) if encoding.eq_ignore_ascii_case("base64") => {
            let compact: String = content.chars().filter(|ch| !ch.is_whitespace()).collect();
            let bytes = STANDARD.decode(compact.as_bytes()).ok()?;
            String::from_utf8(bytes).ok()
        }
        _ => Some(content.to_string()),
    }
}
