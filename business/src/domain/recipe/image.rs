use url::Url;

/// Placeholder shown for recipes without a usable image.
pub const FALLBACK_IMAGE_URL: &str =
    "https://placehold.co/345x194/e0e0e0/666666.png?text=No+Image+Available";

/// True when `reference` is an absolute http(s) URL with a host.
pub fn is_renderable(reference: &str) -> bool {
    match Url::parse(reference) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

pub fn sanitize_image(reference: &str) -> String {
    if is_renderable(reference) {
        reference.to_string()
    } else {
        FALLBACK_IMAGE_URL.to_string()
    }
}
