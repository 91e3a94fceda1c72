//! Attorney website

use crate::document::element_text;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

/// An outbound "website"/"visit" link, else the source page's origin
///
/// Links are resolved against the source URL and must be http(s) with a
/// host or port different from the source. Returns `None` only when the
/// source URL itself cannot be parsed or has no host.
pub fn extract_website(
    document: &Html,
    anchors: &Selector,
    source_url: &str,
    link_keywords: &[String],
) -> Option<String> {
    let source = match Url::parse(source_url) {
        Ok(url) => url,
        Err(e) => {
            debug!("Unparseable source URL {:?}: {}", source_url, e);
            return None;
        }
    };

    let outbound = document.select(anchors).find_map(|anchor| {
        let text = element_text(anchor).to_lowercase();
        if !link_keywords.iter().any(|k| text.contains(&k.to_lowercase())) {
            return None;
        }
        let href = anchor.value().attr("href")?;
        let target = source.join(href).ok()?;
        is_external(&source, &target).then(|| target.to_string())
    });

    outbound.or_else(|| origin_of(&source))
}

/// http(s) target on another host (or another port of the same host)
fn is_external(source: &Url, target: &Url) -> bool {
    matches!(target.scheme(), "http" | "https")
        && target.host_str().is_some()
        && (target.host_str() != source.host_str()
            || target.port_or_known_default() != source.port_or_known_default())
}

/// `scheme://host[:port]` of a URL with a tuple origin
fn origin_of(url: &Url) -> Option<String> {
    let origin = url.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}
