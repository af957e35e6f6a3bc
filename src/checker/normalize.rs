/// Normalizes a node URL to the base the REST API expects, i.e. ending in `/v1` and not `/v1/view`.
///
/// Only one trailing slash is removed. No URL validation happens here.
pub fn normalize_node_url(url: &str) -> String {
    let url = url.trim();
    let url = url.strip_suffix('/').unwrap_or(url);

    // `/v1/view` and a bare `/view` both lose the `/view` part
    url.strip_suffix("/view").unwrap_or(url).to_string()
}
