//! Host extraction from URL inputs.

use log::debug;

/// Returns the host of `line` when it parses as a URL with a host.
///
/// Lines that do not parse, or parse without a host, are returned as-is so
/// they still produce a record. Lines without a scheme are tried once more
/// with `https://` prepended.
///
/// # Arguments
///
/// * `line` - One input line
pub fn host_from_url(line: &str) -> String {
    if let Some(host) = parse_host(line) {
        return host;
    }
    if !line.contains("://") {
        if let Some(host) = parse_host(&format!("https://{line}")) {
            return host;
        }
    }
    debug!("No host in URL input, using it verbatim: {line}");
    line.to_string()
}

fn parse_host(candidate: &str) -> Option<String> {
    let parsed = url::Url::parse(candidate).ok()?;
    match parsed.host()? {
        // Brackets are part of the serialization, not the address
        url::Host::Ipv6(addr) => Some(addr.to_string()),
        host => Some(host.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_from_url_basic() {
        assert_eq!(host_from_url("https://www.example.com/path"), "www.example.com");
    }

    #[test]
    fn test_host_from_url_port_query_fragment() {
        assert_eq!(
            host_from_url("http://Sub.Example.co.uk:8080/a?b=1#c"),
            "sub.example.co.uk"
        );
    }

    #[test]
    fn test_host_from_url_without_scheme() {
        assert_eq!(host_from_url("www.example.com/index.html"), "www.example.com");
    }

    #[test]
    fn test_host_from_url_without_host() {
        assert_eq!(host_from_url("file:///path/to/file"), "file:///path/to/file");
    }

    #[test]
    fn test_host_from_url_ipv6() {
        assert_eq!(host_from_url("https://[::1]:443/"), "::1");
    }

    #[test]
    fn test_host_from_url_garbage_passes_through() {
        assert_eq!(host_from_url("http://exa mple.com"), "http://exa mple.com");
    }
}
