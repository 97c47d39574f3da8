//! Tests for target URL resolution

use keactl::transport::resolve_url;
use keactl::ClientConfig;

#[test]
fn test_hostname_gets_scheme_port_and_path() {
    let config = ClientConfig::default();
    assert_eq!(
        resolve_url(&config, "kea-primary.example.com", None),
        "http://kea-primary.example.com:8000/"
    );
}

#[test]
fn test_explicit_port_is_kept() {
    let config = ClientConfig::default();
    assert_eq!(resolve_url(&config, "10.0.0.1:8080", None), "http://10.0.0.1:8080/");
    assert_eq!(resolve_url(&config, "[::1]:8080", None), "http://[::1]:8080/");
}

#[test]
fn test_ipv6_literal_is_bracketed() {
    let config = ClientConfig::default();
    assert_eq!(resolve_url(&config, "2001:db8::1", None), "http://[2001:db8::1]:8000/");
}

#[test]
fn test_configured_scheme_port_and_path() {
    let config = ClientConfig::builder()
        .scheme("https")
        .port(8443)
        .default_path("/kea")
        .build();

    assert_eq!(resolve_url(&config, "kea", None), "https://kea:8443/kea");
    assert_eq!(resolve_url(&config, "kea", Some("other")), "https://kea:8443/other");
}

#[test]
fn test_target_with_scheme_is_base() {
    let config = ClientConfig::default();
    assert_eq!(
        resolve_url(&config, "https://kea.example.com:9000/", None),
        "https://kea.example.com:9000/"
    );
}
