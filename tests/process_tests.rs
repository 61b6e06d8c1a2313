use cidr_scope::error::{AppError, ValidationError};
use cidr_scope::parse::parse_cidr;
use cidr_scope::process::{check_addresses, is_address_in_cidr, parse_address_lines};

fn check(ip: &str, cidr: &str) -> bool {
    is_address_in_cidr(ip, cidr).unwrap_or_else(|e| panic!("{ip} in {cidr}: {e}"))
}

#[test]
fn documented_scenarios() {
    assert!(check("10.40.255.255", "10.40.255.255/30"));
    // /20 のマスク後は 10.40.240.0 - 10.40.255.255 なので上端として含まれる
    assert!(check("10.40.255.255", "10.40.255.5/20"));
    assert!(check("192.168.0.1", "192.168.0.0/24"));
    assert!(!check("192.168.1.1", "192.168.0.0/24"));
    assert!(check("10.10.0.1", "10.10.0.1"));
    assert!(!check("10.10.0.2", "10.10.0.1"));
    assert!(check("8.8.8.8", "0.0.0.0/0"));
}

#[test]
fn invalid_prefix_is_reported_against_cidr() {
    match is_address_in_cidr("1.2.3.4", "1.2.3.4/35") {
        Err(AppError::InvalidCidr(ValidationError::InvalidPrefixLength(p))) => assert_eq!(p, "35"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn invalid_address_is_reported_against_address() {
    match is_address_in_cidr("256.0.0.1", "10.0.0.0/8") {
        Err(AppError::InvalidAddress(ValidationError::InvalidAddressFormat(a))) => {
            assert_eq!(a, "256.0.0.1")
        }
        other => panic!("unexpected result: {other:?}"),
    }
    // 両方不正な場合はアドレス側が先に報告される
    assert!(matches!(
        is_address_in_cidr("192,168.0.1", "10.10,0.0/32"),
        Err(AppError::InvalidAddress(_))
    ));
}

#[test]
fn malformed_inputs_never_yield_a_boolean() {
    let cases = [
        ("256.0.0.1", "10.0.0.0/8"),
        ("192,168.0.1", "10.0.0.0/8"),
        ("10.0.0.1", "10.10.0.0/33"),
        ("10.0.0.1", "10.10,0.0/32"),
        ("10.0.0.1", "10.0.0.0/8/8"),
        ("10.0.0.1", "/8"),
    ];
    for (ip, cidr) in cases {
        let res = is_address_in_cidr(ip, cidr);
        assert!(res.is_err(), "{ip} in {cidr} should fail");
        assert!(res.err().and_then(|e| e.validation().cloned()).is_some());
    }
}

#[test]
fn check_addresses_keeps_order_and_isolates_errors() {
    let b = parse_cidr("192.168.0.0/24").unwrap_or_else(|e| panic!("{e}"));
    let candidates = vec!["192.168.0.1", "bogus", "192.168.1.1", "192.168.0.255"];
    let results = check_addresses(&b, &candidates);

    let addrs: Vec<&str> = results.iter().map(|r| r.address.as_str()).collect();
    assert_eq!(addrs, candidates);
    assert_eq!(results[0].in_range, Some(true));
    assert!(results[1].is_error());
    assert_eq!(results[1].in_range, None);
    assert_eq!(results[2].in_range, Some(false));
    assert_eq!(results[3].in_range, Some(true));
}

#[test]
fn parse_address_lines_skips_comments_and_blanks() {
    let text = "# header\n10.0.0.1\n\n  10.0.0.2  \n# 10.0.0.3\n\t\n10.0.0.4\n";
    assert_eq!(
        parse_address_lines(text),
        vec!["10.0.0.1".to_string(), "10.0.0.2".to_string(), "10.0.0.4".to_string()]
    );
}
