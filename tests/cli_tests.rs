use cidr_scope::cli::Cli;
use clap::Parser;

#[test]
fn cli_parses_cidr_and_addresses() {
    let args = [
        "cidr-scope",
        "-r",
        "192.168.0.0/24",
        "-i",
        "192.168.0.1",
        "192.168.1.1",
        "-f",
        "json",
        "--concurrency",
        "3",
    ];

    let cli = Cli::parse_from(&args);
    assert_eq!(cli.cidr, "192.168.0.0/24");
    let ips = cli.ip_addresses.expect("ip required");
    assert_eq!(ips, vec!["192.168.0.1".to_string(), "192.168.1.1".to_string()]);
    assert_eq!(cli.output_format, "json".to_string());
    assert_eq!(cli.concurrency, 3usize);
    assert!(!cli.show_range);
    assert!(!cli.debug);
    assert!(cli.file.is_none());
}

#[test]
fn cli_accepts_file_instead_of_addresses() {
    let args = ["cidr-scope", "--cidr", "10.0.0.0/8", "--file", "ips.txt", "--show-range"];
    let cli = Cli::parse_from(&args);
    assert!(cli.ip_addresses.is_none());
    assert_eq!(cli.file.unwrap().to_str(), Some("ips.txt"));
    assert!(cli.show_range);
    assert_eq!(cli.output_format, "txt".to_string());
    assert_eq!(cli.concurrency, 0usize);
}

#[test]
fn cli_requires_cidr_and_some_addresses() {
    assert!(Cli::try_parse_from(["cidr-scope", "-i", "10.0.0.1"]).is_err());
    assert!(Cli::try_parse_from(["cidr-scope", "-r", "10.0.0.0/8"]).is_err());
}
