//! Integration tests for dnsendpoint-core.

use std::error::Error as _;

use dnsendpoint_core::prelude::*;

fn endpoint(name: &str, target: &str, record: &str, ttl: i64) -> Endpoint {
    Endpoint::new(name, record, ttl).with_target(target)
}

#[test]
fn valid_endpoint_passes_end_to_end() {
    let resource = DnsEndpoint::new(
        "web",
        DnsEndpointSpec::new([endpoint("example.com", "10.1.2.3", "A", 3600)]),
    );

    assert!(DomainValidator::validate_endpoint(&resource.spec.endpoints[0]).is_ok());
    assert!(DomainValidator::validate_spec(&resource.spec).is_ok());
    assert!(DomainValidator::validate_resource(&resource).is_ok());
}

#[test]
fn invalid_target_is_reported_with_offending_value() {
    let bad = endpoint("example.com", "1111.1.2.3", "CNAME", 1800);
    let err = DomainValidator::validate_endpoint(&bad).unwrap_err();

    assert_eq!(err.kind, ErrorType::Invalid);
    assert_eq!(err.field, "Targets");
    assert_eq!(err.bad_value, BadValue::String("1111.1.2.3".into()));
}

#[test]
fn zero_valued_resource_unwraps_to_required() {
    let err = DomainValidator::validate_resource(&DnsEndpoint::default()).unwrap_err();

    let source = err.source().expect("wrapped field error");
    let field_err = source.downcast_ref::<FieldError>().expect("FieldError");
    assert_eq!(field_err.kind, ErrorType::Required);
    assert_eq!(field_err.field, "Endpoints");
    assert_eq!(field_err.detail, "a list of endpoints");
}

#[test]
fn wrapped_error_message_keeps_field_error_text() {
    let resource = DnsEndpoint::new(
        "web",
        DnsEndpointSpec::new([endpoint("example.com", "10.1.2.3", "MX", 60)]),
    );
    let err = resource.validate().unwrap_err();

    assert_eq!(
        err.to_string(),
        "error validating DNSEndpoint: RecordType: Unsupported value: \"MX\": \
         supported values: A, CNAME, TXT, SRV, NS, PTR"
    );
    assert_eq!(err.into_field_error().kind, ErrorType::NotSupported);
}

#[test]
fn name_error_wins_over_record_type_error() {
    let resource = DnsEndpoint::new(
        "web",
        DnsEndpointSpec::new([endpoint("bad..name", "10.1.2.3", "BOGUS", 60)]),
    );
    let err = resource.validate().unwrap_err();
    assert_eq!(err.field_error().field, "DNSName");
}

#[test]
fn first_failing_endpoint_wins() {
    let spec = DnsEndpointSpec::new([
        endpoint("ok.example.com", "10.0.0.1", "A", 60),
        endpoint("ttl.example.com", "10.0.0.2", "A", -5),
        endpoint("type.example.com", "10.0.0.3", "ZZZ", 60),
    ]);
    let err = DomainValidator::validate_spec(&spec).unwrap_err();

    assert_eq!(err.field, "TTL");
    assert_eq!(err.bad_value, BadValue::Integer(-5));
}

#[test]
fn endpoint_without_targets_is_valid() {
    let spec = DnsEndpointSpec::new([Endpoint::new("txt.example.com", RecordType::Txt, 300)]);
    assert!(DomainValidator::validate_spec(&spec).is_ok());
}

#[test]
fn validation_is_usable_across_threads() {
    let resource = DnsEndpoint::new(
        "web",
        DnsEndpointSpec::new([endpoint("example.com", "10.1.2.3", "A", 3600)]),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let resource = resource.clone();
            std::thread::spawn(move || resource.validate().is_ok())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
