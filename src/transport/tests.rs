use super::{parse_reply, render_envelope, strip_namespaces, SoapTransport, Transport, TransportFault};

use anyhow::{anyhow, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::builder::RequestBuilder;
use crate::config::CyberSourceConfig;
use crate::models::{AuthExtensions, AuthorizationDetails, BillTo, Card, Decision, Payment, ReplyMessage, ServiceRequest};

const NAMESPACE: &str = "urn:schemas-cybersource-com:transaction-data-1.121";

const AUTH_REPLY: &str = r#"<?xml version="1.0" encoding="utf-8"?><soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Header><wsse:Security xmlns:wsse="http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-secext-1.0.xsd"><wsu:Timestamp xmlns:wsu="http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-utility-1.0.xsd" wsu:Id="Timestamp-1"><wsu:Created>2024-03-01T10:00:00.000Z</wsu:Created></wsu:Timestamp></wsse:Security></soap:Header><soap:Body><c:replyMessage xmlns:c="urn:schemas-cybersource-com:transaction-data-1.121"><c:merchantReferenceCode>12345</c:merchantReferenceCode><c:requestID>6254826093720176056470</c:requestID><c:decision>ACCEPT</c:decision><c:reasonCode>100</c:reasonCode><c:requestToken>Ahj/7wSTKhPmLp</c:requestToken><c:purchaseTotals><c:currency>USD</c:currency></c:purchaseTotals><c:ccAuthReply><c:reasonCode>100</c:reasonCode><c:amount>99.99</c:amount><c:authorizationCode>888888</c:authorizationCode><c:avsCode>X</c:avsCode><c:avsCodeRaw>I1</c:avsCodeRaw><c:cvCode>M</c:cvCode><c:authorizedDateTime>2024-03-01T10:00:00Z</c:authorizedDateTime><c:processorResponse>100</c:processorResponse><c:reconciliationID>74512360XYZ</c:reconciliationID></c:ccAuthReply></c:replyMessage></soap:Body></soap:Envelope>"#;

const AVS_REPLY: &str = r#"<?xml version="1.0" encoding="utf-8"?><soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Header/><soap:Body><c:replyMessage xmlns:c="urn:schemas-cybersource-com:transaction-data-1.121"><c:merchantReferenceCode>777</c:merchantReferenceCode><c:requestID>6254826093720176056471</c:requestID><c:decision>REJECT</c:decision><c:reasonCode>200</c:reasonCode><c:ccAuthReply><c:reasonCode>200</c:reasonCode><c:amount>2836.00</c:amount><c:avsCode>N</c:avsCode></c:ccAuthReply></c:replyMessage></soap:Body></soap:Envelope>"#;

const INVALID_FIELD_REPLY: &str = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body><c:replyMessage xmlns:c="urn:schemas-cybersource-com:transaction-data-1.121"><c:requestID>6254826093720176056472</c:requestID><c:decision>REJECT</c:decision><c:reasonCode>102</c:reasonCode><c:invalidField>c:purchaseTotals/c:grandTotalAmount</c:invalidField></c:replyMessage></soap:Body></soap:Envelope>"#;

const FAULT_REPLY: &str = r#"<?xml version="1.0" encoding="utf-8"?><soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Header/><soap:Body><soap:Fault xmlns:c="urn:schemas-cybersource-com:transaction-data-1.0"><faultcode>wsse:FailedCheck</faultcode><faultstring>Security Data : UsernameToken authentication failed.</faultstring></soap:Fault></soap:Body></soap:Envelope>"#;

fn create_auth_request() -> Result<ServiceRequest> {
    Ok(ServiceRequest::Auth(AuthorizationDetails {
        payment: Payment::new("USD", "99.99")?,
        card: Card::new("4111111111111111", "05", "2018").with_cv_number("123"),
        bill_to: BillTo {
            first_name: "Bob".to_string(),
            last_name: "Oblaw".to_string(),
            email: "test@test.blah".to_string(),
            country: "US".to_string(),
            state: "CA".to_string(),
            city: "Los Angeles".to_string(),
            postal_code: "90042".to_string(),
            street1: "555 Test St".to_string(),
            street2: None
        },
        extensions: AuthExtensions::default()
    }))
}

fn position(haystack: &str, needle: &str) -> Result<usize> {
    haystack.find(needle).ok_or_else(|| anyhow!("[{needle}] not found in envelope"))
}

#[test]
fn test_envelope_carries_username_token_and_request_body() -> Result<()> {
    let message = RequestBuilder::new("test_merchant", NAMESPACE).build("12345", &create_auth_request()?);
    let envelope = render_envelope("test_merchant", "k3y&<secret>", &message)?;

    assert!(envelope.contains("<wsse:Username>test_merchant</wsse:Username>"));
    assert!(envelope.contains("k3y&amp;&lt;secret&gt;</wsse:Password>"));
    assert!(envelope.contains("#PasswordText\">"));
    assert!(envelope.contains(&format!("<requestMessage xmlns=\"{NAMESPACE}\">")));
    assert!(envelope.contains("<merchantID>test_merchant</merchantID>"));
    assert!(envelope.contains("<merchantReferenceCode>12345</merchantReferenceCode>"));
    assert!(envelope.contains("<grandTotalAmount>99.99</grandTotalAmount>"));
    assert!(envelope.contains("<cvIndicator>1</cvIndicator>"));
    assert!(envelope.contains("<ccAuthService run=\"true\""));
    assert!(!envelope.contains("street2"));
    assert!(!envelope.contains("ccCaptureService"));

    Ok(())
}

#[test]
fn test_envelope_keeps_schema_element_order() -> Result<()> {
    let message = RequestBuilder::new("test_merchant", NAMESPACE).build("12345", &create_auth_request()?);
    let envelope = render_envelope("test_merchant", "key", &message)?;

    let merchant = position(&envelope, "<merchantID>")?;
    let reference = position(&envelope, "<merchantReferenceCode>")?;
    let bill_to = position(&envelope, "<billTo>")?;
    let totals = position(&envelope, "<purchaseTotals>")?;
    let card = position(&envelope, "<card>")?;
    let service = position(&envelope, "<ccAuthService")?;

    assert!(merchant < reference);
    assert!(reference < bill_to);
    assert!(bill_to < totals);
    assert!(totals < card);
    assert!(card < service);

    Ok(())
}

#[test]
fn test_void_envelope_references_prior_request() -> Result<()> {
    let message = RequestBuilder::new("test_merchant", NAMESPACE)
        .build("12345", &ServiceRequest::Void { request_id: "6254826093720176056470".to_string() });
    let envelope = render_envelope("test_merchant", "key", &message)?;

    assert!(envelope.contains("<voidService run=\"true\"><voidRequestID>6254826093720176056470</voidRequestID></voidService>"));
    assert!(!envelope.contains("purchaseTotals"));

    Ok(())
}

#[test]
fn test_parse_reply_reads_prefixed_auth_reply() -> Result<()> {
    let reply = parse_reply(AUTH_REPLY)?;

    assert_eq!(reply.request_id, "6254826093720176056470");
    assert_eq!(reply.decision, Decision::Accept);
    assert_eq!(reply.reason_code, 100);
    assert_eq!(reply.merchant_reference_code.as_deref(), Some("12345"));
    assert_eq!(reply.request_token.as_deref(), Some("Ahj/7wSTKhPmLp"));

    let auth_reply = reply.cc_auth_reply.ok_or_else(|| anyhow!("ccAuthReply missing"))?;

    assert_eq!(auth_reply.amount.map(|amount| amount.to_string()).as_deref(), Some("99.99"));
    assert_eq!(auth_reply.authorization_code.as_deref(), Some("888888"));
    assert_eq!(auth_reply.reconciliation_id.as_deref(), Some("74512360XYZ"));
    assert!(reply.cc_capture_reply.is_none());

    Ok(())
}

#[test]
fn test_parse_reply_reads_avs_decline() -> Result<()> {
    let reply = parse_reply(AVS_REPLY)?;

    assert_eq!(reply.decision, Decision::Reject);
    assert_eq!(reply.reason_code, 200);
    assert_eq!(reply.cc_auth_reply.and_then(|block| block.avs_code).as_deref(), Some("N"));

    Ok(())
}

#[test]
fn test_parse_reply_collects_invalid_fields() -> Result<()> {
    let reply = parse_reply(INVALID_FIELD_REPLY)?;

    assert_eq!(reply.reason_code, 102);
    assert_eq!(reply.invalid_field, vec!["c:purchaseTotals/c:grandTotalAmount".to_string()]);
    assert!(reply.missing_field.is_empty());

    Ok(())
}

#[test]
fn test_parse_reply_turns_soap_fault_into_transport_fault() {
    let result = parse_reply(FAULT_REPLY);

    match result {
        Err(TransportFault::Soap { code, message }) => {
            assert_eq!(code, "wsse:FailedCheck");
            assert_eq!(message, "Security Data : UsernameToken authentication failed.");
        }
        other => panic!("expected a SOAP fault, got {other:?}")
    }
}

#[test]
fn test_parse_reply_rejects_non_envelopes() {
    assert!(matches!(parse_reply("<html><body>Bad Gateway</body></html>"), Err(TransportFault::Xml(_))));
    assert!(matches!(parse_reply("not xml at all <"), Err(TransportFault::Xml(_))));
}

#[test]
fn test_strip_namespaces_keeps_structure_and_text() -> Result<()> {
    let stripped = strip_namespaces(r#"<a:root xmlns:a="urn:a" xmlns="urn:default" a:id="7"><a:child>x &amp; y</a:child><a:empty/></a:root>"#)?;

    assert_eq!(stripped, r#"<root id="7"><child>x &amp; y</child><empty/></root>"#);

    Ok(())
}

#[test]
fn test_soap_transport_is_built_from_config() -> Result<()> {
    let config = CyberSourceConfig::new("merchant", "secret-key");
    let transport = SoapTransport::new(&config)?;

    assert_eq!(transport.endpoint().as_str(), config.endpoint);
    assert!(!format!("{transport:?}").contains("secret-key"));

    Ok(())
}

#[test]
fn test_soap_transport_rejects_unparseable_endpoint() {
    let config = CyberSourceConfig::new("merchant", "key").with_endpoint("::not a url::");

    assert!(matches!(SoapTransport::new(&config), Err(TransportFault::Endpoint(_))));
}

#[test]
fn test_status_fault_truncates_large_bodies() {
    let body = "x".repeat(2048);

    match TransportFault::status(502, &body) {
        TransportFault::Status { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body.len(), 515);
            assert!(body.ends_with("..."));
        }
        other => panic!("expected a status fault, got {other:?}")
    }
}

async fn answer_once(listener: TcpListener, status: &'static str, body: &'static str) -> Result<String> {
    let (mut socket, _) = listener.accept().await?;
    let mut received = Vec::new();
    let mut chunk = [0u8; 4096];

    while !String::from_utf8_lossy(&received).contains("</soapenv:Envelope>") {
        let read = socket.read(&mut chunk).await?;

        if read == 0 {
            break;
        }

        received.extend_from_slice(&chunk[..read]);
    }

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/xml; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await?;

    Ok(String::from_utf8(received)?)
}

async fn exchange(status: &'static str, body: &'static str) -> Result<(Result<ReplyMessage, TransportFault>, String)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let endpoint = format!("http://{}/commerce/1.x/transactionProcessor", listener.local_addr()?);
    let server = tokio::spawn(answer_once(listener, status, body));

    let config = CyberSourceConfig::new("test_merchant", "test_key").with_endpoint(endpoint);
    let transport = SoapTransport::new(&config)?;
    let message = RequestBuilder::new("test_merchant", NAMESPACE)
        .build("12345", &ServiceRequest::Void { request_id: "6254826093720176056470".to_string() });

    let outcome = transport.run_transaction(&message).await;
    let request = server.await??;

    Ok((outcome, request))
}

#[tokio::test]
async fn test_soap_transport_posts_envelope_and_reads_reply() -> Result<()> {
    let (outcome, request) = exchange("200 OK", AUTH_REPLY).await?;
    let reply = outcome?;

    assert_eq!(reply.decision, Decision::Accept);
    assert_eq!(reply.request_id, "6254826093720176056470");

    let request = request.to_lowercase();

    assert!(request.starts_with("post /commerce/1.x/transactionprocessor"));
    assert!(request.contains("soapaction: runtransaction"));
    assert!(request.contains("content-type: text/xml; charset=utf-8"));
    assert!(request.contains("<wsse:username>test_merchant</wsse:username>"));

    Ok(())
}

#[tokio::test]
async fn test_soap_transport_surfaces_fault_behind_server_error() -> Result<()> {
    let (outcome, _) = exchange("500 Internal Server Error", FAULT_REPLY).await?;

    match outcome {
        Err(TransportFault::Soap { code, message }) => {
            assert_eq!(code, "wsse:FailedCheck");
            assert_eq!(message, "Security Data : UsernameToken authentication failed.");
        }
        other => return Err(anyhow!("expected a SOAP fault, got {other:?}"))
    }

    Ok(())
}

#[tokio::test]
async fn test_soap_transport_reports_status_for_non_xml_errors() -> Result<()> {
    let (outcome, _) = exchange("502 Bad Gateway", "<html><body>Bad Gateway</body></html>").await?;

    match outcome {
        Err(TransportFault::Status { status, body }) => {
            assert_eq!(status, 502);
            assert_eq!(body, "<html><body>Bad Gateway</body></html>");
        }
        other => return Err(anyhow!("expected a status fault, got {other:?}"))
    }

    Ok(())
}

#[tokio::test]
async fn test_soap_transport_reports_status_when_reply_arrives_with_error_status() -> Result<()> {
    let (outcome, _) = exchange("503 Service Unavailable", AUTH_REPLY).await?;

    assert!(matches!(outcome, Err(TransportFault::Status { status: 503, .. })));

    Ok(())
}

#[tokio::test]
async fn test_soap_transport_rejects_garbage_with_success_status() -> Result<()> {
    let (outcome, _) = exchange("200 OK", "definitely not a soap envelope").await?;

    assert!(matches!(outcome, Err(TransportFault::Xml(_))));

    Ok(())
}
