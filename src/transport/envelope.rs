use quick_xml::escape::escape;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use serde::Deserialize;

use crate::models::{ReplyMessage, RequestMessage};
use crate::transport::errors::TransportFault;

const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
const WSSE_NS: &str = "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-secext-1.0.xsd";
const PASSWORD_TEXT: &str = "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-username-token-profile-1.0#PasswordText";

#[derive(Debug, Deserialize)]
struct ReplyEnvelope {
    #[serde(rename = "Body")]
    body: ReplyBody
}

#[derive(Debug, Deserialize)]
struct ReplyBody {
    #[serde(rename = "replyMessage", default)]
    reply: Option<ReplyMessage>,
    #[serde(rename = "Fault", default)]
    fault: Option<SoapFault>
}

#[derive(Debug, Deserialize)]
struct SoapFault {
    #[serde(default)]
    faultcode: String,
    #[serde(default)]
    faultstring: String
}

/// Wraps a request in a SOAP 1.1 envelope with a WS-Security `UsernameToken` header.
pub fn render_envelope(username: &str, password: &str, message: &RequestMessage) -> Result<String, TransportFault> {
    let body = quick_xml::se::to_string(message).map_err(TransportFault::xml)?;
    let username = escape(username);
    let password = escape(password);

    Ok(format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope xmlns:soapenv="{SOAP_ENVELOPE_NS}">
<soapenv:Header>
<wsse:Security soapenv:mustUnderstand="1" xmlns:wsse="{WSSE_NS}">
<wsse:UsernameToken>
<wsse:Username>{username}</wsse:Username>
<wsse:Password Type="{PASSWORD_TEXT}">{password}</wsse:Password>
</wsse:UsernameToken>
</wsse:Security>
</soapenv:Header>
<soapenv:Body>
{body}
</soapenv:Body>
</soapenv:Envelope>"#
    ))
}

/// Extracts the `replyMessage` from a SOAP response body.
///
/// # Errors
/// Returns `TransportFault::Soap` when the body carries a SOAP fault, and
/// `TransportFault::Xml` when it is not a recognisable envelope.
pub fn parse_reply(xml: &str) -> Result<ReplyMessage, TransportFault> {
    let stripped = strip_namespaces(xml)?;
    let envelope: ReplyEnvelope = quick_xml::de::from_str(&stripped).map_err(TransportFault::xml)?;

    if let Some(fault) = envelope.body.fault {
        return Err(TransportFault::Soap {
            code: fault.faultcode.trim().to_string(),
            message: fault.faultstring.trim().to_string()
        });
    }

    envelope.body.reply.ok_or_else(|| TransportFault::xml("SOAP body has neither a replyMessage nor a Fault"))
}

/// Rewrites every element and attribute to its local name and drops namespace declarations.
///
/// Prefixes differ between processor environments (`c:`, `soap:`, `SOAP-ENV:`),
/// so the typed reply structs match on local names only.
pub fn strip_namespaces(xml: &str) -> Result<String, TransportFault> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::new());

    loop {
        let event = reader.read_event().map_err(TransportFault::xml)?;

        let written = match event {
            Event::Start(start) => writer.write_event(Event::Start(local_start(&start)?)),
            Event::Empty(start) => writer.write_event(Event::Empty(local_start(&start)?)),
            Event::End(end) => writer.write_event(Event::End(BytesEnd::new(local_text(end.local_name().as_ref())))),
            Event::Eof => break,
            other => writer.write_event(other)
        };

        written.map_err(TransportFault::xml)?;
    }

    String::from_utf8(writer.into_inner()).map_err(TransportFault::xml)
}

fn local_start(start: &BytesStart<'_>) -> Result<BytesStart<'static>, TransportFault> {
    let mut element = BytesStart::new(local_text(start.local_name().as_ref()));

    for attribute in start.attributes() {
        let attribute = attribute.map_err(TransportFault::xml)?;
        let key = attribute.key;

        let is_declaration = key.as_ref() == b"xmlns"
            || key.prefix().is_some_and(|prefix| prefix.as_ref() == b"xmlns");

        if is_declaration {
            continue;
        }

        element.push_attribute((key.local_name().as_ref(), attribute.value.as_ref()));
    }

    Ok(element)
}

fn local_text(name: &[u8]) -> String {
    String::from_utf8_lossy(name).into_owned()
}
