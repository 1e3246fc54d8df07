//! XML-RPC response decoder
//!
//! A small recursive-descent parser over the method-response grammar. It
//! accepts the indentation and `<nil/>` extension the server emits, and
//! nothing more exotic than that; anything outside the grammar is a
//! protocol error, never a panic.

use super::{Fault, MethodResponse, Value};
use crate::error::ProtocolError;
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, ProtocolError>;

/// Decode one method response body.
///
/// Returns the result value on success, the server's [`Fault`] verbatim if
/// the call failed remotely, or a [`ProtocolError`] if the payload does not
/// parse as an XML-RPC response at all.
pub fn decode_response(xml: &str) -> Result<MethodResponse> {
    let mut parser = Parser::new(xml);
    parser.skip_prolog();
    parser.expect_open("methodResponse")?;
    parser.skip_ws();

    let tag = parser.read_tag()?;
    let outcome = if tag.is_open("params") {
        if tag.self_closing {
            Ok(Value::Nil)
        } else {
            parser.decode_params()?
        }
    } else if tag.is_open("fault") && !tag.self_closing {
        parser.skip_ws();
        let value = parser.expect_value()?;
        parser.skip_ws();
        parser.expect_close("fault")?;
        Err(fault_from_value(value)?)
    } else {
        return Err(ProtocolError::UnexpectedElement {
            expected: "params".to_string(),
            found: tag.display(),
        });
    };

    parser.skip_ws();
    parser.expect_close("methodResponse")?;
    Ok(outcome)
}

fn fault_from_value(value: Value) -> Result<Fault> {
    let members = match value {
        Value::Struct(members) => members,
        other => {
            return Err(ProtocolError::Malformed {
                reason: format!("fault payload is not a struct: {:?}", other),
            });
        }
    };
    let code = members
        .get("faultCode")
        .and_then(Value::as_i64)
        .ok_or_else(|| ProtocolError::Malformed {
            reason: "fault struct is missing an integer faultCode".to_string(),
        })?;
    let message = members
        .get("faultString")
        .and_then(Value::as_str)
        .ok_or_else(|| ProtocolError::Malformed {
            reason: "fault struct is missing a string faultString".to_string(),
        })?;
    Ok(Fault {
        code: code as i32,
        message: message.to_string(),
    })
}

/// One parsed markup tag.
struct Tag<'a> {
    name: &'a str,
    closing: bool,
    self_closing: bool,
}

impl<'a> Tag<'a> {
    fn is_open(&self, name: &str) -> bool {
        !self.closing && self.name == name
    }

    fn is_close(&self, name: &str) -> bool {
        self.closing && self.name == name
    }

    fn display(&self) -> String {
        if self.closing {
            format!("/{}", self.name)
        } else {
            self.name.to_string()
        }
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_ws(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    /// Skip the XML declaration, if present.
    fn skip_prolog(&mut self) {
        self.skip_ws();
        if self.rest().starts_with("<?") {
            if let Some(end) = self.rest().find("?>") {
                self.pos += end + 2;
            }
        }
        self.skip_ws();
    }

    /// Read the next markup tag; the cursor must sit on `<`.
    fn read_tag(&mut self) -> Result<Tag<'a>> {
        if !self.rest().starts_with('<') {
            return Err(ProtocolError::Malformed {
                reason: "expected an element".to_string(),
            });
        }
        self.pos += 1;

        let closing = self.rest().starts_with('/');
        if closing {
            self.pos += 1;
        }

        let name_start = self.pos;
        while self
            .rest()
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-')
        {
            self.pos += 1;
        }
        let name = &self.input[name_start..self.pos];
        if name.is_empty() {
            return Err(ProtocolError::Malformed {
                reason: "element with empty name".to_string(),
            });
        }

        // Scan past any attributes to the closing bracket
        let mut self_closing = false;
        loop {
            match self.rest().chars().next() {
                Some('>') => {
                    self.pos += 1;
                    break;
                }
                Some('/') if self.rest()[1..].starts_with('>') => {
                    self_closing = true;
                    self.pos += 2;
                    break;
                }
                Some(c) => self.pos += c.len_utf8(),
                None => {
                    return Err(ProtocolError::Unterminated {
                        name: name.to_string(),
                    });
                }
            }
        }

        Ok(Tag {
            name,
            closing,
            self_closing,
        })
    }

    fn expect_open(&mut self, name: &str) -> Result<Tag<'a>> {
        self.skip_ws();
        let tag = self.read_tag()?;
        if tag.is_open(name) {
            Ok(tag)
        } else {
            Err(ProtocolError::UnexpectedElement {
                expected: name.to_string(),
                found: tag.display(),
            })
        }
    }

    fn expect_close(&mut self, name: &str) -> Result<()> {
        let tag = self.read_tag()?;
        if tag.is_close(name) {
            Ok(())
        } else {
            Err(ProtocolError::UnexpectedElement {
                expected: format!("/{}", name),
                found: tag.display(),
            })
        }
    }

    /// Character data up to the next `<`.
    fn take_text(&mut self) -> Result<&'a str> {
        match self.rest().find('<') {
            Some(idx) => {
                let text = &self.rest()[..idx];
                self.pos += idx;
                Ok(text)
            }
            None => Err(ProtocolError::Malformed {
                reason: "unexpected end of document inside character data".to_string(),
            }),
        }
    }

    /// Parse `<params><param><value>..</value></param></params>` after the
    /// opening `<params>` has been consumed. Zero-parameter responses decode
    /// as `Nil`.
    fn decode_params(&mut self) -> Result<MethodResponse> {
        self.skip_ws();
        let tag = self.read_tag()?;
        if tag.is_close("params") {
            return Ok(Ok(Value::Nil));
        }
        if !tag.is_open("param") || tag.self_closing {
            return Err(ProtocolError::UnexpectedElement {
                expected: "param".to_string(),
                found: tag.display(),
            });
        }
        self.skip_ws();
        let value = self.expect_value()?;
        self.skip_ws();
        self.expect_close("param")?;
        self.skip_ws();
        self.expect_close("params")?;
        Ok(Ok(value))
    }

    /// Read a `<value>` element and its payload.
    fn expect_value(&mut self) -> Result<Value> {
        let tag = self.read_tag()?;
        if !tag.is_open("value") {
            return Err(ProtocolError::UnexpectedElement {
                expected: "value".to_string(),
                found: tag.display(),
            });
        }
        if tag.self_closing {
            return Ok(Value::String(String::new()));
        }
        self.parse_value_body()
    }

    /// Parse the payload of a `<value>` whose opening tag has already been
    /// consumed, through its closing tag.
    fn parse_value_body(&mut self) -> Result<Value> {
        let text = self.take_text()?;
        let tag = self.read_tag()?;

        if tag.is_close("value") {
            // untyped value: the bare text is the string payload
            return Ok(Value::String(unescape(text)?));
        }
        if tag.closing {
            return Err(ProtocolError::UnexpectedElement {
                expected: "value payload".to_string(),
                found: tag.display(),
            });
        }
        if !text.trim().is_empty() {
            return Err(ProtocolError::Malformed {
                reason: format!("stray text {:?} before <{}>", text.trim(), tag.name),
            });
        }

        let value = match tag.name {
            "nil" => {
                if !tag.self_closing {
                    self.expect_close("nil")?;
                }
                Value::Nil
            }
            "int" | "i4" | "i8" => {
                let text = self.scalar_text(&tag)?;
                let parsed = text.trim().parse::<i64>().map_err(|_| {
                    ProtocolError::InvalidScalar {
                        kind: tag.name.to_string(),
                        text: text.to_string(),
                    }
                })?;
                Value::Int(parsed)
            }
            "boolean" => {
                let text = self.scalar_text(&tag)?;
                match text.trim() {
                    "1" | "true" => Value::Bool(true),
                    "0" | "false" => Value::Bool(false),
                    other => {
                        return Err(ProtocolError::InvalidScalar {
                            kind: "boolean".to_string(),
                            text: other.to_string(),
                        });
                    }
                }
            }
            "double" => {
                let text = self.scalar_text(&tag)?;
                let parsed = text.trim().parse::<f64>().map_err(|_| {
                    ProtocolError::InvalidScalar {
                        kind: "double".to_string(),
                        text: text.to_string(),
                    }
                })?;
                Value::Double(parsed)
            }
            // dates and binary blobs do not occur in the admin API; carry
            // their text through untouched
            "string" | "dateTime.iso8601" | "base64" => {
                if tag.self_closing {
                    Value::String(String::new())
                } else {
                    let text = self.take_text()?;
                    self.expect_close(tag.name)?;
                    Value::String(unescape(text)?)
                }
            }
            "array" => {
                if tag.self_closing {
                    Value::Array(Vec::new())
                } else {
                    self.parse_array_body()?
                }
            }
            "struct" => {
                if tag.self_closing {
                    Value::Struct(BTreeMap::new())
                } else {
                    self.parse_struct_body()?
                }
            }
            other => {
                return Err(ProtocolError::Malformed {
                    reason: format!("unknown value element <{}>", other),
                });
            }
        };

        self.skip_ws();
        self.expect_close("value")?;
        Ok(value)
    }

    /// Character data of a scalar element, consuming its closing tag.
    fn scalar_text(&mut self, tag: &Tag<'a>) -> Result<&'a str> {
        if tag.self_closing {
            return Err(ProtocolError::InvalidScalar {
                kind: tag.name.to_string(),
                text: String::new(),
            });
        }
        let text = self.take_text()?;
        self.expect_close(tag.name)?;
        Ok(text)
    }

    /// Parse `<data>..</data></array>` after the opening `<array>`.
    fn parse_array_body(&mut self) -> Result<Value> {
        self.skip_ws();
        let data = self.read_tag()?;
        if !data.is_open("data") {
            return Err(ProtocolError::UnexpectedElement {
                expected: "data".to_string(),
                found: data.display(),
            });
        }

        let mut items = Vec::new();
        if !data.self_closing {
            loop {
                self.skip_ws();
                let tag = self.read_tag()?;
                if tag.is_close("data") {
                    break;
                }
                if tag.is_open("value") {
                    if tag.self_closing {
                        items.push(Value::String(String::new()));
                    } else {
                        items.push(self.parse_value_body()?);
                    }
                } else {
                    return Err(ProtocolError::UnexpectedElement {
                        expected: "value".to_string(),
                        found: tag.display(),
                    });
                }
            }
        }

        self.skip_ws();
        self.expect_close("array")?;
        Ok(Value::Array(items))
    }

    /// Parse struct members after the opening `<struct>`.
    fn parse_struct_body(&mut self) -> Result<Value> {
        let mut members = BTreeMap::new();
        loop {
            self.skip_ws();
            let tag = self.read_tag()?;
            if tag.is_close("struct") {
                break;
            }
            if !tag.is_open("member") || tag.self_closing {
                return Err(ProtocolError::UnexpectedElement {
                    expected: "member".to_string(),
                    found: tag.display(),
                });
            }

            let name_tag = self.expect_open("name")?;
            let name = if name_tag.self_closing {
                String::new()
            } else {
                let text = self.take_text()?;
                self.expect_close("name")?;
                unescape(text)?
            };

            self.skip_ws();
            let value = self.expect_value()?;
            self.skip_ws();
            self.expect_close("member")?;
            members.insert(name, value);
        }
        Ok(Value::Struct(members))
    }
}

/// Resolve character references in text content.
fn unescape(text: &str) -> Result<String> {
    if !text.contains('&') {
        return Ok(text.to_string());
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];
        let end = rest.find(';').ok_or_else(|| ProtocolError::Malformed {
            reason: "unterminated character reference".to_string(),
        })?;
        let entity = &rest[1..end];
        match entity {
            "amp" => out.push('&'),
            "lt" => out.push('<'),
            "gt" => out.push('>'),
            "quot" => out.push('"'),
            "apos" => out.push('\''),
            _ => {
                let code = if let Some(hex) = entity.strip_prefix("#x") {
                    u32::from_str_radix(hex, 16).ok()
                } else if let Some(dec) = entity.strip_prefix('#') {
                    dec.parse::<u32>().ok()
                } else {
                    None
                };
                match code.and_then(char::from_u32) {
                    Some(c) => out.push(c),
                    None => {
                        return Err(ProtocolError::Malformed {
                            reason: format!("unknown character reference &{};", entity),
                        });
                    }
                }
            }
        }
        rest = &rest[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_int_result() {
        let xml = "<?xml version=\"1.0\"?>\n<methodResponse>\n  <params>\n    <param>\n      <value><int>274</int></value>\n    </param>\n  </params>\n</methodResponse>";
        let response = decode_response(xml).unwrap();
        assert_eq!(response, Ok(Value::Int(274)));
    }

    #[test]
    fn test_decode_untyped_value_is_string() {
        let xml = "<methodResponse><params><param><value>free printing</value></param></params></methodResponse>";
        assert_eq!(
            decode_response(xml).unwrap(),
            Ok(Value::String("free printing".to_string()))
        );
    }

    #[test]
    fn test_decode_empty_string_value() {
        let xml = "<methodResponse><params><param><value></value></param></params></methodResponse>";
        assert_eq!(
            decode_response(xml).unwrap(),
            Ok(Value::String(String::new()))
        );
    }

    #[test]
    fn test_decode_nil_result() {
        let xml = "<methodResponse><params><param><value><nil/></value></param></params></methodResponse>";
        assert_eq!(decode_response(xml).unwrap(), Ok(Value::Nil));
    }

    #[test]
    fn test_decode_boolean_and_double() {
        let xml = "<methodResponse><params><param><value><boolean>1</boolean></value></param></params></methodResponse>";
        assert_eq!(decode_response(xml).unwrap(), Ok(Value::Bool(true)));

        let xml = "<methodResponse><params><param><value><double>-12.75</double></value></param></params></methodResponse>";
        assert_eq!(decode_response(xml).unwrap(), Ok(Value::Double(-12.75)));
    }

    #[test]
    fn test_decode_wide_integer() {
        let xml = "<methodResponse><params><param><value><i8>5000000000</i8></value></param></params></methodResponse>";
        assert_eq!(decode_response(xml).unwrap(), Ok(Value::Int(5_000_000_000)));
    }

    #[test]
    fn test_decode_array_of_names() {
        let xml = "<methodResponse><params><param><value><array><data>\
                   <value><string>alice</string></value>\
                   <value><string>bob</string></value>\
                   </data></array></value></param></params></methodResponse>";
        assert_eq!(
            decode_response(xml).unwrap(),
            Ok(Value::Array(vec![
                Value::String("alice".to_string()),
                Value::String("bob".to_string()),
            ]))
        );
    }

    #[test]
    fn test_decode_task_status_struct() {
        let xml = "<methodResponse><params><param><value><struct>\
                   <member><name>completed</name><value><boolean>0</boolean></value></member>\
                   <member><name>message</name><value><string>still syncing</string></value></member>\
                   </struct></value></param></params></methodResponse>";
        let response = decode_response(xml).unwrap().unwrap();
        let members = response.as_struct().unwrap();
        assert_eq!(members["completed"], Value::Bool(false));
        assert_eq!(members["message"], Value::String("still syncing".to_string()));
    }

    #[test]
    fn test_decode_fault_verbatim() {
        let xml = "<methodResponse><fault><value><struct>\
                   <member><name>faultCode</name><value><int>-32601</int></value></member>\
                   <member><name>faultString</name><value><string>no such user: ghost</string></value></member>\
                   </struct></value></fault></methodResponse>";
        let fault = decode_response(xml).unwrap().unwrap_err();
        assert_eq!(fault.code, -32601);
        assert_eq!(fault.message, "no such user: ghost");
    }

    #[test]
    fn test_decode_empty_params_is_nil() {
        let xml = "<methodResponse><params></params></methodResponse>";
        assert_eq!(decode_response(xml).unwrap(), Ok(Value::Nil));
    }

    #[test]
    fn test_decode_unescapes_references() {
        let xml = "<methodResponse><params><param><value><string>a &amp; b &lt;c&gt; &#65;</string></value></param></params></methodResponse>";
        assert_eq!(
            decode_response(xml).unwrap(),
            Ok(Value::String("a & b <c> A".to_string()))
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_response("this is not xml").is_err());
        assert!(decode_response("<methodResponse><params>").is_err());
    }

    #[test]
    fn test_decode_rejects_bad_scalar() {
        let xml = "<methodResponse><params><param><value><int>twelve</int></value></param></params></methodResponse>";
        let err = decode_response(xml).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidScalar { .. }));
    }
}
