//! XML-RPC request encoder

use super::Value;

/// Encode one method call with its full, fixed-arity parameter list.
///
/// Parameters are written in the exact order given; `Value::Nil` entries
/// become `<nil/>` elements so the server always sees every position.
pub fn encode_request(method: &str, params: &[Value]) -> String {
    let mut out = String::with_capacity(256);
    out.push_str("<?xml version=\"1.0\"?>");
    out.push_str("<methodCall><methodName>");
    escape_into(&mut out, method);
    out.push_str("</methodName><params>");
    for param in params {
        out.push_str("<param>");
        write_value(&mut out, param);
        out.push_str("</param>");
    }
    out.push_str("</params></methodCall>");
    out
}

fn write_value(out: &mut String, value: &Value) {
    out.push_str("<value>");
    match value {
        Value::Nil => out.push_str("<nil/>"),
        Value::Bool(b) => {
            out.push_str("<boolean>");
            out.push(if *b { '1' } else { '0' });
            out.push_str("</boolean>");
        }
        Value::Int(i) => {
            // <int> is 32-bit in XML-RPC; wider values use the <i8> extension
            if i32::try_from(*i).is_ok() {
                out.push_str("<int>");
                out.push_str(&i.to_string());
                out.push_str("</int>");
            } else {
                out.push_str("<i8>");
                out.push_str(&i.to_string());
                out.push_str("</i8>");
            }
        }
        Value::Double(d) => {
            out.push_str("<double>");
            out.push_str(&format!("{:?}", d));
            out.push_str("</double>");
        }
        Value::String(s) => {
            out.push_str("<string>");
            escape_into(out, s);
            out.push_str("</string>");
        }
        Value::Array(items) => {
            out.push_str("<array><data>");
            for item in items {
                write_value(out, item);
            }
            out.push_str("</data></array>");
        }
        Value::Struct(members) => {
            out.push_str("<struct>");
            for (name, member) in members {
                out.push_str("<member><name>");
                escape_into(out, name);
                out.push_str("</name>");
                write_value(out, member);
                out.push_str("</member>");
            }
            out.push_str("</struct>");
        }
    }
    out.push_str("</value>");
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_encode_simple_call() {
        let xml = encode_request("api.getTotalUsers", &[Value::from("token")]);
        assert_eq!(
            xml,
            "<?xml version=\"1.0\"?><methodCall><methodName>api.getTotalUsers</methodName>\
             <params><param><value><string>token</string></value></param></params></methodCall>"
        );
    }

    #[test]
    fn test_encode_fixed_arity_with_nils() {
        let xml = encode_request(
            "api.adjustUserAccountBalance",
            &[
                Value::from("token"),
                Value::from("jsmith"),
                Value::from(-1.5),
                Value::Nil,
                Value::Nil,
            ],
        );
        assert!(xml.contains("<double>-1.5</double>"));
        // both omitted optionals still occupy a wire position
        assert_eq!(xml.matches("<value><nil/></value>").count(), 2);
    }

    #[test]
    fn test_encode_integer_widths() {
        let xml = encode_request("m", &[Value::Int(42), Value::Int(5_000_000_000)]);
        assert!(xml.contains("<int>42</int>"));
        assert!(xml.contains("<i8>5000000000</i8>"));
    }

    #[test]
    fn test_encode_double_keeps_fraction() {
        let xml = encode_request("m", &[Value::Double(2.0)]);
        assert!(xml.contains("<double>2.0</double>"));
    }

    #[test]
    fn test_encode_escapes_markup() {
        let xml = encode_request("m", &[Value::from("a<b&c>d")]);
        assert!(xml.contains("<string>a&lt;b&amp;c&gt;d</string>"));
    }

    #[test]
    fn test_encode_array_and_struct() {
        let mut members = BTreeMap::new();
        members.insert("QuotaAmount".to_string(), Value::Double(10.0));
        let xml = encode_request(
            "m",
            &[
                Value::Array(vec![Value::from("a"), Value::Int(1)]),
                Value::Struct(members),
            ],
        );
        assert!(xml.contains(
            "<array><data><value><string>a</string></value><value><int>1</int></value></data></array>"
        ));
        assert!(xml.contains(
            "<struct><member><name>QuotaAmount</name><value><double>10.0</double></value></member></struct>"
        ));
    }
}
