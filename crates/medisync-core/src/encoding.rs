//! Percent-encoding for path segments and query values.

/// Encode a string for use as a single path segment or query value.
///
/// Unreserved characters (RFC 3986) pass through; everything else,
/// including spaces, becomes `%XX`.
pub fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for byte in s.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Decode a percent-encoded query component. `+` is read as a space.
///
/// Malformed escapes are kept literally and invalid UTF-8 is replaced.
pub fn decode_component(s: &str) -> String {
    decode(s, true)
}

/// Decode a percent-encoded path segment. `+` stays literal.
pub fn decode_path_segment(s: &str) -> String {
    decode(s, false)
}

fn decode(s: &str, plus_as_space: bool) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' if plus_as_space => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_category_label() {
        assert_eq!(encode_component("Cold & Flu"), "Cold%20%26%20Flu");
        assert_eq!(encode_component("Pain Relief"), "Pain%20Relief");
        assert_eq!(encode_component("abc-1.2_~"), "abc-1.2_~");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode_component("Pain%20Relief"), "Pain Relief");
        assert_eq!(decode_component("Pain+Relief"), "Pain Relief");
        assert_eq!(decode_component("Cold%20%26%20Flu"), "Cold & Flu");
    }

    #[test]
    fn test_decode_path_segment_keeps_plus() {
        assert_eq!(decode_path_segment("a+b"), "a+b");
        assert_eq!(decode_path_segment("a%2Bb"), "a+b");
        assert_eq!(decode_path_segment("Pain%20Relief"), "Pain Relief");
    }

    #[test]
    fn test_decode_malformed_escape_kept() {
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
        assert_eq!(decode_component("%4"), "%4");
    }

    #[test]
    fn test_roundtrip_non_ascii() {
        let s = "Vitamín C";
        assert_eq!(decode_component(&encode_component(s)), s);
    }
}
