#![allow(dead_code)]

/// Raw query datagram with a header and `names` as `IN A` questions.
pub fn query_bytes(id: u16, flags: u16, names: &[&str]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(&flags.to_be_bytes());
    buf.extend_from_slice(&(names.len() as u16).to_be_bytes());
    buf.extend_from_slice(&[0, 0, 0, 0, 0, 0]);

    for name in names {
        for label in name.split('.') {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0);
        buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
    }
    buf
}

pub fn read_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([buf[offset], buf[offset + 1]])
}
