use std::fmt;

const QR_BIT: u16 = 1 << 15;
const OPCODE_SHIFT: u16 = 11;
const OPCODE_MASK: u16 = 0x0F;
const AA_BIT: u16 = 1 << 10;
const TC_BIT: u16 = 1 << 9;
const RD_BIT: u16 = 1 << 8;
const RA_BIT: u16 = 1 << 7;
const Z_SHIFT: u16 = 4;
const Z_MASK: u16 = 0x07;
const RCODE_MASK: u16 = 0x0F;

/// The 16-bit flag word stored at bytes 2-3 of the header.
///
/// ```text
///  15  14 13 12 11  10  9   8   7   6  5  4   3  2  1  0
/// +---+-----------+---+---+---+---+---------+-----------+
/// |QR |  OPCODE   |AA |TC |RD |RA |    Z    |   RCODE   |
/// +---+-----------+---+---+---+---+---------+-----------+
/// ```
///
/// Setters mask their input to the field width, so a flag word can never
/// carry bits outside the field being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HeaderFlags(u16);

impl HeaderFlags {
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// QR, bit 15: `true` for a response, `false` for a query.
    pub const fn is_response(self) -> bool {
        self.0 & QR_BIT != 0
    }

    /// OPCODE, bits 11-14.
    pub fn opcode(self) -> Opcode {
        Opcode::from(((self.0 >> OPCODE_SHIFT) & OPCODE_MASK) as u8)
    }

    /// AA, bit 10.
    pub const fn authoritative(self) -> bool {
        self.0 & AA_BIT != 0
    }

    /// TC, bit 9.
    pub const fn truncated(self) -> bool {
        self.0 & TC_BIT != 0
    }

    /// RD, bit 8.
    pub const fn recursion_desired(self) -> bool {
        self.0 & RD_BIT != 0
    }

    /// RA, bit 7.
    pub const fn recursion_available(self) -> bool {
        self.0 & RA_BIT != 0
    }

    /// Z, bits 4-6. Reserved, zero in everything this crate writes.
    pub const fn reserved(self) -> u8 {
        ((self.0 >> Z_SHIFT) & Z_MASK) as u8
    }

    /// RCODE, bits 0-3.
    pub fn response_code(self) -> ResponseCode {
        ResponseCode::from((self.0 & RCODE_MASK) as u8)
    }

    pub const fn with_response(self, value: bool) -> Self {
        self.with_bit(QR_BIT, value)
    }

    pub fn with_opcode(self, opcode: Opcode) -> Self {
        let field = (u8::from(opcode) as u16 & OPCODE_MASK) << OPCODE_SHIFT;
        Self((self.0 & !(OPCODE_MASK << OPCODE_SHIFT)) | field)
    }

    pub const fn with_authoritative(self, value: bool) -> Self {
        self.with_bit(AA_BIT, value)
    }

    pub const fn with_truncated(self, value: bool) -> Self {
        self.with_bit(TC_BIT, value)
    }

    pub const fn with_recursion_desired(self, value: bool) -> Self {
        self.with_bit(RD_BIT, value)
    }

    pub const fn with_recursion_available(self, value: bool) -> Self {
        self.with_bit(RA_BIT, value)
    }

    pub const fn with_reserved(self, z: u8) -> Self {
        let field = (z as u16 & Z_MASK) << Z_SHIFT;
        Self((self.0 & !(Z_MASK << Z_SHIFT)) | field)
    }

    pub fn with_response_code(self, rcode: ResponseCode) -> Self {
        let field = u8::from(rcode) as u16 & RCODE_MASK;
        Self((self.0 & !RCODE_MASK) | field)
    }

    const fn with_bit(self, bit: u16, value: bool) -> Self {
        if value {
            Self(self.0 | bit)
        } else {
            Self(self.0 & !bit)
        }
    }
}

impl fmt::Display for HeaderFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} opcode={} rcode={}",
            if self.is_response() { "response" } else { "query" },
            self.opcode(),
            self.response_code()
        )?;
        for (set, name) in [
            (self.authoritative(), "aa"),
            (self.truncated(), "tc"),
            (self.recursion_desired(), "rd"),
            (self.recursion_available(), "ra"),
        ] {
            if set {
                write!(f, " {}", name)?;
            }
        }
        Ok(())
    }
}

/// Kind of query carried in the OPCODE field.
///
/// Values without a named variant are kept in `Other` so that decoding and
/// re-encoding never loses information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Query,
    IQuery,
    Status,
    Notify,
    Update,
    Other(u8),
}

impl Opcode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Opcode::Query => "QUERY",
            Opcode::IQuery => "IQUERY",
            Opcode::Status => "STATUS",
            Opcode::Notify => "NOTIFY",
            Opcode::Update => "UPDATE",
            Opcode::Other(_) => "OTHER",
        }
    }

    /// `true` for a standard query (opcode 0).
    pub fn is_standard_query(&self) -> bool {
        u8::from(*self) == 0
    }
}

impl From<u8> for Opcode {
    fn from(value: u8) -> Self {
        match value {
            0 => Opcode::Query,
            1 => Opcode::IQuery,
            2 => Opcode::Status,
            4 => Opcode::Notify,
            5 => Opcode::Update,
            other => Opcode::Other(other),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> Self {
        match opcode {
            Opcode::Query => 0,
            Opcode::IQuery => 1,
            Opcode::Status => 2,
            Opcode::Notify => 4,
            Opcode::Update => 5,
            Opcode::Other(value) => value,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opcode::Other(value) => write!(f, "OPCODE{}", value),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}

/// Outcome carried in the RCODE field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NxDomain,
    NotImp,
    Refused,
    Other(u8),
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NxDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Other(_) => "OTHER",
        }
    }
}

impl From<u8> for ResponseCode {
    fn from(value: u8) -> Self {
        match value {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NxDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            other => ResponseCode::Other(other),
        }
    }
}

impl From<ResponseCode> for u8 {
    fn from(rcode: ResponseCode) -> Self {
        match rcode {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NxDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Other(value) => value,
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Other(value) => write!(f, "RCODE{}", value),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}
