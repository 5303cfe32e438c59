//! Named-parameter protocol shared with the host framework
//!
//! A [`ParamSet`] is an ordered list of named, typed values. Getters receive a
//! set of *request slots* ([`Param::request`]) and fill the ones they know;
//! setters and importers read the values they recognise and ignore the rest.
//! Octet strings are held in [`Zeroizing`] buffers because private keys travel
//! through them.

use core::fmt;
use std::borrow::Cow;
use zeroize::Zeroizing;

/// Strength of the key in bits
pub const PARAM_BITS: &str = "bits";
/// Classical-equivalent security bits
pub const PARAM_SECURITY_BITS: &str = "security-bits";
/// Largest signature or ciphertext the key can produce
pub const PARAM_MAX_SIZE: &str = "max-size";
/// Public key in the algorithm's wire encoding
pub const PARAM_ENCODED_PUBLIC_KEY: &str = "encoded-pub-key";
/// Raw public key
pub const PARAM_PUB_KEY: &str = "pub";
/// Raw private key
pub const PARAM_PRIV_KEY: &str = "priv";
/// Property query string
pub const PARAM_PROPERTIES: &str = "properties";
/// TLS group name
pub const PARAM_GROUP_NAME: &str = "group";

/// Value kinds understood by the protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Signed integer
    Int,
    /// UTF-8 string
    Utf8,
    /// Byte string
    Octets,
}

/// Entry of a gettable/settable table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamDescriptor {
    /// Parameter name
    pub key: &'static str,
    /// Expected value kind
    pub kind: ParamKind,
}

impl ParamDescriptor {
    /// Describe a parameter
    pub const fn new(key: &'static str, kind: ParamKind) -> Self {
        Self { key, kind }
    }
}

/// A parameter value
#[derive(Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Request slot not yet filled
    Unset,
    /// Signed integer
    Int(i64),
    /// UTF-8 string
    Utf8(String),
    /// Byte string, zeroized on drop
    Octets(Zeroizing<Vec<u8>>),
}

impl ParamValue {
    /// Kind of a filled value
    pub fn kind(&self) -> Option<ParamKind> {
        match self {
            Self::Unset => None,
            Self::Int(_) => Some(ParamKind::Int),
            Self::Utf8(_) => Some(ParamKind::Utf8),
            Self::Octets(_) => Some(ParamKind::Octets),
        }
    }
}

impl fmt::Debug for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "Unset"),
            Self::Int(v) => write!(f, "Int({})", v),
            Self::Utf8(s) => write!(f, "Utf8({:?})", s),
            Self::Octets(b) => write!(f, "Octets(len={})", b.len()),
        }
    }
}

/// A single named parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    key: Cow<'static, str>,
    value: ParamValue,
    modified: bool,
}

impl Param {
    /// An empty request slot for a getter to fill
    pub fn request(key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key: key.into(),
            value: ParamValue::Unset,
            modified: false,
        }
    }

    /// An integer parameter
    pub fn int(key: impl Into<Cow<'static, str>>, value: i64) -> Self {
        Self::with_value(key, ParamValue::Int(value))
    }

    /// A UTF-8 string parameter
    pub fn utf8(key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self::with_value(key, ParamValue::Utf8(value.into()))
    }

    /// An octet-string parameter; the bytes are copied
    pub fn octets(key: impl Into<Cow<'static, str>>, value: &[u8]) -> Self {
        Self::with_value(key, ParamValue::Octets(Zeroizing::new(value.to_vec())))
    }

    fn with_value(key: impl Into<Cow<'static, str>>, value: ParamValue) -> Self {
        Self {
            key: key.into(),
            value,
            modified: false,
        }
    }

    /// Parameter name
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current value
    pub fn value(&self) -> &ParamValue {
        &self.value
    }

    /// True once a getter has written to this slot
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Integer value, if this is an integer
    pub fn as_int(&self) -> Option<i64> {
        match self.value {
            ParamValue::Int(v) => Some(v),
            _ => None,
        }
    }

    /// String value, if this is a UTF-8 string
    pub fn as_utf8(&self) -> Option<&str> {
        match &self.value {
            ParamValue::Utf8(s) => Some(s),
            _ => None,
        }
    }

    /// Byte value, if this is an octet string
    pub fn as_octets(&self) -> Option<&[u8]> {
        match &self.value {
            ParamValue::Octets(b) => Some(b),
            _ => None,
        }
    }

    /// Fill with an integer
    pub fn set_int(&mut self, value: i64) {
        self.value = ParamValue::Int(value);
        self.modified = true;
    }

    /// Fill with a copy of `value`; any previous bytes are zeroized
    pub fn set_octets(&mut self, value: &[u8]) {
        self.value = ParamValue::Octets(Zeroizing::new(value.to_vec()));
        self.modified = true;
    }
}

/// Ordered list of parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSet {
    params: Vec<Param>,
}

impl ParamSet {
    /// An empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// A set of empty request slots
    pub fn requesting(keys: &[&'static str]) -> Self {
        keys.iter().map(|&key| Param::request(key)).collect()
    }

    /// Append a parameter
    pub fn push(&mut self, param: Param) {
        self.params.push(param);
    }

    /// First parameter with the given name
    pub fn locate(&self, key: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.key() == key)
    }

    /// First parameter with the given name, mutably
    pub fn locate_mut(&mut self, key: &str) -> Option<&mut Param> {
        self.params.iter_mut().find(|p| p.key() == key)
    }

    /// Iterate over the parameters
    pub fn iter(&self) -> impl Iterator<Item = &Param> {
        self.params.iter()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// True if the set holds no parameter
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl FromIterator<Param> for ParamSet {
    fn from_iter<I: IntoIterator<Item = Param>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Param>> for ParamSet {
    fn from(params: Vec<Param>) -> Self {
        Self { params }
    }
}

impl<'a> IntoIterator for &'a ParamSet {
    type Item = &'a Param;
    type IntoIter = core::slice::Iter<'a, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

/// Incremental builder for a [`ParamSet`]
///
/// Nothing is visible to a consumer until [`ParamSetBuilder::build`] hands
/// over the finished set, so a failed export never leaks a partial set.
#[derive(Debug, Default)]
pub struct ParamSetBuilder {
    params: Vec<Param>,
}

impl ParamSetBuilder {
    /// An empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an octet string
    pub fn push_octets(&mut self, key: &'static str, value: &[u8]) -> &mut Self {
        self.params.push(Param::octets(key, value));
        self
    }

    /// Finish the set
    pub fn build(self) -> ParamSet {
        ParamSet {
            params: self.params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_request_slots_fill() {
        let mut set = ParamSet::requesting(&[PARAM_BITS, PARAM_PUB_KEY]);
        assert!(!set.locate(PARAM_BITS).unwrap().is_modified());

        set.locate_mut(PARAM_BITS).unwrap().set_int(192);
        set.locate_mut(PARAM_PUB_KEY).unwrap().set_octets(&[1, 2, 3]);

        assert_eq!(set.locate(PARAM_BITS).unwrap().as_int(), Some(192));
        assert_eq!(set.locate(PARAM_PUB_KEY).unwrap().as_octets(), Some(&[1u8, 2, 3][..]));
        assert!(set.locate(PARAM_PRIV_KEY).is_none());
    }

    #[test]
    fn test_typed_accessors_reject_other_kinds() {
        let p = Param::utf8(PARAM_PROPERTIES, "provider=pqkm");
        assert_eq!(p.as_utf8(), Some("provider=pqkm"));
        assert_eq!(p.as_octets(), None);
        assert_eq!(p.as_int(), None);
        assert_eq!(p.value().kind(), Some(ParamKind::Utf8));
        assert_eq!(Param::request("x").value().kind(), None);
    }

    #[test]
    fn test_octets_debug_is_redacted() {
        let p = Param::octets(PARAM_PRIV_KEY, &[0xAA; 32]);
        let dbg = format!("{:?}", p);
        assert!(dbg.contains("Octets(len=32)"));
        assert!(!dbg.contains("170"));
    }

    #[test]
    fn test_builder_preserves_order() {
        let mut builder = ParamSetBuilder::new();
        builder
            .push_octets(PARAM_PUB_KEY, &[1])
            .push_octets(PARAM_PRIV_KEY, &[2])
            .push_octets(PARAM_ENCODED_PUBLIC_KEY, &[3]);
        let set = builder.build();
        let keys: Vec<&str> = set.iter().map(Param::key).collect();
        assert_eq!(keys, vec![PARAM_PUB_KEY, PARAM_PRIV_KEY, PARAM_ENCODED_PUBLIC_KEY]);
    }

    #[test]
    fn test_locate_returns_first_match() {
        let set: ParamSet = vec![Param::int("a", 1), Param::int("a", 2)].into();
        assert_eq!(set.locate("a").unwrap().as_int(), Some(1));
    }

    proptest! {
        #[test]
        fn prop_octets_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let p = Param::octets(PARAM_PUB_KEY, &bytes);
            prop_assert_eq!(p.as_octets(), Some(&bytes[..]));
        }

        #[test]
        fn prop_set_overwrites_kind(v in any::<i64>(), bytes in proptest::collection::vec(any::<u8>(), 0..32)) {
            let mut p = Param::request("slot");
            p.set_octets(&bytes);
            p.set_int(v);
            prop_assert_eq!(p.as_int(), Some(v));
            prop_assert_eq!(p.as_octets(), None);
            prop_assert!(p.is_modified());
        }
    }
}
