//! Parameter bridge between a [`Key`] and the host's named parameters

use pqkm_api::error::{Error, Result};
use pqkm_api::params::{
    ParamDescriptor, ParamKind, ParamSet, PARAM_BITS, PARAM_ENCODED_PUBLIC_KEY, PARAM_GROUP_NAME,
    PARAM_MAX_SIZE, PARAM_PRIV_KEY, PARAM_PROPERTIES, PARAM_PUB_KEY, PARAM_SECURITY_BITS,
};
use pqkm_api::Selection;
use tracing::debug;

use crate::key::Key;

static GETTABLE: [ParamDescriptor; 6] = [
    ParamDescriptor::new(PARAM_BITS, ParamKind::Int),
    ParamDescriptor::new(PARAM_SECURITY_BITS, ParamKind::Int),
    ParamDescriptor::new(PARAM_MAX_SIZE, ParamKind::Int),
    ParamDescriptor::new(PARAM_ENCODED_PUBLIC_KEY, ParamKind::Octets),
    ParamDescriptor::new(PARAM_PUB_KEY, ParamKind::Octets),
    ParamDescriptor::new(PARAM_PRIV_KEY, ParamKind::Octets),
];

static SETTABLE: [ParamDescriptor; 2] = [
    ParamDescriptor::new(PARAM_ENCODED_PUBLIC_KEY, ParamKind::Octets),
    ParamDescriptor::new(PARAM_PROPERTIES, ParamKind::Utf8),
];

static GEN_SETTABLE: [ParamDescriptor; 2] = [
    ParamDescriptor::new(PARAM_GROUP_NAME, ParamKind::Utf8),
    ParamDescriptor::new(PARAM_PROPERTIES, ParamKind::Utf8),
];

static KEY_TYPES: [ParamDescriptor; 2] = [
    ParamDescriptor::new(PARAM_PUB_KEY, ParamKind::Octets),
    ParamDescriptor::new(PARAM_PRIV_KEY, ParamKind::Octets),
];

fn int(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Fill every request slot of `params` that names a gettable parameter
///
/// Key-part slots fail with [`Error::NullKey`] when the part is absent.
pub fn get_params(key: &Key, params: &mut ParamSet) -> Result<()> {
    debug!(algorithm = key.algorithm_name(), "get params");
    let info = key.info();

    if let Some(p) = params.locate_mut(PARAM_BITS) {
        p.set_int(i64::from(info.security_bits()));
    }
    if let Some(p) = params.locate_mut(PARAM_SECURITY_BITS) {
        p.set_int(i64::from(info.security_bits()));
    }
    if let Some(p) = params.locate_mut(PARAM_MAX_SIZE) {
        p.set_int(int(info.max_output_len()));
    }
    for (name, part) in [
        (PARAM_ENCODED_PUBLIC_KEY, key.public_key()),
        (PARAM_PUB_KEY, key.public_key()),
        (PARAM_PRIV_KEY, key.private_key()),
    ] {
        if let Some(p) = params.locate_mut(name) {
            let bytes = part.ok_or(Error::NullKey { context: name })?;
            p.set_octets(bytes);
        }
    }
    Ok(())
}

/// Apply the settable parameters present in `params`
///
/// Both values are checked before either is applied.
pub fn set_params(key: &mut Key, params: &ParamSet) -> Result<()> {
    debug!(algorithm = key.algorithm_name(), "set params");

    let encoded = match params.locate(PARAM_ENCODED_PUBLIC_KEY) {
        None => None,
        Some(p) => Some(p.as_octets().ok_or_else(|| {
            Error::invalid_input(PARAM_ENCODED_PUBLIC_KEY, "expected an octet string")
        })?),
    };
    let properties = match params.locate(PARAM_PROPERTIES) {
        None => None,
        Some(p) => Some(
            p.as_utf8()
                .ok_or_else(|| Error::invalid_input(PARAM_PROPERTIES, "expected a UTF-8 string"))?,
        ),
    };

    if let Some(bytes) = encoded {
        key.set_encoded_public_key(bytes)
            .map_err(|e| e.with_context(PARAM_ENCODED_PUBLIC_KEY))?;
    }
    if let Some(query) = properties {
        key.set_property_query(Some(query))?;
    }
    Ok(())
}

/// Parameters [`get_params`] understands
pub fn gettable_params() -> &'static [ParamDescriptor] {
    &GETTABLE
}

/// Parameters [`set_params`] understands
pub fn settable_params() -> &'static [ParamDescriptor] {
    &SETTABLE
}

/// Parameters a generation context accepts
pub fn gen_settable_params() -> &'static [ParamDescriptor] {
    &GEN_SETTABLE
}

/// Parameters an import reads for `selection`
///
/// Exactly the key parts named by the selection; none for a selection that
/// names no key part.
pub fn import_types(selection: Selection) -> Option<&'static [ParamDescriptor]> {
    let public = selection.intersects(Selection::PUBLIC_KEY);
    let private = selection.intersects(Selection::PRIVATE_KEY);
    match (public, private) {
        (true, true) => Some(&KEY_TYPES[..]),
        (true, false) => Some(&KEY_TYPES[..1]),
        (false, true) => Some(&KEY_TYPES[1..]),
        (false, false) => None,
    }
}

/// Parameters an export emits for `selection`
pub fn export_types(selection: Selection) -> Option<&'static [ParamDescriptor]> {
    import_types(selection)
}
