//! Key-generation workflow

use pqkm_api::error::{validate, Error, Result};
use pqkm_api::params::{ParamSet, PARAM_GROUP_NAME, PARAM_PROPERTIES};
use pqkm_api::{KeyType, Selection};
use tracing::debug;

use crate::context::ProviderContext;
use crate::key::Key;
use crate::registry;

/// Pending key generation for one algorithm and key class
#[derive(Debug, Clone)]
pub struct GenContext {
    ctx: ProviderContext,
    algorithm_name: &'static str,
    key_type: KeyType,
    selection: Selection,
    tls_group_name: Option<String>,
    property_query: Option<String>,
}

fn utf8<'a>(params: &'a ParamSet, key: &'static str) -> Result<Option<&'a str>> {
    match params.locate(key) {
        None => Ok(None),
        Some(param) => param
            .as_utf8()
            .map(Some)
            .ok_or_else(|| Error::invalid_input(key, "expected a UTF-8 string")),
    }
}

impl GenContext {
    /// Start a generation, validating the algorithm against the registry
    pub fn init(
        ctx: &ProviderContext,
        selection: Selection,
        name: &str,
        key_type: KeyType,
    ) -> Result<Self> {
        debug!(algorithm = name, %key_type, ?selection, "gen init");
        let info = registry::lookup(name, key_type)?;

        Ok(Self {
            ctx: ctx.clone(),
            algorithm_name: info.name(),
            key_type,
            selection,
            tls_group_name: None,
            property_query: None,
        })
    }

    /// Read the `group` and `properties` parameters
    ///
    /// Both must be UTF-8 strings. Nothing is stored unless both are valid.
    pub fn set_params(&mut self, params: &ParamSet) -> Result<()> {
        debug!(algorithm = self.algorithm_name, "gen set params");
        let group = utf8(params, PARAM_GROUP_NAME)?
            .map(|g| validate::owned_str(PARAM_GROUP_NAME, g))
            .transpose()?;
        let properties = utf8(params, PARAM_PROPERTIES)?
            .map(|p| validate::owned_str(PARAM_PROPERTIES, p))
            .transpose()?;

        if group.is_some() {
            self.tls_group_name = group;
        }
        if properties.is_some() {
            self.property_query = properties;
        }
        Ok(())
    }

    /// Produce a freshly generated key
    ///
    /// The selection mask is not consulted: a full key pair is always made.
    pub fn generate(&self) -> Result<Key> {
        debug!(algorithm = self.algorithm_name, "gen");
        let mut key = Key::new(
            &self.ctx,
            self.algorithm_name,
            None,
            self.key_type,
            self.property_query.as_deref(),
        )?;
        key.set_tls_name(self.tls_group_name.clone());
        key.generate()?;
        Ok(key)
    }

    /// Release the context
    pub fn cleanup(self) {
        debug!(algorithm = self.algorithm_name, "gen cleanup");
    }

    /// Algorithm the context generates for
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm_name
    }

    /// Key class the context generates for
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// Selection given at init
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// TLS group name, if set
    pub fn tls_group_name(&self) -> Option<&str> {
        self.tls_group_name.as_deref()
    }

    /// Property query, if set
    pub fn property_query(&self) -> Option<&str> {
        self.property_query.as_deref()
    }
}
