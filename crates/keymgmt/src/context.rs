//! Provider-level configuration handed to every constructor

/// Library context shared by the keys and generation contexts of one provider
///
/// The default property query applies to keys that carry no query of their
/// own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderContext {
    name: Option<String>,
    property_query: Option<String>,
}

impl ProviderContext {
    /// An unnamed context with no default property query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the library context name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the default property query
    pub fn with_property_query(mut self, query: impl Into<String>) -> Self {
        self.property_query = Some(query.into());
        self
    }

    /// Library context name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Default property query
    pub fn property_query(&self) -> Option<&str> {
        self.property_query.as_deref()
    }
}
