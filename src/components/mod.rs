//! Pipeline components and the builder that constructs them.
//!
//! Components are typed structs deserialized from their
//! [`ComponentSpec`](crate::config::ComponentSpec)
//! attributes. Attributes the spec leaves out fall back to the struct's
//! `Default`. Each type declares its registry name and prerequisites through
//! [`ComponentClass`]; the registry stores [`ComponentClass::create`] as the
//! factory for that name.

mod builder;
pub mod classifiers;
pub mod extractors;
pub mod featurizers;
pub mod nlp;
pub mod tokenizers;

pub use builder::ComponentBuilder;

use crate::config::NluConfig;
use crate::error::InvalidConfigError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::any::Any;
use std::fmt::Debug;
use tracing::warn;

/// Factory stored in the registry for one component name.
///
/// Receives the spec attributes (without `name`) and the resolved
/// configuration the component is built for.
pub type ComponentFactory =
    fn(Map<String, Value>, &NluConfig) -> Result<Box<dyn Component>, InvalidConfigError>;

/// A constructed pipeline component.
pub trait Component: Any + Debug + Send + Sync {
    /// Registry name of the component.
    fn name(&self) -> &'static str;

    /// Effective configuration after defaults and build-time adjustments.
    fn component_config(&self) -> Value;

    /// Access to the concrete type.
    fn as_any(&self) -> &dyn Any;
}

impl dyn Component {
    /// Downcast to a concrete component type.
    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// A component type that can be created from a spec.
pub trait ComponentClass: Serialize + DeserializeOwned + Default + Debug + Send + Sync + 'static {
    /// Registry name.
    const NAME: &'static str;

    /// Components that must appear earlier in any pipeline containing this one.
    const REQUIRES: &'static [&'static str] = &[];

    /// Languages this component supports; `None` means any.
    const LANGUAGES: Option<&'static [&'static str]> = None;

    /// Build-time hook, run once after the attributes are applied.
    fn prepare(&mut self, _config: &NluConfig) -> Result<(), String> {
        Ok(())
    }

    /// Deserialize attributes, run [`prepare`](Self::prepare) and box the result.
    ///
    /// Attribute keys the component has no field for are ignored with a
    /// warning.
    fn create(
        attrs: Map<String, Value>,
        config: &NluConfig,
    ) -> Result<Box<dyn Component>, InvalidConfigError> {
        let keys: Vec<String> = attrs.keys().cloned().collect();
        let mut component: Self = serde_json::from_value(Value::Object(attrs)).map_err(|source| {
            InvalidConfigError::InvalidComponentAttribute {
                component: Self::NAME.to_string(),
                source,
            }
        })?;
        for key in unknown_attributes(&component, &keys) {
            warn!(component = Self::NAME, attribute = key, "ignoring unknown component attribute");
        }
        component
            .prepare(config)
            .map_err(|message| InvalidConfigError::ComponentSetup {
                component: Self::NAME.to_string(),
                message,
            })?;
        Ok(Box::new(component))
    }
}

/// Keys in `keys` that do not name a serialized field of `component`.
fn unknown_attributes<'k, T: Serialize>(component: &T, keys: &'k [String]) -> Vec<&'k str> {
    let fields = match serde_json::to_value(component) {
        Ok(Value::Object(map)) => map,
        _ => return Vec::new(),
    };
    keys.iter()
        .map(String::as_str)
        .filter(|key| !fields.contains_key(*key))
        .collect()
}

impl<T: ComponentClass> Component for T {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn component_config(&self) -> Value {
        let mut config = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        config.insert(
            crate::config::NAME_KEY.to_string(),
            Value::String(T::NAME.to_string()),
        );
        Value::Object(config)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
