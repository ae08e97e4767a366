use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

pub type ParseHook<T> = dyn Fn(&Value, T) -> T + Send + Sync;
pub type SerializeHook<T> = dyn Fn(&T, Value) -> Value + Send + Sync;

/// Settings that change how strictly documents are accepted.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CodecOptions {
    /// Reject values that break the bounds documented in the OCPP schemas
    /// (percentages, multipliers, maximum string lengths, ...).
    pub strict_bounds: bool,
}

/// Per-type functions that run after a value was parsed or serialized.
///
/// A parse hook receives the raw JSON and the freshly built value and returns
/// the value to hand out. A serialize hook receives the value and its JSON
/// and returns the JSON to emit. Hooks are looked up for every nested value,
/// so registering one for `Cost` also affects the costs inside a
/// `ConsumptionCost`.
#[derive(Clone, Default)]
pub struct CodecHooks {
    parsers: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    serializers: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl CodecHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_parse<T: 'static>(
        mut self,
        hook: impl Fn(&Value, T) -> T + Send + Sync + 'static,
    ) -> Self {
        let hook: Arc<ParseHook<T>> = Arc::new(hook);
        self.parsers.insert(TypeId::of::<T>(), Arc::new(hook));
        self
    }

    pub fn on_serialize<T: 'static>(
        mut self,
        hook: impl Fn(&T, Value) -> Value + Send + Sync + 'static,
    ) -> Self {
        let hook: Arc<SerializeHook<T>> = Arc::new(hook);
        self.serializers.insert(TypeId::of::<T>(), Arc::new(hook));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty() && self.serializers.is_empty()
    }

    pub(crate) fn after_parse<T: 'static>(&self, json: &Value, value: T) -> T {
        match self
            .parsers
            .get(&TypeId::of::<T>())
            .and_then(|hook| hook.downcast_ref::<Arc<ParseHook<T>>>())
        {
            Some(hook) => {
                log::trace!("running parse hook for {}", core::any::type_name::<T>());
                hook(json, value)
            }
            None => value,
        }
    }

    pub(crate) fn after_serialize<T: 'static>(&self, value: &T, json: Value) -> Value {
        match self
            .serializers
            .get(&TypeId::of::<T>())
            .and_then(|hook| hook.downcast_ref::<Arc<SerializeHook<T>>>())
        {
            Some(hook) => {
                log::trace!("running serialize hook for {}", core::any::type_name::<T>());
                hook(value, json)
            }
            None => json,
        }
    }
}

impl fmt::Debug for CodecHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecHooks")
            .field("parsers", &self.parsers.len())
            .field("serializers", &self.serializers.len())
            .finish()
    }
}

/// Everything a parse or serialize call needs besides the value itself.
#[derive(Clone, Debug, Default)]
pub struct CodecContext {
    options: CodecOptions,
    hooks: CodecHooks,
}

impl CodecContext {
    pub fn new(options: CodecOptions, hooks: CodecHooks) -> Self {
        Self { options, hooks }
    }

    pub fn strict() -> Self {
        Self::new(CodecOptions { strict_bounds: true }, CodecHooks::default())
    }

    pub fn with_hooks(hooks: CodecHooks) -> Self {
        Self::new(CodecOptions::default(), hooks)
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    pub fn hooks(&self) -> &CodecHooks {
        &self.hooks
    }
}
