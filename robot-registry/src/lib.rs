//! Robot name resolution.
//!
//! A [`RobotRegistry`] maps robot names to validated
//! [`RobotDescriptor`] instances. Construction of each descriptor happens at
//! most once per name: the result is cached behind the registry and every
//! later (or concurrent) resolution of the same name receives the same
//! shared instance. Descriptors are immutable, so one instance can back any
//! number of environment replicas.
//!
//! # Example
//!
//! ```
//! use robot_registry::get_robot;
//!
//! let ur5e = get_robot("ur5e").expect("built-in robot");
//! assert_eq!(ur5e.num_joints(), 6);
//!
//! // Resolution is memoized: the same Arc comes back.
//! let again = get_robot("ur5e").expect("built-in robot");
//! assert!(std::sync::Arc::ptr_eq(&ur5e, &again));
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;

use robot_models::{SpecFn, BUILTIN};
use robot_types::{RobotDescriptor, SchemaError};

/// Errors from robot name resolution.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    /// The requested name is not registered.
    #[error("unknown robot: {0}")]
    UnknownRobot(String),

    /// The registered declaration failed schema validation.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Registry of robot declarations, resolving names to shared descriptors.
pub struct RobotRegistry {
    constructors: HashMap<String, SpecFn>,
    /// Construction happens under this lock, so concurrent resolvers of one
    /// name can never race-build two distinct descriptors.
    cache: Mutex<HashMap<String, Arc<RobotDescriptor>>>,
}

impl Default for RobotRegistry {
    fn default() -> Self {
        Self::with_builtin_robots()
    }
}

impl RobotRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Create a registry pre-loaded with every built-in robot.
    #[must_use]
    pub fn with_builtin_robots() -> Self {
        let mut registry = Self::new();
        for (name, construct) in BUILTIN {
            registry.register(*name, *construct);
        }
        registry
    }

    /// Register a declaration under a name, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, construct: SpecFn) {
        let name = name.into();
        tracing::debug!("registering robot '{name}'");
        self.constructors.insert(name, construct);
    }

    /// Check whether a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// All registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve a name to its descriptor, constructing and caching on first
    /// use.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownRobot`] for unregistered names;
    /// [`RegistryError::Schema`] when the registered declaration fails
    /// validation (in which case nothing is cached and the error repeats on
    /// every attempt).
    pub fn resolve(&self, name: &str) -> Result<Arc<RobotDescriptor>, RegistryError> {
        let construct = self
            .constructors
            .get(name)
            .ok_or_else(|| RegistryError::UnknownRobot(name.to_string()))?;

        let mut cache = self
            .cache
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(descriptor) = cache.get(name) {
            return Ok(Arc::clone(descriptor));
        }

        let descriptor = Arc::new(RobotDescriptor::try_from(construct())?);
        cache.insert(name.to_string(), Arc::clone(&descriptor));
        Ok(descriptor)
    }
}

/// Resolve a robot from the process-wide default registry (built-ins only).
pub fn get_robot(name: &str) -> Result<Arc<RobotDescriptor>, RegistryError> {
    static DEFAULT: OnceLock<RobotRegistry> = OnceLock::new();
    DEFAULT
        .get_or_init(RobotRegistry::with_builtin_robots)
        .resolve(name)
}
