//! Password form state.
//!
//! `FormState` is the whole form as one value. Every user action consumes the
//! current state and returns the next one, so the front ends only ever swap a
//! single field and the transitions can be tested without a terminal.

mod validate;

use std::fmt;

use log::{debug, info, warn};
use rand::Rng;
use zeroize::Zeroizing;

use crate::error::{FormError, ValidationError};
use crate::pass::{self, Category, CategorySet};

pub use validate::{PasswordLength, validate};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 16;

/// Output of the last successful submit, with the settings that produced it.
#[derive(Clone, PartialEq, Eq)]
pub struct Generated {
    password: Zeroizing<String>,
    length: usize,
    pool_size: usize,
}

impl Generated {
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    pub fn entropy_bits(&self) -> f64 {
        pass::entropy_bits(self.length, self.pool_size)
    }
}

impl fmt::Debug for Generated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generated")
            .field("password", &"<redacted>")
            .field("length", &self.length)
            .field("pool_size", &self.pool_size)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub length_input: String,
    pub categories: CategorySet,
    result: Option<Generated>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_generated(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<&Generated> {
        self.result.as_ref()
    }

    /// The generated password, or `""` before the first successful submit.
    pub fn password(&self) -> &str {
        self.result.as_ref().map_or("", Generated::password)
    }

    pub fn validation(&self) -> Result<PasswordLength, ValidationError> {
        validate(&self.length_input)
    }

    /// Generate is enabled only for a valid length.
    pub fn can_submit(&self) -> bool {
        self.validation().is_ok()
    }

    pub fn with_length_input(self, input: impl Into<String>) -> Self {
        let length_input = input.into();
        debug!("length input: {:?}", length_input);
        Self {
            length_input,
            ..self
        }
    }

    pub fn toggle(self, category: Category) -> Self {
        let categories = self.categories.toggled(category);
        debug!(
            "{:?} -> {}",
            category,
            if categories.contains(category) { "on" } else { "off" }
        );
        Self { categories, ..self }
    }

    /// Back to a freshly mounted form.
    pub fn reset(self) -> Self {
        debug!("form reset");
        Self::default()
    }

    /// Validate, build the pool and generate.
    ///
    /// On error the caller keeps the current state: the previous result, if
    /// any, stays on screen.
    pub fn submit<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, FormError> {
        let length = self.validation().inspect_err(|e| warn!("submit rejected: {e}"))?;

        let pool = pass::assemble_pool(&self.categories);
        let password = pass::generate(&pool, length.get(), rng)
            .inspect_err(|e| warn!("submit rejected: {e}"))?;

        info!(
            "generated password: length {}, pool {} chars",
            length.get(),
            pool.len()
        );

        Ok(Self {
            length_input: self.length_input.clone(),
            categories: self.categories,
            result: Some(Generated {
                password,
                length: length.get(),
                pool_size: pool.len(),
            }),
        })
    }
}
