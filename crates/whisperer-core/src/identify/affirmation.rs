//! Affirmation templates and how one is picked.

use std::fmt;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, WhispererError};

/// Placeholder replaced with the plant's display name.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// The five templates shipped with the application.
pub const DEFAULT_TEMPLATES: [&str; 5] = [
    "Like this {name}, you stand tall and graceful, bringing natural beauty to every space you enter.",
    "Just like the resilient {name}, you thrive wherever you are planted. Your strength inspires those around you.",
    "Like the {name}, you grow at your own pace, and every new leaf is proof of your progress.",
    "The {name} reminds you that quiet care creates lasting beauty. You deserve that same care.",
    "Like this {name} reaching toward the light, you are always growing toward your brightest self.",
];

/// The shipped templates as owned strings.
pub fn default_templates() -> Vec<String> {
    DEFAULT_TEMPLATES.into_iter().map(String::from).collect()
}

/// Picks which template to use.
pub trait AffirmationSelector: fmt::Debug + Send + Sync {
    /// Returns an index in `0..count`. `count` is never zero.
    fn select(&self, count: usize) -> usize;
}

/// Uniform, unseeded selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSelector;

impl AffirmationSelector for RandomSelector {
    fn select(&self, count: usize) -> usize {
        rand::thread_rng().gen_range(0..count)
    }
}

/// Uniform selection from a fixed seed, for reproducible output.
#[derive(Debug)]
pub struct SeededSelector {
    rng: Mutex<StdRng>,
}

impl SeededSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl AffirmationSelector for SeededSelector {
    fn select(&self, count: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|p| p.into_inner());
        rng.gen_range(0..count)
    }
}

/// Immutable template list plus the selector that picks from it.
#[derive(Debug)]
pub struct Affirmations {
    templates: Vec<String>,
    selector: Box<dyn AffirmationSelector>,
}

impl Affirmations {
    /// Fails when `templates` is empty.
    pub fn new(templates: Vec<String>, selector: Box<dyn AffirmationSelector>) -> Result<Self> {
        if templates.is_empty() {
            return Err(WhispererError::invalid_input("affirmation_templates")
                .with_reason("at least one template is required"));
        }
        Ok(Self {
            templates,
            selector,
        })
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    /// Renders one template with `name` interpolated.
    pub fn generate(&self, name: &str) -> String {
        let index = self.selector.select(self.templates.len()) % self.templates.len();
        self.templates[index].replace(NAME_PLACEHOLDER, name)
    }
}

impl Default for Affirmations {
    fn default() -> Self {
        Self {
            templates: default_templates(),
            selector: Box::new(RandomSelector),
        }
    }
}
