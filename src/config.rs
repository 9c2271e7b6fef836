// Tue Jan 13 2026 - Alex

use crate::structure::ReflectError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Highest raw slot count the binary search will consider.
    pub search_ceiling: usize,
    /// Widest nested group probed when looking for an aggregate member.
    pub max_span: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            search_ceiling: 64,
            max_span: 10,
        }
    }
}

impl ProbeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_ceiling(mut self, ceiling: usize) -> Self {
        self.search_ceiling = ceiling;
        self
    }

    pub fn with_max_span(mut self, max_span: usize) -> Self {
        self.max_span = max_span;
        self
    }

    pub fn validate(&self) -> Result<(), ReflectError> {
        if self.search_ceiling == 0 {
            return Err(ReflectError::InvalidConfig(
                "search_ceiling must be greater than 0".to_string(),
            ));
        }
        if self.max_span == 0 {
            return Err(ReflectError::InvalidConfig(
                "max_span must be greater than 0".to_string(),
            ));
        }
        if self.max_span > self.search_ceiling {
            return Err(ReflectError::InvalidConfig(format!(
                "max_span ({}) must not exceed search_ceiling ({})",
                self.max_span, self.search_ceiling
            )));
        }
        Ok(())
    }
}
