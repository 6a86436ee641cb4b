use serde::{Deserialize, Serialize};

/// Display/material attribute attached to conversion output.
///
/// Opaque to the resolver; it is only threaded through by precedence
/// (instruction style first, first-operand style as fallback).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub name: Option<String>,
    /// Diffuse RGB, each component in [0, 1].
    pub diffuse: Option<[f64; 3]>,
    /// Transparency in [0, 1], 0 = opaque.
    pub transparency: Option<f64>,
}

impl Style {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            diffuse: None,
            transparency: None,
        }
    }
}
