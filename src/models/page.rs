// src/models/page.rs

use serde::{Deserialize, Serialize};

use crate::models::stroke::Stroke;

/// A single layer of a page. Identity is the layer's position within the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    /// Zero-based position of the layer inside its page.
    pub id: usize,
    /// Strokes in drawing order.
    pub strokes: Vec<Stroke>,
}

impl Layer {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            strokes: Vec::new(),
        }
    }
}

/// The root container decoded from one `.lines` file.
///
/// A page is built once by the decoder and is read-only afterwards; the
/// renderer only ever borrows it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Layers in file order. A valid page always has at least one.
    pub layers: Vec<Layer>,
}

impl Page {
    /// Iterates every stroke of the page, layer by layer.
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.layers.iter().flat_map(|layer| layer.strokes.iter())
    }

    pub fn stroke_count(&self) -> usize {
        self.layers.iter().map(|l| l.strokes.len()).sum()
    }
}
