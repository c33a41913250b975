//! Display colors for catalog entries.
//!
//! Variants of the same nominal diameter form a block in the data sheet,
//! ordered by increasing outer diameter; a drop in diameter starts the next
//! block. Each entry's display color is its position within the block mapped
//! through the turbo colormap, so neighboring variants of one diameter are
//! visually distinct while blocks repeat the same ramp.

use crate::support::constraint::{Constrained, UnitInterval};

/// Maps positions in [0, 1] to turbo-colormap hex colors.
pub struct ColorScale {
    gradient: colorgrad::Gradient,
}

impl ColorScale {
    /// The turbo colormap.
    #[must_use]
    pub fn turbo() -> Self {
        Self {
            gradient: colorgrad::turbo(),
        }
    }

    /// Hex color (`#rrggbb`) at a position along the scale.
    #[must_use]
    pub fn hex_at(&self, position: Constrained<f64, UnitInterval>) -> String {
        self.gradient.at(position.into_inner()).to_hex_string()
    }
}

/// Block size for every row, where a block ends when the diameter decreases.
///
/// Mirrors the data sheets' layout: `[25, 32, 40, 25, 32]` has a block of
/// three followed by a block of two, so the result is `[3, 3, 3, 2, 2]`.
#[must_use]
pub fn block_sizes(diameters: &[f64]) -> Vec<usize> {
    let mut sizes = vec![0; diameters.len()];
    if diameters.is_empty() {
        return sizes;
    }

    let mut start = 0;
    for i in 1..diameters.len() {
        if diameters[i] < diameters[i - 1] {
            let len = i - start;
            sizes[start..i].fill(len);
            start = i;
        }
    }
    let len = diameters.len() - start;
    sizes[start..].fill(len);

    sizes
}

/// Assigns one turbo hex color per row, restarting the ramp at each block.
#[must_use]
pub fn assign_colors(diameters: &[f64]) -> Vec<String> {
    let scale = ColorScale::turbo();
    let sizes = block_sizes(diameters);

    let mut colors = Vec::with_capacity(diameters.len());
    let mut index = 0usize;
    let mut previous = f64::NEG_INFINITY;
    for (diameter, size) in diameters.iter().zip(&sizes) {
        if *diameter < previous {
            index = 0;
        }
        previous = *diameter;

        let position = UnitInterval::new(index as f64 / *size as f64)
            .expect("a block index is always smaller than its block size");
        colors.push(scale.hex_at(position));
        index += 1;
    }

    colors
}
