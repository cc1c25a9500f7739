use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use juliasweep_core::{escape_time, Complex, FieldParams, Grid};

use crate::field::Field;

/// Compute the escape-time field for one frame.
///
/// Every lattice point is evaluated independently, so the field is split
/// into row bands and filled in parallel. The output is identical to a
/// sequential row-by-row loop regardless of thread count: each band writes
/// only its own slice and no point reads another point's result.
pub fn compute_field(grid: &Grid, c: Complex, params: FieldParams) -> Field {
    let start = Instant::now();
    let width = grid.width();
    let height = grid.height();

    let mut field = Field::new(width, height, params.max_iterations);

    field
        .data
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(row, band)| {
            fill_row(grid, c, params, row as u32, band);
        });

    debug!(
        width,
        height,
        max_iter = params.max_iterations,
        elapsed_us = start.elapsed().as_micros() as u64,
        "Computed field"
    );
    field
}

/// Fill one row of the field with escape counts.
#[inline]
fn fill_row(grid: &Grid, c: Complex, params: FieldParams, row: u32, out: &mut [u32]) {
    for (col, slot) in out.iter_mut().enumerate() {
        *slot = escape_time(grid.point(row, col as u32), c, params);
    }
}
