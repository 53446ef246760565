//! Width resolution engine.
//!
//! [`resolve`] is pure: it reads a column snapshot and a [`LayoutContext`]
//! and returns a complete [`ResolvedLayout`]. It never fails; a layout that
//! does not fit the viewport is reported through clamp flags and
//! [`ResolvedLayout::is_overflowing`].
//!
//! # Steps
//! 1. Every visible non-star column gets its base width (pixel value or
//!    measured content) clamped to its effective bounds.
//! 2. Those widths are reserved; whatever is left of the viewport goes to the
//!    star pool. Non-star columns are never shrunk to make room.
//! 3. The star pool is filled proportionally to weight. Columns whose share
//!    falls outside their bounds are clamped and leave the pool, and the rest
//!    share what remains. The pool shrinks every round, so there are at most
//!    as many rounds as star columns.

use colfit_domain::{
    ClampFlags, ColumnSpec, LayoutContext, ResolvedColumn, ResolvedLayout, WidthBounds, WidthMode,
};

/// A star column waiting for its share.
#[derive(Debug, Clone, Copy)]
struct StarSlot {
    /// Position in the output list.
    slot: usize,
    weight: f64,
    bounds: WidthBounds,
}

pub fn resolve(columns: &[ColumnSpec], ctx: &LayoutContext) -> ResolvedLayout {
    let mut resolved = Vec::with_capacity(columns.len());
    let mut pool = Vec::new();
    let mut reserved = 0.0;

    for column in display_order(columns) {
        if !column.is_visible() {
            resolved.push(ResolvedColumn {
                id: column.id().clone(),
                width: 0.0,
                star: column.width().is_star(),
                visible: false,
                clamp: ClampFlags::default(),
            });
            continue;
        }

        let bounds = ctx.effective_bounds(column);

        if column.width().is_star() {
            pool.push(StarSlot {
                slot: resolved.len(),
                weight: column.width().star_weight(),
                bounds,
            });
            resolved.push(ResolvedColumn {
                id: column.id().clone(),
                width: 0.0,
                star: true,
                visible: true,
                clamp: ClampFlags::default(),
            });
        } else {
            let base = base_width(column);
            let width = bounds.clamp(base);
            reserved += width;
            resolved.push(ResolvedColumn {
                id: column.id().clone(),
                width,
                star: false,
                visible: true,
                clamp: clamp_flags(&bounds, base),
            });
        }
    }

    let remaining = (ctx.viewport_width() - reserved).max(0.0);
    distribute_star_space(&mut resolved, pool, remaining);

    let total_width = resolved.iter().map(|c| c.width).sum();
    let layout = ResolvedLayout {
        columns: resolved,
        viewport_width: ctx.viewport_width(),
        reserved,
        remaining,
        total_width,
    };

    if layout.is_overflowing() {
        tracing::debug!(
            viewport = layout.viewport_width,
            total = layout.total_width,
            overflow = layout.overflow_amount(),
            "columns overflow the viewport"
        );
    }

    layout
}

/// Columns sorted by display index. Ties keep slice order.
fn display_order(columns: &[ColumnSpec]) -> Vec<&ColumnSpec> {
    let mut ordered: Vec<&ColumnSpec> = columns.iter().collect();
    ordered.sort_by_key(|c| c.display_index);
    ordered
}

/// Unclamped width of a non-star column.
pub fn base_width(column: &ColumnSpec) -> f64 {
    let measured = column.measured();
    match column.width().mode {
        WidthMode::Pixel => column.width().value,
        WidthMode::Auto => measured.cell.max(measured.header),
        WidthMode::SizeToCells => measured.cell,
        WidthMode::SizeToHeader => measured.header,
        // Star widths come from distribution, not from content.
        WidthMode::Star => 0.0,
    }
}

fn clamp_flags(bounds: &WidthBounds, value: f64) -> ClampFlags {
    ClampFlags {
        at_min: bounds.is_below(value),
        at_max: bounds.is_above(value),
    }
}

fn distribute_star_space(resolved: &mut [ResolvedColumn], mut pool: Vec<StarSlot>, remaining: f64) {
    let mut budget = remaining;
    let mut round = 0usize;

    loop {
        if pool.is_empty() {
            return;
        }

        // Weights are rescaled by a power of two so their sum stays finite;
        // the scaling is exact, so shares are unchanged for ordinary weights.
        let scale = weight_scale(&pool);
        let total_weight: f64 = pool.iter().map(|s| s.weight / scale).sum();
        if total_weight == 0.0 || budget <= 0.0 {
            for star in &pool {
                let column = &mut resolved[star.slot];
                column.width = star.bounds.min;
                column.clamp = ClampFlags {
                    at_min: star.bounds.min > 0.0,
                    at_max: false,
                };
            }
            tracing::trace!(
                round,
                starved = pool.len(),
                budget,
                "star pool out of space, pinning to min"
            );
            return;
        }

        round += 1;

        // Every violator in a round is judged against the same budget snapshot.
        let shares: Vec<(StarSlot, f64)> = pool
            .iter()
            .map(|&star| (star, budget * (star.weight / scale) / total_weight))
            .collect();
        let (violators, satisfied): (Vec<_>, Vec<_>) = shares
            .into_iter()
            .partition(|(star, share)| !star.bounds.contains(*share));

        tracing::trace!(
            round,
            pool = satisfied.len() + violators.len(),
            violators = violators.len(),
            budget,
            "star distribution round"
        );

        if violators.is_empty() {
            for (star, share) in satisfied {
                let column = &mut resolved[star.slot];
                column.width = share;
                column.clamp = ClampFlags::default();
            }
            return;
        }

        for (star, share) in &violators {
            let width = star.bounds.clamp(*share);
            let column = &mut resolved[star.slot];
            column.width = width;
            column.clamp = clamp_flags(&star.bounds, *share);
            budget -= width;
        }

        pool = satisfied.into_iter().map(|(star, _)| star).collect();
    }
}

/// Power of two at or just below the largest weight in the pool.
fn weight_scale(pool: &[StarSlot]) -> f64 {
    let max_weight = pool.iter().map(|s| s.weight).fold(0.0, f64::max);
    if max_weight <= 0.0 {
        return 1.0;
    }
    let exponent = max_weight.log2().floor().clamp(-1022.0, 1023.0) as i32;
    2f64.powi(exponent)
}
