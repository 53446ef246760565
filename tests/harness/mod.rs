pub mod fixtures;

use colfit::app::GridLayout;
use colfit::domain::{ColumnSpec, GridDefaults, ResolvedColumn};

/// Ruler scale: one character per this many pixels.
pub const PX_PER_CHAR: f64 = 10.0;

pub fn create_test_grid(viewport_width: f64, columns: Vec<ColumnSpec>) -> GridLayout {
    create_test_grid_with_defaults(viewport_width, GridDefaults::default(), columns)
}

pub fn create_test_grid_with_defaults(
    viewport_width: f64,
    defaults: GridDefaults,
    columns: Vec<ColumnSpec>,
) -> GridLayout {
    let mut grid = GridLayout::with_defaults(viewport_width, defaults).unwrap();
    for column in columns {
        grid.add_column(column).unwrap();
    }
    grid
}

/// Runs a layout pass and renders the result as text.
pub fn layout_to_string(grid: &mut GridLayout) -> String {
    grid.layout_pass();
    render_layout(grid)
}

pub fn render_layout(grid: &GridLayout) -> String {
    let layout = grid.layout();
    let mut lines = vec![format!(
        "viewport={:.2} reserved={:.2} remaining={:.2} total={:.2} overflow={:.2}",
        layout.viewport_width,
        layout.reserved,
        layout.remaining,
        layout.total_width,
        layout.overflow_amount()
    )];

    for resolved in &layout.columns {
        let mode = grid
            .column(&resolved.id)
            .map_or_else(|| "?".to_string(), |c| c.width().to_string());
        lines.push(format!(
            "{} {} {:.2} {}",
            resolved.id,
            mode,
            resolved.width,
            clamp_label(resolved)
        ));
    }

    lines.push(ruler(&layout.columns));
    lines.join("\n")
}

fn clamp_label(column: &ResolvedColumn) -> &'static str {
    if !column.visible {
        "collapsed"
    } else if column.clamp.at_min {
        "min"
    } else if column.clamp.at_max {
        "max"
    } else {
        "ok"
    }
}

fn ruler(columns: &[ResolvedColumn]) -> String {
    let segments: Vec<String> = columns
        .iter()
        .filter(|c| c.visible)
        .map(|c| {
            let len = (c.width / PX_PER_CHAR).round() as usize;
            let mut segment: String = c.id.as_str().chars().take(len).collect();
            while segment.chars().count() < len {
                segment.push('-');
            }
            segment
        })
        .collect();
    format!("|{}|", segments.join("|"))
}
