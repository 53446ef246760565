use colfit::app::ports::ContentMeasurer;
use colfit::domain::{ColumnSpec, ColumnWidth, Visibility};
use colfit::infra::MonospaceMeasurer;

pub fn star(id: &str, weight: f64) -> ColumnSpec {
    ColumnSpec::new(id, ColumnWidth::star(weight))
}

pub fn pixel(id: &str, px: f64) -> ColumnSpec {
    ColumnSpec::new(id, ColumnWidth::pixel(px).unwrap())
}

/// A 400px column capped at 150 followed by eight single stars.
pub fn capped_pixel_and_stars() -> Vec<ColumnSpec> {
    let mut columns = vec![pixel("c0", 400.0).with_max_width(150.0).unwrap()];
    columns.extend((1..9).map(|i| star(&format!("c{i}"), 1.0)));
    columns
}

pub fn weighted_stars() -> Vec<ColumnSpec> {
    vec![
        star("a", 1.0),
        star("b", 1.0),
        star("c", 2.0),
        star("d", 2.0),
    ]
}

pub fn pixel_and_four_stars() -> Vec<ColumnSpec> {
    vec![
        pixel("p", 50.0),
        star("a", 1.0),
        star("b", 1.0),
        star("c", 1.0),
        star("d", 1.0),
    ]
}

/// Customer table: fixed id, content-sized name, two stars and a hidden
/// column.
pub fn customer_columns() -> Vec<ColumnSpec> {
    let measurer = MonospaceMeasurer::default();
    let name = measurer.measure("Name", &["Alice", "Bartholomew", "Cy"]);

    let mut internal = pixel("internal", 300.0);
    internal.visibility = Visibility::Collapsed;

    vec![
        pixel("id", 60.0),
        ColumnSpec::new("name", ColumnWidth::auto()).with_measured(name.cell, name.header),
        star("email", 2.0),
        star("notes", 1.0).with_max_width(120.0).unwrap(),
        internal,
    ]
}
