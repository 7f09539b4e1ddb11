//! Exact rendered output for representative paths.

use pathcode::{PathNode, RenderOptions, parse_path, path_to_code};

fn full() -> RenderOptions {
    RenderOptions::default()
}

fn minified() -> RenderOptions {
    RenderOptions::minified()
}

fn render_nodes(raw: &str, options: &RenderOptions) -> Vec<String> {
    parse_path(raw, options)
        .expect("path should parse")
        .nodes()
        .iter()
        .map(|n| n.render())
        .collect()
}

#[test]
fn absolute_and_relative_arcs_full() {
    let rendered = render_nodes("A5 3 20 0 1 8 8 a15 13 50 1 0 18 80", &full()).concat();
    let rendered = rendered.trim_end();
    insta::assert_snapshot!(rendered, @r"
// A 5 3 20 0 1 8 8
arcTo(
    horizontalEllipseRadius = 5.0f,
    verticalEllipseRadius = 3.0f,
    theta = 20.0f,
    isMoreThanHalf = false,
    isPositiveArc = true,
    x1 = 8.0f,
    y1 = 8.0f,
)
// a 15 13 50 1 0 18 80
arcToRelative(
    a = 15.0f,
    b = 13.0f,
    theta = 50.0f,
    isMoreThanHalf = true,
    isPositiveArc = false,
    dx1 = 18.0f,
    dy1 = 80.0f,
)
");
}

#[test]
fn closed_arcs_full() {
    let rendered = render_nodes("A5 3 20 0 1 8 8z a15 13 50 1 0 18 80z", &full());
    assert_eq!(rendered.len(), 2);
    assert!(rendered[0].starts_with("// A 5 3 20 0 1 8 8z\narcTo(\n"));
    assert!(rendered[0].ends_with("    y1 = 8.0f,\n)\nclose()\n"));
    assert!(rendered[1].starts_with("// a 15 13 50 1 0 18 80z\narcToRelative(\n"));
    assert!(rendered[1].ends_with("    dy1 = 80.0f,\n)\nclose()\n"));
}

#[test]
fn arcs_minified() {
    let rendered = render_nodes("A5 3 20 0 1 8 8z a15 13 50 1 0 18 80", &minified()).join("\n");
    insta::assert_snapshot!(rendered, @r"
arcTo(horizontalEllipseRadius = 5.0f, verticalEllipseRadius = 3.0f, theta = 20.0f, isMoreThanHalf = false, isPositiveArc = true, x1 = 8.0f, y1 = 8.0f)
close()
arcToRelative(a = 15.0f, b = 13.0f, theta = 50.0f, isMoreThanHalf = true, isPositiveArc = false, dx1 = 18.0f, dy1 = 80.0f)
");
}

#[test]
fn two_relative_cubics() {
    let code = path_to_code("c 0,0 143,3 185,-181 c 2,-11 -1,-20 1,-33", &full()).unwrap();
    insta::assert_snapshot!(code, @r"
// c0 0 143 3 185 -181 c2 -11 -1 -20 1 -33
path {
    // c 0 0 143 3 185 -181
    curveToRelative(
        dx1 = 0.0f,
        dy1 = 0.0f,
        dx2 = 143.0f,
        dy2 = 3.0f,
        dx3 = 185.0f,
        dy3 = -181.0f,
    )
    // c 2 -11 -1 -20 1 -33
    curveToRelative(
        dx1 = 2.0f,
        dy1 = -11.0f,
        dx2 = -1.0f,
        dy2 = -20.0f,
        dx3 = 1.0f,
        dy3 = -33.0f,
    )
}
");
}

#[test]
fn mixed_path_minified_block() {
    let code = path_to_code(
        "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-6h2v6z",
        &minified(),
    )
    .unwrap();
    insta::assert_snapshot!(code, @r"
path {
    moveTo(x = 12.0f, y = 2.0f)
    curveTo(x1 = 6.48f, y1 = 2.0f, x2 = 2.0f, y2 = 6.48f, x3 = 2.0f, y3 = 12.0f)
    reflectiveCurveToRelative(dx1 = 4.48f, dy1 = 10.0f, dx2 = 10.0f, dy2 = 10.0f)
    reflectiveCurveToRelative(dx1 = 10.0f, dy1 = -4.48f, dx2 = 10.0f, dy2 = -10.0f)
    reflectiveCurveTo(x1 = 17.52f, y1 = 2.0f, x2 = 12.0f, y2 = 2.0f)
    close()
    moveToRelative(dx = 1.0f, dy = 15.0f)
    horizontalLineToRelative(dx = -2.0f)
    verticalLineToRelative(dy = -6.0f)
    horizontalLineToRelative(dx = 2.0f)
    verticalLineToRelative(dy = 6.0f)
    close()
}
");
}

#[test]
fn quadratics_and_scientific_values() {
    let code = path_to_code("M0 0Q1e-5 2 3 4T5.5.5", &full()).unwrap();
    insta::assert_snapshot!(code, @r"
// M0 0 Q1e-5 2 3 4 T5.5 .5
path {
    // M 0 0
    moveTo(x = 0.0f, y = 0.0f)
    // Q 1.0E-5 2 3 4
    quadTo(
        x1 = 1.0E-5f,
        y1 = 2.0f,
        x2 = 3.0f,
        y2 = 4.0f,
    )
    // T 5.5 0.5
    reflectiveQuadTo(
        x1 = 5.5f,
        y1 = 0.5f,
    )
}
");
}
