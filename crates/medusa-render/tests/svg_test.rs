use indexmap::IndexMap;
use medusa_render::model::{
    Axis, AxisOrientation, AxisTick, CircleProperty, ClusterRing, Decorations, Frame, SortLabel,
};
use medusa_render::svg::{SvgRenderOptions, render_frame_svg};

fn circle(x: f64, y: f64, r: f64, display: bool) -> CircleProperty {
    CircleProperty {
        x,
        y,
        r,
        display,
        color: "#8dd3c7".to_string(),
        img_url: None,
        label: None,
    }
}

fn frame() -> Frame {
    let mut circles = IndexMap::new();
    circles.insert("a".to_string(), circle(100.0, 100.0, 30.0, true));
    circles.insert("b".to_string(), circle(200.0, 100.0, 20.0, false));
    Frame {
        width: 640.0,
        height: 480.0,
        circles,
        decorations: Decorations::default(),
    }
}

#[test]
fn svg_emits_one_circle_per_record() {
    let svg = render_frame_svg(&frame(), &SvgRenderOptions::default());
    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<circle ").count(), 2);
    assert!(svg.contains(r#"data-id="a""#));
}

#[test]
fn svg_hidden_records_render_with_zero_radius() {
    let svg = render_frame_svg(&frame(), &SvgRenderOptions::default());
    assert!(svg.contains(r#"<circle cx="200" cy="100" r="0""#));
}

#[test]
fn svg_escapes_markup_in_labels_and_urls() {
    let mut f = frame();
    f.circles.get_mut("a").unwrap().label = Some("a<b & \"c\"".to_string());
    let svg = render_frame_svg(&f, &SvgRenderOptions::default());
    assert!(svg.contains("a&lt;b &amp; &quot;c&quot;"));
    assert!(!svg.contains("a<b"));
}

#[test]
fn svg_images_are_clipped_to_their_circle() {
    let mut f = frame();
    f.circles.get_mut("a").unwrap().img_url = Some("https://example.com/logo.png".to_string());
    let svg = render_frame_svg(&f, &SvgRenderOptions::default());
    assert!(svg.contains("<clipPath id=\"medusa-clip-0\">"));
    assert!(svg.contains(r#"href="https://example.com/logo.png""#));
    // Hidden image circles are skipped entirely.
    f.circles.get_mut("a").unwrap().display = false;
    let svg = render_frame_svg(&f, &SvgRenderOptions::default());
    assert!(!svg.contains("<image "));
}

#[test]
fn svg_renders_cluster_rings_sort_labels_and_axes() {
    let mut f = frame();
    f.decorations = Decorations {
        cluster_rings: vec![ClusterRing {
            label: "ai".to_string(),
            x: 150.0,
            y: 100.0,
            r: 80.0,
        }],
        sort_labels: vec![SortLabel {
            id: "a".to_string(),
            x: 100.0,
            y: 150.0,
            width: 60.0,
            label: "42".to_string(),
        }],
        axes: vec![Axis {
            orientation: AxisOrientation::Bottom,
            position: 440.0,
            start: 40.0,
            end: 600.0,
            ticks: vec![AxisTick {
                offset: 40.0,
                label: "0".to_string(),
            }],
        }],
    };
    let svg = render_frame_svg(&f, &SvgRenderOptions::default());
    assert!(svg.contains(r#"fill="none""#));
    assert!(svg.contains(">ai</text>"));
    assert!(svg.contains(">42</text>"));
    assert!(svg.contains(r#"class="axis axis-x""#));
    assert!(svg.contains(">0</text>"));
}

#[test]
fn svg_background_rect_is_optional() {
    let options = SvgRenderOptions {
        background: Some("white".to_string()),
        ..SvgRenderOptions::default()
    };
    let svg = render_frame_svg(&frame(), &options);
    assert!(svg.contains(r#"<rect width="640" height="480" fill="white"/>"#));
    let svg = render_frame_svg(&frame(), &SvgRenderOptions::default());
    assert!(!svg.contains("<rect "));
}
