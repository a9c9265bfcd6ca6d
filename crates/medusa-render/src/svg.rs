//! Headless SVG emitter for a rendered [`Frame`].
//!
//! A rendering adapter over the pure property table: circles (or clipped
//! images), labels, cluster rings, sort captions and plot axes. Hidden
//! records are emitted with radius zero so an animating consumer can keep a
//! stable element per record id.

use std::fmt::Write as _;

use crate::model::{AxisOrientation, Frame};

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    pub background: Option<String>,
    pub font_family: String,
    pub font_size: f64,
    pub font_color: String,
    pub axis_color: String,
    /// Fill opacity for record circles.
    pub circle_opacity: f64,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            background: None,
            font_family: "Lucida Grande, Tahoma, Verdana".to_string(),
            font_size: 14.0,
            font_color: "#4B4F56".to_string(),
            axis_color: "#bbb".to_string(),
            circle_opacity: 0.7,
        }
    }
}

pub fn render_frame_svg(frame: &Frame, options: &SvgRenderOptions) -> String {
    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{ff}" font-size="{fs}">"#,
        w = fmt(frame.width),
        h = fmt(frame.height),
        ff = escape_xml(&options.font_family),
        fs = fmt(options.font_size),
    );

    if let Some(background) = &options.background {
        let _ = write!(
            &mut out,
            r#"<rect width="{w}" height="{h}" fill="{bg}"/>"#,
            w = fmt(frame.width),
            h = fmt(frame.height),
            bg = escape_xml(background),
        );
    }

    // Record circles first, decorations on top (the caller's stacking order).
    out.push_str(r#"<g class="circles">"#);
    for (index, (id, circle)) in frame.circles.iter().enumerate() {
        let r = if circle.display { circle.r } else { 0.0 };
        if let Some(url) = circle.img_url.as_deref().filter(|_| r > 0.0) {
            let clip_id = format!("medusa-clip-{index}");
            let _ = write!(
                &mut out,
                r#"<clipPath id="{clip_id}"><circle cx="{x}" cy="{y}" r="{r}"/></clipPath><image href="{url}" x="{ix}" y="{iy}" width="{s}" height="{s}" preserveAspectRatio="xMidYMid slice" clip-path="url(#{clip_id})" data-id="{id}"/>"#,
                x = fmt(circle.x),
                y = fmt(circle.y),
                r = fmt(r),
                url = escape_xml(url),
                ix = fmt(circle.x - r),
                iy = fmt(circle.y - r),
                s = fmt(r * 2.0),
                id = escape_xml(id),
            );
        } else {
            let _ = write!(
                &mut out,
                r#"<circle cx="{x}" cy="{y}" r="{r}" fill="{fill}" fill-opacity="{op}" data-id="{id}"/>"#,
                x = fmt(circle.x),
                y = fmt(circle.y),
                r = fmt(r),
                fill = escape_xml(&circle.color),
                op = fmt(options.circle_opacity),
                id = escape_xml(id),
            );
        }
        if let Some(label) = circle.label.as_deref() {
            if r > 0.0 {
                let _ = write!(
                    &mut out,
                    r#"<text x="{x}" y="{y}" fill="{fc}" text-anchor="middle" dominant-baseline="central">{text}</text>"#,
                    x = fmt(circle.x),
                    y = fmt(circle.y),
                    fc = escape_xml(&options.font_color),
                    text = escape_xml(label),
                );
            }
        }
    }
    out.push_str("</g>");

    if !frame.decorations.cluster_rings.is_empty() {
        out.push_str(r#"<g class="clusters">"#);
        for ring in &frame.decorations.cluster_rings {
            let _ = write!(
                &mut out,
                r#"<circle cx="{x}" cy="{y}" r="{r}" fill="none" stroke="{stroke}" opacity="0.5"/>"#,
                x = fmt(ring.x),
                y = fmt(ring.y),
                r = fmt(ring.r),
                stroke = escape_xml(&options.axis_color),
            );
        }
        // Labels after the rings so they stay on top.
        for ring in &frame.decorations.cluster_rings {
            let _ = write!(
                &mut out,
                r#"<text x="{x}" y="{y}" fill="{fc}" text-anchor="middle">{text}</text>"#,
                x = fmt(ring.x),
                y = fmt(ring.y - ring.r - 10.0),
                fc = escape_xml(&options.font_color),
                text = escape_xml(&ring.label),
            );
        }
        out.push_str("</g>");
    }

    if !frame.decorations.sort_labels.is_empty() {
        out.push_str(r#"<g class="sort-labels">"#);
        for label in &frame.decorations.sort_labels {
            let _ = write!(
                &mut out,
                r#"<text x="{x}" y="{y}" fill="{fc}" text-anchor="middle">{text}</text>"#,
                x = fmt(label.x),
                y = fmt(label.y),
                fc = escape_xml(&options.font_color),
                text = escape_xml(&label.label),
            );
        }
        out.push_str("</g>");
    }

    for axis in &frame.decorations.axes {
        render_axis(&mut out, axis, options);
    }

    out.push_str("</svg>");
    out
}

fn render_axis(out: &mut String, axis: &crate::model::Axis, options: &SvgRenderOptions) {
    let stroke = escape_xml(&options.axis_color);
    let fc = escape_xml(&options.font_color);
    match axis.orientation {
        AxisOrientation::Bottom => {
            let _ = write!(
                out,
                r#"<g class="axis axis-x"><line x1="{x1}" y1="{p}" x2="{x2}" y2="{p}" stroke="{stroke}"/>"#,
                x1 = fmt(axis.start),
                x2 = fmt(axis.end),
                p = fmt(axis.position),
            );
            for tick in &axis.ticks {
                let _ = write!(
                    out,
                    r#"<line x1="{x}" y1="{p}" x2="{x}" y2="{p2}" stroke="{stroke}"/><text x="{x}" y="{ty}" fill="{fc}" text-anchor="middle">{text}</text>"#,
                    x = fmt(tick.offset),
                    p = fmt(axis.position),
                    p2 = fmt(axis.position + 6.0),
                    ty = fmt(axis.position + 20.0),
                    text = escape_xml(&tick.label),
                );
            }
            out.push_str("</g>");
        }
        AxisOrientation::Left => {
            let _ = write!(
                out,
                r#"<g class="axis axis-y"><line x1="{p}" y1="{y1}" x2="{p}" y2="{y2}" stroke="{stroke}"/>"#,
                y1 = fmt(axis.start),
                y2 = fmt(axis.end),
                p = fmt(axis.position),
            );
            for tick in &axis.ticks {
                let _ = write!(
                    out,
                    r#"<line x1="{p2}" y1="{y}" x2="{p}" y2="{y}" stroke="{stroke}"/><text x="{tx}" y="{y}" fill="{fc}" text-anchor="end" dominant-baseline="central">{text}</text>"#,
                    y = fmt(tick.offset),
                    p = fmt(axis.position),
                    p2 = fmt(axis.position - 6.0),
                    tx = fmt(axis.position - 9.0),
                    text = escape_xml(&tick.label),
                );
            }
            out.push_str("</g>");
        }
    }
}

/// Formats a coordinate with up to three decimal places, trailing zeros
/// trimmed.
fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut r = (v * 1000.0).round() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }
    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_trims_trailing_zeros() {
        assert_eq!(fmt(12.0), "12");
        assert_eq!(fmt(12.345_678), "12.346");
        assert_eq!(fmt(-0.0001), "0");
        assert_eq!(fmt(f64::NAN), "0");
    }

    #[test]
    fn escape_xml_handles_markup_characters() {
        assert_eq!(escape_xml(r#"a<b&"c""#), "a&lt;b&amp;&quot;c&quot;");
    }
}
