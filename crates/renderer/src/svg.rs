//! SVG serialisation of a rendered chart.
//!
//! The element structure mirrors what a d3 axis produces (a `domain` path and
//! one `tick` group per tick) so external checks that look for `#x-axis .tick`
//! and `rect.cell` keep working.

use crate::axis::{Axis, Orientation, TICK_PADDING, TICK_SIZE};
use crate::chart::{Cell, RenderedChart};
use crate::tooltip::{tooltip_html, tooltip_text};

/// How cells carry their hover text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgMode {
    /// Embedded in an HTML page: each cell has a `data-tooltip` attribute
    /// read by the page script.
    Inline,
    /// A standalone document: each cell has a `<title>` child.
    Standalone,
}

impl RenderedChart {
    /// Standalone SVG document.
    pub fn to_svg(&self) -> String {
        self.svg(SvgMode::Standalone)
    }

    /// SVG markup for the given embedding mode.
    pub fn svg(&self, mode: SvgMode) -> String {
        let config = &self.config;
        let mut svg = String::with_capacity(256 + self.cells.len() * 160);

        if mode == SvgMode::Standalone {
            svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        }
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" font-family="sans-serif" font-size="10">
<rect width="100%" height="100%" fill="white"/>
<g transform="translate({},{})">
"#,
            num(config.width),
            num(config.height),
            num(config.margin.left),
            num(config.margin.top),
        ));

        write_axis(
            &mut svg,
            &self.x_axis,
            Some("x-axis"),
            (0.0, config.inner_height()),
        );
        write_axis(&mut svg, &self.y_axis, Some("y-axis"), (0.0, 0.0));

        for cell in &self.cells {
            write_cell(&mut svg, cell, self.base_temperature, mode);
        }

        write_legend(&mut svg, self);

        svg.push_str("</g>\n</svg>\n");
        svg
    }
}

fn write_cell(svg: &mut String, cell: &Cell, base_temperature: f64, mode: SvgMode) {
    let record = cell.record();
    let attrs = format!(
        r#"class="cell" x="{}" y="{}" width="{}" height="{}" fill="{}" data-month="{}" data-year="{}" data-temp="{}""#,
        num(cell.x),
        num(cell.y),
        num(cell.width),
        num(cell.height),
        cell.fill,
        cell.month_index,
        cell.year,
        cell.temperature,
    );

    match mode {
        SvgMode::Inline => svg.push_str(&format!(
            "<rect {} data-tooltip=\"{}\"/>\n",
            attrs,
            escape_xml(&tooltip_html(&record, base_temperature))
        )),
        SvgMode::Standalone => svg.push_str(&format!(
            "<rect {}><title>{}</title></rect>\n",
            attrs,
            escape_xml(&tooltip_text(&record, base_temperature))
        )),
    }
}

fn write_legend(svg: &mut String, chart: &RenderedChart) {
    let legend = &chart.legend;
    svg.push_str(&format!(
        "<g id=\"legend\" transform=\"translate({},{})\">\n",
        num(legend.offset.0),
        num(legend.offset.1)
    ));

    for swatch in &legend.swatches {
        svg.push_str(&format!(
            "<rect x=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
            num(swatch.x),
            num(swatch.width),
            num(legend.height),
            swatch.color
        ));
    }

    write_axis(svg, &legend.axis, None, (0.0, legend.height));
    svg.push_str("</g>\n");
}

/// Write an axis group translated by `offset`.
fn write_axis(svg: &mut String, axis: &Axis, id: Option<&str>, offset: (f64, f64)) {
    let id_attr = id.map(|id| format!(" id=\"{}\"", id)).unwrap_or_default();
    let transform = if offset == (0.0, 0.0) {
        String::new()
    } else {
        format!(" transform=\"translate({},{})\"", num(offset.0), num(offset.1))
    };
    let (r0, r1) = axis.range;
    let label_offset = TICK_SIZE + TICK_PADDING;

    match axis.orientation {
        Orientation::Bottom => {
            svg.push_str(&format!(
                "<g{}{} fill=\"none\" text-anchor=\"middle\">\n<path class=\"domain\" stroke=\"black\" d=\"M{},{}V0H{}V{}\"/>\n",
                id_attr, transform, num(r0), num(TICK_SIZE), num(r1), num(TICK_SIZE)
            ));
            for tick in &axis.ticks {
                svg.push_str(&format!(
                    "<g class=\"tick\" transform=\"translate({},0)\"><line stroke=\"black\" y2=\"{}\"/><text fill=\"black\" y=\"{}\" dy=\"0.71em\">{}</text></g>\n",
                    num(tick.position),
                    num(TICK_SIZE),
                    num(label_offset),
                    escape_xml(&tick.label)
                ));
            }
        }
        Orientation::Left => {
            svg.push_str(&format!(
                "<g{}{} fill=\"none\" text-anchor=\"end\">\n<path class=\"domain\" stroke=\"black\" d=\"M-{},{}H0V{}H-{}\"/>\n",
                id_attr, transform, num(TICK_SIZE), num(r0), num(r1), num(TICK_SIZE)
            ));
            for tick in &axis.ticks {
                svg.push_str(&format!(
                    "<g class=\"tick\" transform=\"translate(0,{})\"><line stroke=\"black\" x2=\"-{}\"/><text fill=\"black\" x=\"-{}\" dy=\"0.32em\">{}</text></g>\n",
                    num(tick.position),
                    num(TICK_SIZE),
                    num(label_offset),
                    escape_xml(&tick.label)
                ));
            }
        }
    }

    svg.push_str("</g>\n");
}

/// Format a coordinate: shortest round-trip form, without "-0".
pub(crate) fn num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Escape text for use in XML/HTML content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml("<strong>a & \"b\"</strong>"),
            "&lt;strong&gt;a &amp; &quot;b&quot;&lt;/strong&gt;"
        );
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(840.0), "840");
        assert_eq!(num(2.5), "2.5");
    }
}
