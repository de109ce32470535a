//! Standalone HTML page: the chart SVG, the shared tooltip node and the hover
//! script.
//!
//! The script only copies precomputed state onto the tooltip. Each cell's
//! `data-tooltip` holds the [`on_enter`](crate::tooltip::on_enter) content;
//! the opacity and pointer offsets come from the same constants.

use crate::chart::RenderedChart;
use crate::svg::{escape_xml, num, SvgMode};
use crate::tooltip::{TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y, TOOLTIP_OPACITY};

impl RenderedChart {
    /// Self-contained HTML document.
    pub fn to_html(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
<div id="chart-container">
<h1 id="title">{title}</h1>
<p id="description">{description}</p>
{svg}</div>
<div id="tooltip" style="opacity: 0"></div>
<script>{js}</script>
</body>
</html>
"#,
            title = escape_xml(self.title()),
            description = escape_xml(&self.description()),
            css = inline_css(),
            svg = self.svg(SvgMode::Inline),
            js = inline_javascript(),
        )
    }
}

fn inline_css() -> &'static str {
    r#"
body { font-family: sans-serif; margin: 0; padding: 20px; background: #f5f5f5; }
#chart-container { display: inline-block; background: white; padding: 10px 20px; box-shadow: 0 1px 4px rgba(0,0,0,0.2); }
#title { margin: 0; text-align: center; font-size: 22px; }
#description { margin: 4px 0 0; text-align: center; color: #555; }
.cell:hover { stroke: black; stroke-width: 1; }
#tooltip { position: absolute; pointer-events: none; padding: 8px; font-size: 12px; line-height: 1.4; text-align: center; background: rgba(0,0,0,0.8); color: white; border-radius: 4px; transition: opacity 0.1s; }
"#
}

fn inline_javascript() -> String {
    format!(
        r#"
(function () {{
    var tooltip = document.getElementById('tooltip');
    document.querySelectorAll('#chart-container .cell').forEach(function (cell) {{
        cell.addEventListener('mouseover', function (event) {{
            tooltip.style.opacity = {opacity};
            tooltip.innerHTML = cell.getAttribute('data-tooltip');
            tooltip.setAttribute('data-year', cell.getAttribute('data-year'));
            tooltip.style.left = (event.pageX + {dx}) + 'px';
            tooltip.style.top = (event.pageY + {dy}) + 'px';
        }});
        cell.addEventListener('mouseout', function () {{
            tooltip.style.opacity = 0;
        }});
    }});
}})();
"#,
        opacity = num(TOOLTIP_OPACITY),
        dx = num(TOOLTIP_OFFSET_X),
        dy = num(TOOLTIP_OFFSET_Y),
    )
}
