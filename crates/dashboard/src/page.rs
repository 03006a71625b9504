// File: crates/dashboard/src/page.rs
// Summary: Single-page HTML built from the layout; a small inline script posts control changes.

use std::fmt::Write as _;

use launch_core::Layout;

/// Escape text for HTML element content and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn render(layout: &Layout) -> String {
    let h = &layout.heading;
    let dd = &layout.dropdown;
    let sl = &layout.slider;

    let mut options = String::new();
    for opt in &dd.options {
        let selected = if opt.value == dd.value { " selected" } else { "" };
        let _ = writeln!(
            options,
            r#"      <option value="{}"{selected}>{}</option>"#,
            escape(&opt.value),
            escape(&opt.label)
        );
    }

    let mut marks = String::new();
    for m in &sl.marks {
        let _ = writeln!(marks, r#"      <option value="{}" label="{}"></option>"#, m.value, escape(&m.label));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; margin: 24px; }}
    .graph img {{ max-width: 100%; }}
    .slider input[type=range] {{ width: 80%; display: block; }}
  </style>
</head>
<body>
  <h1 style="text-align: {align}; color: {color}; font-size: {size}px">{title}</h1>
  <select id="{dd_id}" style="width: 80%" data-placeholder="{placeholder}">
{options}  </select>
  <br>
  <div class="graph"><img id="{pie_id}" alt=""></div>
  <br>
  <p>{caption}</p>
  <div class="slider" id="{sl_id}" data-initial-low="{low}" data-initial-high="{high}">
    <input type="range" id="{sl_id}-low" min="{min}" max="{max}" step="{step}" value="{low}" list="{sl_id}-marks">
    <input type="range" id="{sl_id}-high" min="{min}" max="{max}" step="{step}" value="{high}" list="{sl_id}-marks">
    <output id="{sl_id}-value">{low} - {high}</output>
    <datalist id="{sl_id}-marks">
{marks}    </datalist>
  </div>
  <br>
  <div class="graph"><img id="{scatter_id}" alt=""></div>
  <script>
{script}
  </script>
</body>
</html>
"#,
        title = escape(&h.text),
        align = h.align,
        color = h.color,
        size = h.font_size,
        dd_id = dd.id,
        placeholder = escape(dd.placeholder),
        options = options,
        pie_id = layout.pie.id,
        caption = escape(sl.caption),
        sl_id = sl.id,
        min = sl.min,
        max = sl.max,
        step = sl.step,
        low = sl.value[0],
        high = sl.value[1],
        marks = marks,
        scatter_id = layout.scatter.id,
        script = SCRIPT,
    )
}

// Ids are fixed by the layout; keep in sync with ControlId/OutputId.
const SCRIPT: &str = r#"
    const dropdown = document.getElementById('site-dropdown');
    const low = document.getElementById('payload-slider-low');
    const high = document.getElementById('payload-slider-high');
    const shown = document.getElementById('payload-slider-value');
    const slider = document.getElementById('payload-slider');

    // Range inputs snap their value to the step; the observed bounds are carried separately
    // and only replaced once the user moves a thumb.
    let payload = [Number(slider.dataset.initialLow), Number(slider.dataset.initialHigh)];

    function controls() {
      return { site: dropdown.value, payload: payload.slice() };
    }

    function figureUrl(id, c) {
      const q = new URLSearchParams({ site: c.site, min: c.payload[0], max: c.payload[1] });
      return '/api/figure/' + id + '?' + q.toString();
    }

    async function update(changed) {
      const c = controls();
      shown.textContent = c.payload[0] + ' - ' + c.payload[1];
      const body = Object.assign({}, c, changed ? { changed } : {});
      const resp = await fetch('/api/update', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(body),
      });
      if (!resp.ok) {
        console.warn('update rejected:', await resp.text());
        return;
      }
      const outputs = await resp.json();
      for (const [id, spec] of Object.entries(outputs)) {
        const img = document.getElementById(id);
        img.alt = spec.title;
        img.src = figureUrl(id, c);
      }
    }

    // Keep low <= high by pinning the thumb that moved.
    low.addEventListener('input', () => { if (Number(low.value) > Number(high.value)) low.value = high.value; });
    high.addEventListener('input', () => { if (Number(high.value) < Number(low.value)) high.value = low.value; });
    function sliderMoved() {
      payload = [Number(low.value), Number(high.value)];
      update('payload-slider');
    }
    low.addEventListener('change', sliderMoved);
    high.addEventListener('change', sliderMoved);
    dropdown.addEventListener('change', () => update('site-dropdown'));
    update(null);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use launch_core::{DataSet, LaunchRecord, Outcome};

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn page_contains_controls_and_targets() {
        let ds = DataSet::from_records(vec![
            LaunchRecord::new("KSC LC-39A", 2490.0, Outcome::Success, "F9 FT B1031.1"),
            LaunchRecord::new("<odd>", 5300.0, Outcome::Failure, "F9 FT B1032.1"),
        ])
        .unwrap();
        let html = render(&Layout::build(&ds));
        assert!(html.contains(r#"<select id="site-dropdown""#));
        assert!(html.contains(r#"<option value="All Sites" selected>All Sites</option>"#));
        assert!(html.contains(r#"<option value="KSC LC-39A">KSC LC-39A</option>"#));
        assert!(html.contains("&lt;odd&gt;"));
        assert!(!html.contains("<odd>"));
        assert!(html.contains(r#"id="success-pie-chart""#));
        assert!(html.contains(r#"id="success-payload-scatter-chart""#));
        assert!(html.contains(r#"id="payload-slider-low" min="0" max="10000" step="1000" value="2490""#));
        assert!(html.contains(r#"value="5300""#));
        assert!(html.contains("SpaceX Launch Records Dashboard"));
    }

    #[test]
    fn initial_payload_keeps_observed_bounds_off_step() {
        let ds = DataSet::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 350.0, Outcome::Failure, "F9 v1.1 B1012"),
            LaunchRecord::new("VAFB SLC-4E", 9400.0, Outcome::Success, "F9 B4 B1041.1"),
        ])
        .unwrap();
        let layout = Layout::build(&ds);
        assert_eq!(layout.slider.value, [350.0, 9400.0]);
        let html = render(&layout);
        let attrs = format!(
            r#"id="payload-slider" data-initial-low="{}" data-initial-high="{}""#,
            layout.slider.value[0], layout.slider.value[1]
        );
        assert!(html.contains(&attrs), "missing {attrs}");
        assert!(html.contains(r#"data-initial-high="9400""#));
        // The first update and figure URLs use these bounds, not the snapped input values.
        assert!(html.contains("slider.dataset.initialLow"));
        assert!(html.contains("slider.dataset.initialHigh"));
        assert!(!html.contains("payload: [Number(low.value), Number(high.value)]"));
    }
}
