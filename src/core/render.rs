use crate::core::OutputContainer;
use crate::domain::model::{RenderStyle, RoadmapRequest, RoadmapStep};
use crate::utils::error::{Result, RoadmapError};

/// Escapes text for safe insertion into element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn roadmap_markup(
    request: &RoadmapRequest,
    steps: &[RoadmapStep],
    style: RenderStyle,
) -> String {
    match style {
        RenderStyle::Compact => compact_markup(steps),
        RenderStyle::Detailed => detailed_markup(request, steps),
    }
}

fn compact_markup(steps: &[RoadmapStep]) -> String {
    let mut html = String::from("<ul>");
    for step in steps {
        html.push_str(&format!(
            "\n  <li>{} - {} gün</li>",
            escape_html(&step.step),
            step.days_needed
        ));
    }
    html.push_str("\n</ul>");
    html
}

fn detailed_markup(request: &RoadmapRequest, steps: &[RoadmapStep]) -> String {
    let mut lines = vec![
        format!("<h3>Hedefiniz: {}</h3>", escape_html(&request.goal)),
        format!("<h4>Günlük Çalışma Süresi: {} saat</h4>", request.daily_time),
        format!(
            "<h4>Öğrenme Tarzı: {}</h4>",
            escape_html(&request.learning_style)
        ),
        "<ul class=\"list-group\">".to_string(),
    ];

    lines.extend(steps.iter().map(|step| {
        format!(
            concat!(
                "  <li class=\"list-group-item\">",
                "<strong>Adım:</strong> {}<br>",
                "<strong>Tahmini Süre:</strong> {} gün</li>"
            ),
            escape_html(&step.step),
            step.days_needed
        )
    }));

    lines.push("</ul>".to_string());
    lines.join("\n")
}

pub fn error_markup(error: &RoadmapError) -> String {
    format!(
        "<div class=\"roadmap-error\" role=\"alert\">{}</div>",
        escape_html(&error.user_friendly_message())
    )
}

/// Overwrites `container` with the rendered roadmap.
pub fn render_roadmap(
    container: &dyn OutputContainer,
    request: &RoadmapRequest,
    steps: &[RoadmapStep],
    style: RenderStyle,
) -> Result<()> {
    container.replace_contents(&roadmap_markup(request, steps, style))
}

/// Overwrites `container` with an error block, superseding any earlier roadmap.
pub fn render_error(container: &dyn OutputContainer, error: &RoadmapError) -> Result<()> {
    container.replace_contents(&error_markup(error))
}
