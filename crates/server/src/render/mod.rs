//! HTML page rendering.
//!
//! Pages are a shared layout with a navigation menu around either the
//! preview tables (index) or one or more Plotly figures rendered client-side.

pub mod figures;

use serde_json::Value;
use std::fmt::Write;
use titledash_core::TitleSummary;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Navigation entries: (path, label).
pub const MENU: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/content_distribution", "Content distribution"),
    ("/content_by_year", "Content by year"),
    ("/movie_duration", "Movie duration"),
    ("/rating_distribution", "Rating distribution"),
    ("/content_by_country", "Content by country"),
];

/// Body of a chart page.
pub enum PageBody<'a> {
    /// Figures stacked vertically, in order.
    Figures(Vec<Value>),
    /// Message shown in place of a chart.
    Message(&'a str),
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Serialize a figure for embedding inside a `<script>` element.
fn script_json(value: &Value) -> String {
    // `</` would close the script element early.
    value.to_string().replace("</", "<\\/")
}

fn layout(title: &str, content: &str, with_plotly: bool) -> String {
    let mut nav = String::new();
    for (path, label) in MENU {
        let _ = write!(nav, r#"<li><a href="{}">{}</a></li>"#, path, label);
    }
    let script = if with_plotly {
        format!(r#"<script src="{}"></script>"#, PLOTLY_CDN)
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
{script}
<style>
body {{ font-family: sans-serif; margin: 2rem; }}
nav ul {{ list-style: none; padding: 0; display: flex; gap: 1rem; }}
table.table {{ border-collapse: collapse; margin-bottom: 2rem; }}
table.table th, table.table td {{ border: 1px solid #ddd; padding: 0.3rem 0.6rem; }}
table.table-striped tr:nth-child(even) {{ background: #f5f5f5; }}
</style>
</head>
<body>
<nav><ul>{nav}</ul></nav>
<h1>{title}</h1>
{content}
</body>
</html>
"#,
        title = escape_html(title),
        script = script,
        nav = nav,
        content = content,
    )
}

/// Render a striped table of preview rows.
pub fn summary_table(rows: &[TitleSummary]) -> String {
    let mut html = String::from(
        r#"<table class="table table-striped"><thead><tr><th>title</th><th>type</th><th>rating</th><th>release_year</th></tr></thead><tbody>"#,
    );
    for row in rows {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&row.title),
            escape_html(&row.content_type),
            escape_html(row.rating.as_deref().unwrap_or_default()),
            row.release_year.map(|y| y.to_string()).unwrap_or_default(),
        );
    }
    html.push_str("</tbody></table>");
    html
}

/// Index page with the movie and TV show previews.
pub fn index_page(movies: &[TitleSummary], tv_shows: &[TitleSummary]) -> String {
    let content = format!(
        "<h2>Movies</h2>\n{}\n<h2>TV Shows</h2>\n{}",
        summary_table(movies),
        summary_table(tv_shows)
    );
    layout("Catalog dashboard", &content, false)
}

/// Chart page with one or more figures, or a placeholder message.
pub fn chart_page(title: &str, body: PageBody<'_>) -> String {
    match body {
        PageBody::Figures(figures) => {
            let mut content = String::new();
            for (i, figure) in figures.iter().enumerate() {
                let _ = write!(
                    content,
                    r#"<div id="chart-{i}"></div>
<script>(function() {{ var fig = {fig}; Plotly.newPlot("chart-{i}", fig.data, fig.layout, {{responsive: true}}); }})();</script>
"#,
                    i = i,
                    fig = script_json(figure),
                );
            }
            layout(title, &content, true)
        }
        PageBody::Message(message) => {
            let content = format!("<h3>{}</h3>", escape_html(message));
            layout(title, &content, false)
        }
    }
}
