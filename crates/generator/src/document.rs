use service_pages_core::PageMetadata;
use serde_json::Value;

/// HTML-escape a string to prevent XSS attacks
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#x27;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Serialize a JSON-LD payload so it cannot terminate its <script> element
fn json_ld(value: &Value) -> String {
    value
        .to_string()
        .replace("</", "<\\/")
        .replace("<!--", "<\\!--")
}

/// "en_IN" -> "en-IN"
fn html_lang(locale: &str) -> String {
    locale.replace('_', "-")
}

/// Wrap a rendered body in a full HTML document with head metadata.
///
/// Shared between preview and build so the preview matches what ships.
/// Preview mode adds the SSE hot-reload script.
pub fn render_document(
    locale: &str,
    metadata: &PageMetadata,
    schemas: &[Value],
    body: &str,
    is_preview: bool,
) -> String {
    let mut head = Vec::new();

    head.push(format!("<title>{}</title>", html_escape(&metadata.title)));
    if !metadata.description.is_empty() {
        head.push(meta_name("description", &metadata.description));
    }
    if !metadata.keywords.is_empty() {
        head.push(meta_name("keywords", &metadata.keywords.join(", ")));
    }
    if let Some(canonical) = &metadata.canonical {
        head.push(format!(
            r#"<link rel="canonical" href="{}">"#,
            html_escape(canonical)
        ));
    } else {
        head.push(meta_name("robots", "noindex"));
    }

    if let Some(og) = &metadata.open_graph {
        head.push(meta_property("og:title", &og.title));
        head.push(meta_property("og:description", &og.description));
        head.push(meta_property("og:url", &og.url));
        head.push(meta_property("og:site_name", &og.site_name));
        head.push(meta_property("og:locale", &og.locale));
        head.push(meta_property("og:type", &og.kind));
        for image in &og.images {
            head.push(meta_property("og:image", &image.url));
            head.push(meta_property("og:image:width", &image.width.to_string()));
            head.push(meta_property("og:image:height", &image.height.to_string()));
        }
    }

    if let Some(twitter) = &metadata.twitter {
        head.push(meta_name("twitter:card", &twitter.card));
        head.push(meta_name("twitter:title", &twitter.title));
        head.push(meta_name("twitter:description", &twitter.description));
    }

    for schema in schemas {
        head.push(format!(
            r#"<script type="application/ld+json">{}</script>"#,
            json_ld(schema)
        ));
    }

    // Hot reload script only in preview mode
    let reload_script = if is_preview {
        r#"<script>
        // Hot reload via Server-Sent Events
        const eventSource = new EventSource('/_reload');
        eventSource.onmessage = () => {
            console.log('Reloading...');
            location.reload();
        };
        eventSource.onerror = () => {
            console.log('Preview server disconnected');
            eventSource.close();
        };
    </script>"#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {}
    <style>{}</style>
</head>
<body>
{}
{}
</body>
</html>"#,
        html_escape(&html_lang(locale)),
        head.join("\n    "),
        STYLES,
        body,
        reload_script
    )
}

fn meta_name(name: &str, content: &str) -> String {
    format!(
        r#"<meta name="{}" content="{}">"#,
        html_escape(name),
        html_escape(content)
    )
}

fn meta_property(property: &str, content: &str) -> String {
    format!(
        r#"<meta property="{}" content="{}">"#,
        html_escape(property),
        html_escape(content)
    )
}

const STYLES: &str = r#"
:root {
    --navy: #001a33;
    --navy-2: #003366;
    --accent: #f97316;
    --accent-dark: #ea580c;
    --cream: #fff7ed;
    --cream-border: #ffedd5;
    --text: #1f2937;
    --muted: #4b5563;
}
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; line-height: 1.6; color: var(--text); }
a { color: inherit; text-decoration: none; }
.container { max-width: 1440px; margin: 0 auto; padding: 0 1.5rem; }
.narrow { max-width: 56rem; }
section { padding: 5rem 0; }
.hero, .cta { background: linear-gradient(135deg, var(--navy), #002952, #003d66); color: white; }
.breadcrumb { display: flex; gap: 0.5rem; flex-wrap: wrap; font-size: 0.875rem; color: rgba(255,255,255,0.6); margin-bottom: 1.5rem; }
.breadcrumb .current { color: white; }
.badge { display: inline-block; padding: 0.5rem 1rem; border-radius: 999px; background: rgba(249,115,22,0.2); color: #fb923c; font-weight: 600; font-size: 0.875rem; margin-bottom: 1rem; }
.hero h1 { font-size: 3rem; line-height: 1.15; margin-bottom: 1.5rem; max-width: 48rem; }
.lead { font-size: 1.25rem; color: #d9e6f2; margin-bottom: 2rem; max-width: 48rem; }
.actions { display: flex; flex-wrap: wrap; gap: 1rem; }
.cta .actions { justify-content: center; }
.btn { display: inline-flex; align-items: center; gap: 0.5rem; padding: 1rem 2rem; border-radius: 0.75rem; font-weight: 700; }
.btn-primary { background: var(--accent); color: white; }
.btn-primary:hover { background: var(--accent-dark); }
.btn-ghost { background: rgba(255,255,255,0.1); border: 1px solid rgba(255,255,255,0.2); color: white; }
.btn-whatsapp { background: #25d366; color: white; }
.layout { display: grid; grid-template-columns: 2fr 1fr; gap: 3rem; }
h2 { font-size: 2rem; margin-bottom: 1.5rem; }
h3 { font-size: 1.5rem; margin-bottom: 1.5rem; }
.features { list-style: none; display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; margin-bottom: 3rem; }
.feature, .benefit, .faq { background: var(--cream); border-radius: 0.75rem; padding: 1rem 1.5rem; }
.benefits { display: grid; gap: 1rem; margin-bottom: 3rem; }
.benefit { display: flex; gap: 1rem; }
.benefit-index { width: 3rem; height: 3rem; flex-shrink: 0; border-radius: 0.5rem; background: var(--accent); color: white; font-weight: 700; display: flex; align-items: center; justify-content: center; }
.quote { border-left: 4px solid var(--accent); padding: 1.5rem; font-style: italic; color: var(--muted); }
.sidebar { display: grid; gap: 1.5rem; align-content: start; position: sticky; top: 6rem; }
.founder-card { background: linear-gradient(135deg, var(--navy), var(--navy-2)); color: white; padding: 1.5rem; border-radius: 1rem; display: grid; gap: 0.75rem; }
.founder-initial { width: 3.5rem; height: 3.5rem; border-radius: 50%; background: var(--accent); display: flex; align-items: center; justify-content: center; font-size: 1.5rem; font-weight: 700; }
.related { border: 1px solid var(--cream-border); padding: 1.5rem; border-radius: 1rem; }
.related ul { list-style: none; }
.related li a { display: block; padding: 0.5rem 0; border-bottom: 1px solid var(--cream-border); color: var(--muted); }
.highlights { background: var(--cream); }
.grid-3 { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
.highlight { background: white; padding: 2rem; border-radius: 1rem; box-shadow: 0 10px 25px rgba(0,0,0,0.08); }
.center { text-align: center; }
.faqs { display: grid; gap: 1rem; }
.faq h3 { font-size: 1.125rem; margin-bottom: 0.75rem; }
.pills { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.75rem; }
.pill { padding: 0.5rem 1rem; border-radius: 0.5rem; background: var(--cream); border: 1px solid var(--cream-border); color: var(--accent-dark); font-size: 0.875rem; }
.pill-strong { background: var(--accent); color: white; }
.site-footer { background: linear-gradient(90deg, var(--navy), var(--navy-2), var(--accent)); color: #d9e6f2; padding: 4rem 0 2rem; }
.footer-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; margin-bottom: 3rem; }
.site-footer h4 { color: white; font-size: 1.125rem; margin-bottom: 1rem; }
.site-footer ul { list-style: none; display: grid; gap: 0.75rem; }
.site-footer a:hover { color: var(--accent); }
.view-all { color: var(--accent); font-weight: 600; font-size: 0.875rem; }
.social { display: flex; gap: 0.75rem; margin-top: 1.5rem; }
.footer-bottom { border-top: 1px solid rgba(255,255,255,0.1); padding-top: 2rem; display: flex; flex-wrap: wrap; justify-content: space-between; gap: 1rem; font-size: 0.875rem; color: #b3cce6; }
.legal { display: flex; gap: 1.5rem; }
.service-area { text-align: center; font-size: 0.75rem; margin-top: 1.5rem; color: #b3cce6; }
@media (max-width: 1024px) {
    .layout, .footer-grid, .grid-3 { grid-template-columns: 1fr; }
    .features { grid-template-columns: 1fr; }
    .hero h1 { font-size: 2.25rem; }
}
"#;
