//! Server-side HTML rendering of the single UI page

use crate::digest::{DigestReport, NoticeLevel};
use crate::themes::ThemeFile;
use html_escape::{encode_double_quoted_attribute, encode_text};

/// What the page shows besides the topic form
#[derive(Debug, Default)]
pub struct PageView<'a> {
    pub selected: Option<&'a str>,
    pub report: Option<&'a DigestReport>,
    pub error: Option<String>,
    pub warning: Option<String>,
}

/// Renders the whole page
pub fn render_page(themes: &ThemeFile, view: &PageView<'_>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(concat!(
        "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n",
        "<meta charset=\"utf-8\">\n",
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        "<title>Web Scraper &amp; OpenAI</title>\n",
        "<style>\n",
        "body{font-family:sans-serif;max-width:60rem;margin:2rem auto;padding:0 1rem;line-height:1.5}\n",
        ".notice{padding:.5rem 1rem;border-radius:4px;margin:.5rem 0}\n",
        ".success{background:#e6f4ea}.info{background:#e8f0fe}.warning{background:#fef7e0}.error{background:#fce8e6}\n",
        "</style>\n</head>\n<body>\n",
        "<h1>Web Scraper &amp; OpenRouter Analysis</h1>\n",
    ));

    render_form(&mut html, themes, view.selected);

    if let Some(warning) = &view.warning {
        push_notice(&mut html, "warning", warning);
    }
    if let Some(error) = &view.error {
        push_notice(&mut html, "error", error);
    }
    if let Some(report) = view.report {
        render_report(&mut html, report);
    }

    html.push_str("<hr>\n<p class=\"notice info\">Applications disponibles :</p>\n<ul>\n");
    for theme in &themes.themes {
        html.push_str(&format!(
            "<li>{} : {}</li>\n",
            encode_text(&theme.name),
            encode_text(&theme.description)
        ));
    }
    html.push_str("</ul>\n</body>\n</html>\n");

    html
}

fn render_form(html: &mut String, themes: &ThemeFile, selected: Option<&str>) {
    html.push_str("<form method=\"post\" action=\"/digest\">\n");
    html.push_str("<label for=\"topic\">Sélectionnez un thème</label>\n");
    html.push_str("<select id=\"topic\" name=\"topic\">\n");
    for name in themes.names() {
        let marker = if Some(name) == selected { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            encode_double_quoted_attribute(name),
            marker,
            encode_text(name)
        ));
    }
    html.push_str("</select>\n<button type=\"submit\">Lancer le scraping</button>\n</form>\n");
}

fn render_report(html: &mut String, report: &DigestReport) {
    for notice in &report.notices {
        let class = match notice.level {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        };
        push_notice(html, class, &notice.message);
    }

    html.push_str("<h2>Résultats de l'analyse</h2>\n");

    let data_uri = report.audio.as_ref().map(|clip| clip.to_data_uri());

    if let Some(uri) = &data_uri {
        html.push_str(&format!(
            "<audio id=\"player\" controls src=\"{}\"></audio>\n",
            uri
        ));
        html.push_str(concat!(
            "<p><label for=\"speed\">Vitesse de lecture : <span id=\"speed-value\">1.0</span>x</label>\n",
            "<input id=\"speed\" type=\"range\" min=\"0.5\" max=\"2.0\" step=\"0.1\" value=\"1.0\" ",
            "oninput=\"document.getElementById('player').playbackRate=this.value;",
            "document.getElementById('speed-value').textContent=this.value\"></p>\n",
        ));
    }

    html.push_str("<div class=\"summary\">\n");
    for paragraph in report
        .summary
        .as_str()
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
    {
        html.push_str(&format!(
            "<p>{}</p>\n",
            encode_text(paragraph).replace('\n', "<br>\n")
        ));
    }
    html.push_str("</div>\n");

    if let Some(uri) = &data_uri {
        html.push_str(&format!(
            "<p><a download=\"{}\" href=\"{}\">Télécharger l'audio (MP3)</a></p>\n",
            encode_double_quoted_attribute(&report.audio_file_name()),
            uri
        ));
    }
}

fn push_notice(html: &mut String, class: &str, message: &str) {
    html.push_str(&format!(
        "<p class=\"notice {}\">{}</p>\n",
        class,
        encode_text(message)
    ));
}
